use serde::{Deserialize, Serialize};

use crate::kind::{Record, RecordKind};

/// A transferable asset: the generic record kind.
///
/// Fields are declared in alphabetical order of their serialized names so the
/// canonical encoding is sorted-key JSON (see [`crate::codec`]).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    #[serde(rename = "appraisedValue")]
    pub appraised_value: i64,
    #[serde(rename = "assetID")]
    pub asset_id: String,
    pub color: String,
    pub owner: String,
    pub size: i64,
}

impl Asset {
    pub fn new(
        asset_id: impl Into<String>,
        color: impl Into<String>,
        size: i64,
        owner: impl Into<String>,
        appraised_value: i64,
    ) -> Self {
        Self {
            appraised_value,
            asset_id: asset_id.into(),
            color: color.into(),
            owner: owner.into(),
            size,
        }
    }

    /// A copy of this asset differing only in its owner.
    pub fn with_owner(&self, new_owner: impl Into<String>) -> Self {
        Self {
            owner: new_owner.into(),
            ..self.clone()
        }
    }
}

impl Record for Asset {
    const KIND: RecordKind = RecordKind::Asset;

    fn id(&self) -> &str {
        &self.asset_id
    }
}
