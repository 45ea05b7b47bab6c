use serde::{Deserialize, Serialize};

use crate::kind::{Record, RecordKind};

/// A patient record. Create/read/delete only: no update path is defined for
/// this kind (see the repository crate's documented asymmetry).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub address: String,
    #[serde(rename = "contactNumber")]
    pub contact_number: String,
    pub dob: String,
    #[serde(rename = "emergencyContactNumber")]
    pub emergency_contact_number: String,
    pub name: String,
    #[serde(rename = "patientID")]
    pub patient_id: String,
}

impl Patient {
    pub fn new(
        patient_id: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
        dob: impl Into<String>,
        contact_number: impl Into<String>,
        emergency_contact_number: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            contact_number: contact_number.into(),
            dob: dob.into(),
            emergency_contact_number: emergency_contact_number.into(),
            name: name.into(),
            patient_id: patient_id.into(),
        }
    }
}

impl Record for Patient {
    const KIND: RecordKind = RecordKind::Patient;

    fn id(&self) -> &str {
        &self.patient_id
    }
}
