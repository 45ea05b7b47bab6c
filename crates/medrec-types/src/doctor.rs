use serde::{Deserialize, Serialize};

use crate::kind::{Record, RecordKind};

/// A doctor record. Create/read/delete only, like [`crate::Patient`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub address: String,
    #[serde(rename = "contactNumber")]
    pub contact_number: String,
    #[serde(rename = "doctorID")]
    pub doctor_id: String,
    #[serde(rename = "hospitalName")]
    pub hospital_name: String,
    pub name: String,
    #[serde(rename = "regNumber")]
    pub reg_number: String,
}

impl Doctor {
    pub fn new(
        doctor_id: impl Into<String>,
        name: impl Into<String>,
        hospital_name: impl Into<String>,
        reg_number: impl Into<String>,
        contact_number: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            contact_number: contact_number.into(),
            doctor_id: doctor_id.into(),
            hospital_name: hospital_name.into(),
            name: name.into(),
            reg_number: reg_number.into(),
        }
    }
}

impl Record for Doctor {
    const KIND: RecordKind = RecordKind::Doctor;

    fn id(&self) -> &str {
        &self.doctor_id
    }
}
