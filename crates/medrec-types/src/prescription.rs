use serde::{Deserialize, Serialize};

use crate::kind::{Record, RecordKind};

/// A prescription linking a patient to a doctor. Create/read/delete only.
///
/// The `patient_id` and `doctor_id` fields are plain strings: the ledger does
/// not enforce referential integrity between kinds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    pub date: String,
    #[serde(rename = "doctorID")]
    pub doctor_id: String,
    pub medicine: String,
    #[serde(rename = "patientID")]
    pub patient_id: String,
    #[serde(rename = "prescriptionID")]
    pub prescription_id: String,
}

impl Prescription {
    pub fn new(
        prescription_id: impl Into<String>,
        patient_id: impl Into<String>,
        doctor_id: impl Into<String>,
        date: impl Into<String>,
        medicine: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            doctor_id: doctor_id.into(),
            medicine: medicine.into(),
            patient_id: patient_id.into(),
            prescription_id: prescription_id.into(),
        }
    }
}

impl Record for Prescription {
    const KIND: RecordKind = RecordKind::Prescription;

    fn id(&self) -> &str {
        &self.prescription_id
    }
}
