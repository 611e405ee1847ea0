use serde::{Deserialize, Serialize};

/// Patient demographics. One row per `patient_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub patient_id: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub blood_group: String,
    pub address: String,
    pub phone: String,
    /// ISO date (`YYYY-MM-DD`).
    pub registration_date: String,
}

/// Identifier + display name, for patient pickers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientSummary {
    pub patient_id: String,
    pub name: String,
}
