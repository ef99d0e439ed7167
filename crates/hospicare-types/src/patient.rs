use serde::{Deserialize, Serialize};

/// A patient record as stored in the `Patients` table.
///
/// Serialized field names are the wire names used by the HTTP API, which
/// match the store's column names (`patientID`, `patientFirstName`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// Store-assigned numeric identity.
    #[serde(rename = "patientID")]
    pub id: i64,
    #[serde(rename = "patientFirstName")]
    pub first_name: String,
    #[serde(rename = "patientLastName")]
    pub last_name: String,
    #[serde(rename = "patientHomePhone")]
    pub home_phone: String,
    #[serde(rename = "patientEmailAddress")]
    pub email_address: String,
}

/// Request body for `POST /patients`.
///
/// Every field is optional at the parse boundary so a missing or empty
/// field can be reported by name instead of failing deserialization
/// wholesale. Validation turns this into a [`NewPatient`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePatientRequest {
    #[serde(rename = "patientFirstName")]
    pub first_name: Option<String>,
    #[serde(rename = "patientLastName")]
    pub last_name: Option<String>,
    #[serde(rename = "patientHomePhone")]
    pub home_phone: Option<String>,
    #[serde(rename = "patientEmailAddress")]
    pub email_address: Option<String>,
}

/// A validated patient payload ready for insertion. The id is assigned by
/// the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPatient {
    pub first_name: String,
    pub last_name: String,
    pub home_phone: String,
    pub email_address: String,
}
