use thiserror::Error;

/// Errors related to patient operations. Display strings are the exact
/// messages surfaced on the wire.
#[derive(Debug, Error)]
pub enum PatientError {
    #[error("'{0}' is required")]
    MissingField(&'static str),

    #[error("No patients found for this health professional")]
    NoneForProfessional,

    #[error("constraint violation: {0}")]
    Constraint(String),

    #[error("storage error: {0}")]
    Storage(String),
}

/// Errors related to admission operations.
#[derive(Debug, Error)]
pub enum AdmissionError {
    #[error("'{0}' is required")]
    MissingField(&'static str),

    #[error("'dateOfAdmission' and 'dateOfDischarge' must be in 'YYYY-MM-DD' format")]
    InvalidDateFormat,

    #[error("Admission not found for the given patient")]
    NotFoundForPatient,

    #[error("constraint violation: {0}")]
    Constraint(String),

    #[error("storage error: {0}")]
    Storage(String),
}

/// Errors related to treatment operations.
#[derive(Debug, Error)]
pub enum TreatmentError {
    #[error("'treatmentStatus' is required")]
    MissingStatus,

    #[error("constraint violation: {0}")]
    Constraint(String),

    #[error("storage error: {0}")]
    Storage(String),
}

/// Errors from repository operations (used by trait definitions in
/// hospicare-core). Constraint violations are split out from other query
/// failures so the HTTP layer can map them to distinct status codes.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("{0}")]
    Constraint(String),
}
