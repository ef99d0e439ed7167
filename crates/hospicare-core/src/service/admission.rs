//! Admission service: required-field and date-format validation plus one
//! store call per operation.

use chrono::NaiveDate;

use hospicare_types::admission::{Admission, CreateAdmissionRequest, NewAdmission};
use hospicare_types::error::{AdmissionError, RepositoryError};

use crate::repository::admission::AdmissionRepository;

/// Validate an admission-creation request.
///
/// Presence is checked first (`patientID`, `dateOfAdmission`,
/// `dateOfDischarge`, in that order), then both dates must parse as
/// `YYYY-MM-DD`. Either date failing produces the combined format
/// message. Discharge before admission is NOT rejected.
pub fn validate_new_admission(
    request: CreateAdmissionRequest,
) -> Result<NewAdmission, AdmissionError> {
    let patient_id = request
        .patient_id
        .ok_or(AdmissionError::MissingField("patientID"))?;
    let admission = required("dateOfAdmission", request.date_of_admission)?;
    let discharge = required("dateOfDischarge", request.date_of_discharge)?;

    Ok(NewAdmission {
        patient_id,
        date_of_admission: parse_date(&admission)?,
        date_of_discharge: parse_date(&discharge)?,
    })
}

fn required(field: &'static str, value: Option<String>) -> Result<String, AdmissionError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AdmissionError::MissingField(field)),
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, AdmissionError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| AdmissionError::InvalidDateFormat)
}

/// Service for the admission endpoints.
pub struct AdmissionService<A: AdmissionRepository> {
    repo: A,
}

impl<A: AdmissionRepository> AdmissionService<A> {
    pub fn new(repo: A) -> Self {
        Self { repo }
    }

    /// Validate and insert a new admission, returning the affected-row
    /// count. A dangling patient reference surfaces as a constraint error
    /// from the store.
    pub async fn create(&self, request: CreateAdmissionRequest) -> Result<u64, AdmissionError> {
        let admission = validate_new_admission(request)?;
        self.repo.insert(&admission).await.map_err(map_store_err)
    }

    /// Every admission for the given patient. An empty result is an error
    /// here so the HTTP layer answers 404.
    pub async fn for_patient(&self, patient_id: i64) -> Result<Vec<Admission>, AdmissionError> {
        let admissions = self
            .repo
            .list_for_patient(patient_id)
            .await
            .map_err(map_store_err)?;

        if admissions.is_empty() {
            return Err(AdmissionError::NotFoundForPatient);
        }
        Ok(admissions)
    }
}

fn map_store_err(err: RepositoryError) -> AdmissionError {
    match err {
        RepositoryError::Constraint(msg) => AdmissionError::Constraint(msg),
        other => AdmissionError::Storage(other.to_string()),
    }
}
