//! Patient service: required-field validation plus one store call per
//! operation.

use hospicare_types::error::{PatientError, RepositoryError};
use hospicare_types::patient::{CreatePatientRequest, NewPatient, Patient};

use crate::repository::patient::PatientRepository;

/// Validate a patient-creation request.
///
/// Checks the four required fields in a fixed order and reports the FIRST
/// missing or empty one by its wire name. An empty string counts as
/// missing.
pub fn validate_new_patient(request: CreatePatientRequest) -> Result<NewPatient, PatientError> {
    let first_name = required("patientFirstName", request.first_name)?;
    let last_name = required("patientLastName", request.last_name)?;
    let home_phone = required("patientHomePhone", request.home_phone)?;
    let email_address = required("patientEmailAddress", request.email_address)?;

    Ok(NewPatient {
        first_name,
        last_name,
        home_phone,
        email_address,
    })
}

fn required(field: &'static str, value: Option<String>) -> Result<String, PatientError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(PatientError::MissingField(field)),
    }
}

/// Service for the patient endpoints.
pub struct PatientService<P: PatientRepository> {
    repo: P,
}

impl<P: PatientRepository> PatientService<P> {
    pub fn new(repo: P) -> Self {
        Self { repo }
    }

    /// Validate and insert a new patient. No existence or uniqueness check
    /// happens here; integrity is the store's job.
    pub async fn create(&self, request: CreatePatientRequest) -> Result<Patient, PatientError> {
        let patient = validate_new_patient(request)?;
        self.repo.insert(&patient).await.map_err(map_store_err)
    }

    /// Every patient row.
    pub async fn list(&self) -> Result<Vec<Patient>, PatientError> {
        self.repo.list().await.map_err(map_store_err)
    }

    /// Distinct patients treated by the given health professional. An
    /// empty result is an error here so the HTTP layer answers 404.
    pub async fn for_professional(&self, staff_id: i64) -> Result<Vec<Patient>, PatientError> {
        let patients = self
            .repo
            .list_for_staff(staff_id)
            .await
            .map_err(map_store_err)?;

        if patients.is_empty() {
            return Err(PatientError::NoneForProfessional);
        }
        Ok(patients)
    }

    /// Delete a patient row. A count of 0 means nothing matched and is
    /// still a success.
    pub async fn delete(&self, id: i64) -> Result<u64, PatientError> {
        self.repo.delete(id).await.map_err(map_store_err)
    }
}

fn map_store_err(err: RepositoryError) -> PatientError {
    match err {
        RepositoryError::Constraint(msg) => PatientError::Constraint(msg),
        other => PatientError::Storage(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> CreatePatientRequest {
        CreatePatientRequest {
            first_name: Some("Ana".to_string()),
            last_name: Some("Lee".to_string()),
            home_phone: Some("555-1234".to_string()),
            email_address: Some("ana@example.com".to_string()),
        }
    }

    #[test]
    fn test_validate_accepts_full_request() {
        let patient = validate_new_patient(full_request()).unwrap();
        assert_eq!(patient.first_name, "Ana");
        assert_eq!(patient.email_address, "ana@example.com");
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        let err = validate_new_patient(CreatePatientRequest::default()).unwrap_err();
        assert_eq!(err.to_string(), "'patientFirstName' is required");

        let mut req = full_request();
        req.last_name = None;
        req.email_address = None;
        let err = validate_new_patient(req).unwrap_err();
        assert_eq!(err.to_string(), "'patientLastName' is required");
    }

    #[test]
    fn test_validate_empty_string_counts_as_missing() {
        let mut req = full_request();
        req.home_phone = Some(String::new());
        let err = validate_new_patient(req).unwrap_err();
        assert_eq!(err.to_string(), "'patientHomePhone' is required");
    }

    #[test]
    fn test_validate_checks_email_last() {
        let mut req = full_request();
        req.email_address = None;
        let err = validate_new_patient(req).unwrap_err();
        assert_eq!(err.to_string(), "'patientEmailAddress' is required");
    }

    struct StubRepo {
        patients: Vec<Patient>,
    }

    impl PatientRepository for StubRepo {
        async fn insert(&self, patient: &NewPatient) -> Result<Patient, RepositoryError> {
            Ok(Patient {
                id: 1,
                first_name: patient.first_name.clone(),
                last_name: patient.last_name.clone(),
                home_phone: patient.home_phone.clone(),
                email_address: patient.email_address.clone(),
            })
        }

        async fn list(&self) -> Result<Vec<Patient>, RepositoryError> {
            Ok(self.patients.clone())
        }

        async fn list_for_staff(&self, _staff_id: i64) -> Result<Vec<Patient>, RepositoryError> {
            Ok(self.patients.clone())
        }

        async fn delete(&self, _id: i64) -> Result<u64, RepositoryError> {
            Ok(0)
        }
    }

    #[tokio::test]
    async fn test_for_professional_empty_is_not_found() {
        let service = PatientService::new(StubRepo { patients: vec![] });
        let err = service.for_professional(3).await.unwrap_err();
        assert!(matches!(err, PatientError::NoneForProfessional));
    }

    #[tokio::test]
    async fn test_for_professional_returns_rows() {
        let ana = Patient {
            id: 1,
            first_name: "Ana".to_string(),
            last_name: "Lee".to_string(),
            home_phone: "555-1234".to_string(),
            email_address: "ana@example.com".to_string(),
        };
        let service = PatientService::new(StubRepo {
            patients: vec![ana.clone()],
        });
        let patients = service.for_professional(3).await.unwrap();
        assert_eq!(patients, vec![ana]);
    }

    #[tokio::test]
    async fn test_delete_zero_rows_is_success() {
        let service = PatientService::new(StubRepo { patients: vec![] });
        assert_eq!(service.delete(999).await.unwrap(), 0);
    }
}
