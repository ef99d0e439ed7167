//! Patient repository trait definition.

use hospicare_types::error::RepositoryError;
use hospicare_types::patient::{NewPatient, Patient};

/// Repository trait for patient persistence.
///
/// Implementations live in hospicare-infra (e.g., SqlitePatientRepository).
/// Uses native async fn in traits (Rust 2024 edition, no async_trait macro).
pub trait PatientRepository: Send + Sync {
    /// Insert a new patient. Returns the row with its store-assigned id.
    fn insert(
        &self,
        patient: &NewPatient,
    ) -> impl std::future::Future<Output = Result<Patient, RepositoryError>> + Send;

    /// List every patient row.
    fn list(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Patient>, RepositoryError>> + Send;

    /// List the distinct patients treated by the given health professional,
    /// joined through the treatments table.
    fn list_for_staff(
        &self,
        staff_id: i64,
    ) -> impl std::future::Future<Output = Result<Vec<Patient>, RepositoryError>> + Send;

    /// Delete a patient by id. Returns the affected-row count (0 if no row
    /// matched).
    fn delete(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;
}
