//! Admission repository trait definition.

use hospicare_types::admission::{Admission, NewAdmission};
use hospicare_types::error::RepositoryError;

/// Repository trait for admission persistence.
///
/// Admissions are immutable once created, so the trait has no update or
/// delete operations.
pub trait AdmissionRepository: Send + Sync {
    /// Insert a new admission. Returns the affected-row count.
    ///
    /// The patient reference is not checked here; a dangling id surfaces
    /// as a store constraint error.
    fn insert(
        &self,
        admission: &NewAdmission,
    ) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;

    /// List every admission for the given patient.
    fn list_for_patient(
        &self,
        patient_id: i64,
    ) -> impl std::future::Future<Output = Result<Vec<Admission>, RepositoryError>> + Send;
}
