//! Treatment repository trait definition.

use hospicare_types::error::RepositoryError;
use hospicare_types::treatment::TreatmentRecord;

/// Repository trait for treatment persistence.
///
/// Treatments are created out of band; this layer only reads, updates
/// status, and deletes.
pub trait TreatmentRepository: Send + Sync {
    /// The treatment history for a patient: id, description, and status
    /// per row. An empty history is an ordinary result.
    fn history_for_patient(
        &self,
        patient_id: i64,
    ) -> impl std::future::Future<Output = Result<Vec<TreatmentRecord>, RepositoryError>> + Send;

    /// Set the free-text status of a treatment. Returns the affected-row
    /// count (0 if no row matched).
    fn update_status(
        &self,
        id: i64,
        status: &str,
    ) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;

    /// Delete a treatment by id. Returns the affected-row count.
    fn delete(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;
}
