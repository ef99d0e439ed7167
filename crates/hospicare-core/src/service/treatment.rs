//! Treatment service. Treatments are created out of band; this service
//! reads history, updates status, and deletes.

use hospicare_types::error::{RepositoryError, TreatmentError};
use hospicare_types::treatment::{TreatmentRecord, UpdateTreatmentStatusRequest};

use crate::repository::treatment::TreatmentRepository;

/// Service for the treatment endpoints.
pub struct TreatmentService<T: TreatmentRepository> {
    repo: T,
}

impl<T: TreatmentRepository> TreatmentService<T> {
    pub fn new(repo: T) -> Self {
        Self { repo }
    }

    /// Treatment history for a patient. Unlike admissions, an empty
    /// history is an ordinary 200 result.
    pub async fn history(&self, patient_id: i64) -> Result<Vec<TreatmentRecord>, TreatmentError> {
        self.repo
            .history_for_patient(patient_id)
            .await
            .map_err(map_store_err)
    }

    /// Update a treatment's free-text status, returning the affected-row
    /// count. Updating a nonexistent id succeeds with a count of 0.
    pub async fn update_status(
        &self,
        id: i64,
        request: UpdateTreatmentStatusRequest,
    ) -> Result<u64, TreatmentError> {
        let status = match request.treatment_status {
            Some(s) if !s.is_empty() => s,
            _ => return Err(TreatmentError::MissingStatus),
        };

        self.repo
            .update_status(id, &status)
            .await
            .map_err(map_store_err)
    }

    /// Delete a treatment row, returning the affected-row count.
    pub async fn delete(&self, id: i64) -> Result<u64, TreatmentError> {
        self.repo.delete(id).await.map_err(map_store_err)
    }
}

fn map_store_err(err: RepositoryError) -> TreatmentError {
    match err {
        RepositoryError::Constraint(msg) => TreatmentError::Constraint(msg),
        other => TreatmentError::Storage(other.to_string()),
    }
}
