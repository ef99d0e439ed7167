//! SQLite treatment repository implementation.

use sqlx::Row;

use hospicare_core::repository::treatment::TreatmentRepository;
use hospicare_types::error::RepositoryError;
use hospicare_types::treatment::TreatmentRecord;

use super::map_db_err;
use super::pool::DatabasePool;

/// SQLite-backed implementation of `TreatmentRepository`.
pub struct SqliteTreatmentRepository {
    pool: DatabasePool,
}

impl SqliteTreatmentRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

impl TreatmentRepository for SqliteTreatmentRepository {
    async fn history_for_patient(
        &self,
        patient_id: i64,
    ) -> Result<Vec<TreatmentRecord>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT treatmentID, treatmentDescription, treatmentStatus
             FROM Treatments WHERE patientID = ?",
        )
        .bind(patient_id)
        .fetch_all(&self.pool.reader)
        .await
        .map_err(map_db_err)?;

        rows.iter()
            .map(|row| {
                Ok(TreatmentRecord {
                    id: row
                        .try_get("treatmentID")
                        .map_err(|e| RepositoryError::Query(e.to_string()))?,
                    description: row
                        .try_get("treatmentDescription")
                        .map_err(|e| RepositoryError::Query(e.to_string()))?,
                    status: row
                        .try_get("treatmentStatus")
                        .map_err(|e| RepositoryError::Query(e.to_string()))?,
                })
            })
            .collect()
    }

    async fn update_status(&self, id: i64, status: &str) -> Result<u64, RepositoryError> {
        let result = sqlx::query("UPDATE Treatments SET treatmentStatus = ? WHERE treatmentID = ?")
            .bind(status)
            .bind(id)
            .execute(&self.pool.writer)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM Treatments WHERE treatmentID = ?")
            .bind(id)
            .execute(&self.pool.writer)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::pool::DatabasePool;

    async fn test_pool() -> DatabasePool {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());
        std::mem::forget(dir);
        DatabasePool::new(&url).await.unwrap()
    }

    /// Insert a patient, a health professional, and one treatment; returns
    /// (patient_id, treatment_id).
    async fn seed(pool: &DatabasePool, status: &str) -> (i64, i64) {
        let patient_id = sqlx::query(
            "INSERT INTO Patients (patientFirstName, patientLastName, patientHomePhone, patientEmailAddress)
             VALUES ('Ana', 'Lee', '555-1234', 'ana@example.com')",
        )
        .execute(&pool.writer)
        .await
        .unwrap()
        .last_insert_rowid();

        let staff_id = sqlx::query(
            "INSERT INTO HealthProfessionals (staffFirstName, staffLastName) VALUES ('Sam', 'Reyes')",
        )
        .execute(&pool.writer)
        .await
        .unwrap()
        .last_insert_rowid();

        let treatment_id = sqlx::query(
            "INSERT INTO Treatments (patientID, staffID, treatmentDescription, treatmentStatus)
             VALUES (?, ?, 'Pain management review', ?)",
        )
        .bind(patient_id)
        .bind(staff_id)
        .bind(status)
        .execute(&pool.writer)
        .await
        .unwrap()
        .last_insert_rowid();

        (patient_id, treatment_id)
    }

    #[tokio::test]
    async fn test_history_projection() {
        let pool = test_pool().await;
        let repo = SqliteTreatmentRepository::new(pool.clone());
        let (patient_id, treatment_id) = seed(&pool, "scheduled").await;

        let history = repo.history_for_patient(patient_id).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].id, treatment_id);
        assert_eq!(history[0].description, "Pain management review");
        assert_eq!(history[0].status, "scheduled");
    }

    #[tokio::test]
    async fn test_history_empty_for_unknown_patient() {
        let pool = test_pool().await;
        let repo = SqliteTreatmentRepository::new(pool);
        assert!(repo.history_for_patient(999).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_status_round_trip() {
        let pool = test_pool().await;
        let repo = SqliteTreatmentRepository::new(pool.clone());
        let (patient_id, treatment_id) = seed(&pool, "scheduled").await;

        assert_eq!(repo.update_status(treatment_id, "completed").await.unwrap(), 1);

        let history = repo.history_for_patient(patient_id).await.unwrap();
        assert_eq!(history[0].status, "completed");
    }

    #[tokio::test]
    async fn test_update_nonexistent_is_zero_rows() {
        let pool = test_pool().await;
        let repo = SqliteTreatmentRepository::new(pool);
        assert_eq!(repo.update_status(999, "completed").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_reports_row_count() {
        let pool = test_pool().await;
        let repo = SqliteTreatmentRepository::new(pool.clone());
        let (_, treatment_id) = seed(&pool, "scheduled").await;

        assert_eq!(repo.delete(treatment_id).await.unwrap(), 1);
        assert_eq!(repo.delete(treatment_id).await.unwrap(), 0);
    }
}
