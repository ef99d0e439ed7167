//! SQLite admission repository implementation.

use chrono::NaiveDate;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use hospicare_core::repository::admission::AdmissionRepository;
use hospicare_types::admission::{Admission, NewAdmission};
use hospicare_types::error::RepositoryError;

use super::map_db_err;
use super::pool::DatabasePool;

/// SQLite-backed implementation of `AdmissionRepository`.
///
/// Dates are kept as `YYYY-MM-DD` text in the store, the same form they
/// travel in on the wire.
pub struct SqliteAdmissionRepository {
    pool: DatabasePool,
}

impl SqliteAdmissionRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, RepositoryError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| RepositoryError::Query(format!("invalid date: {e}")))
}

fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn admission_from_row(row: &SqliteRow) -> Result<Admission, RepositoryError> {
    let date_of_admission: String = row
        .try_get("dateOfAdmission")
        .map_err(|e| RepositoryError::Query(e.to_string()))?;
    let date_of_discharge: String = row
        .try_get("dateOfDischarge")
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

    Ok(Admission {
        id: row
            .try_get("admissionID")
            .map_err(|e| RepositoryError::Query(e.to_string()))?,
        patient_id: row
            .try_get("patientID")
            .map_err(|e| RepositoryError::Query(e.to_string()))?,
        date_of_admission: parse_date(&date_of_admission)?,
        date_of_discharge: parse_date(&date_of_discharge)?,
    })
}

impl AdmissionRepository for SqliteAdmissionRepository {
    async fn insert(&self, admission: &NewAdmission) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO PatientAdmissions (patientID, dateOfAdmission, dateOfDischarge)
             VALUES (?, ?, ?)",
        )
        .bind(admission.patient_id)
        .bind(format_date(&admission.date_of_admission))
        .bind(format_date(&admission.date_of_discharge))
        .execute(&self.pool.writer)
        .await
        .map_err(map_db_err)?;

        Ok(result.rows_affected())
    }

    async fn list_for_patient(&self, patient_id: i64) -> Result<Vec<Admission>, RepositoryError> {
        let rows = sqlx::query("SELECT * FROM PatientAdmissions WHERE patientID = ?")
            .bind(patient_id)
            .fetch_all(&self.pool.reader)
            .await
            .map_err(map_db_err)?;

        rows.iter().map(admission_from_row).collect()
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

    async fn seed_patient(pool: &DatabasePool) -> i64 {
        sqlx::query(
            "INSERT INTO Patients (patientFirstName, patientLastName, patientHomePhone, patientEmailAddress)
             VALUES (?, ?, ?, ?)",
        )
        .bind("Ana")
        .bind("Lee")
        .bind("555-1234")
        .bind("ana@example.com")
        .execute(&pool.writer)
        .await
        .unwrap()
        .last_insert_rowid()
    }

    fn make_admission(patient_id: i64, from: &str, to: &str) -> NewAdmission {
        NewAdmission {
            patient_id,
            date_of_admission: NaiveDate::parse_from_str(from, "%Y-%m-%d").unwrap(),
            date_of_discharge: NaiveDate::parse_from_str(to, "%Y-%m-%d").unwrap(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_list_round_trip() {
        let pool = test_pool().await;
        let repo = SqliteAdmissionRepository::new(pool.clone());
        let patient_id = seed_patient(&pool).await;

        let count = repo
            .insert(&make_admission(patient_id, "2024-02-10", "2024-02-14"))
            .await
            .unwrap();
        assert_eq!(count, 1);

        let admissions = repo.list_for_patient(patient_id).await.unwrap();
        assert_eq!(admissions.len(), 1);
        assert_eq!(admissions[0].patient_id, patient_id);
        assert_eq!(format_date(&admissions[0].date_of_admission), "2024-02-10");
        assert_eq!(format_date(&admissions[0].date_of_discharge), "2024-02-14");
    }

    #[tokio::test]
    async fn test_list_for_patient_without_admissions() {
        let pool = test_pool().await;
        let repo = SqliteAdmissionRepository::new(pool.clone());
        let patient_id = seed_patient(&pool).await;

        assert!(repo.list_for_patient(patient_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_insert_dangling_patient_is_constraint_error() {
        let pool = test_pool().await;
        let repo = SqliteAdmissionRepository::new(pool);

        let err = repo
            .insert(&make_admission(999, "2024-02-10", "2024-02-14"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Constraint(_)));
    }
}
