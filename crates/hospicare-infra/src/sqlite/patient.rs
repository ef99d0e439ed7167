//! SQLite patient repository implementation.
//!
//! Implements `PatientRepository` from `hospicare-core` using sqlx with
//! split read/write pools.

use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use hospicare_core::repository::patient::PatientRepository;
use hospicare_types::error::RepositoryError;
use hospicare_types::patient::{NewPatient, Patient};

use super::map_db_err;
use super::pool::DatabasePool;

/// SQLite-backed implementation of `PatientRepository`.
pub struct SqlitePatientRepository {
    pool: DatabasePool,
}

impl SqlitePatientRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

fn patient_from_row(row: &SqliteRow) -> Result<Patient, sqlx::Error> {
    Ok(Patient {
        id: row.try_get("patientID")?,
        first_name: row.try_get("patientFirstName")?,
        last_name: row.try_get("patientLastName")?,
        home_phone: row.try_get("patientHomePhone")?,
        email_address: row.try_get("patientEmailAddress")?,
    })
}

fn collect_patients(rows: &[SqliteRow]) -> Result<Vec<Patient>, RepositoryError> {
    rows.iter()
        .map(|row| patient_from_row(row).map_err(|e| RepositoryError::Query(e.to_string())))
        .collect()
}

impl PatientRepository for SqlitePatientRepository {
    async fn insert(&self, patient: &NewPatient) -> Result<Patient, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO Patients (patientFirstName, patientLastName, patientHomePhone, patientEmailAddress)
             VALUES (?, ?, ?, ?)",
        )
        .bind(&patient.first_name)
        .bind(&patient.last_name)
        .bind(&patient.home_phone)
        .bind(&patient.email_address)
        .execute(&self.pool.writer)
        .await
        .map_err(map_db_err)?;

        Ok(Patient {
            id: result.last_insert_rowid(),
            first_name: patient.first_name.clone(),
            last_name: patient.last_name.clone(),
            home_phone: patient.home_phone.clone(),
            email_address: patient.email_address.clone(),
        })
    }

    async fn list(&self) -> Result<Vec<Patient>, RepositoryError> {
        let rows = sqlx::query("SELECT * FROM Patients")
            .fetch_all(&self.pool.reader)
            .await
            .map_err(map_db_err)?;

        collect_patients(&rows)
    }

    async fn list_for_staff(&self, staff_id: i64) -> Result<Vec<Patient>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT DISTINCT Patients.patientID, Patients.patientFirstName, Patients.patientLastName,
                             Patients.patientHomePhone, Patients.patientEmailAddress
             FROM Treatments
             JOIN Patients ON Treatments.patientID = Patients.patientID
             WHERE Treatments.staffID = ?",
        )
        .bind(staff_id)
        .fetch_all(&self.pool.reader)
        .await
        .map_err(map_db_err)?;

        collect_patients(&rows)
    }

    async fn delete(&self, id: i64) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM Patients WHERE patientID = ?")
            .bind(id)
            .execute(&self.pool.writer)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected())
    }
}
