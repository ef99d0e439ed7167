//! Patient endpoint handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;

use hospicare_types::patient::{CreatePatientRequest, Patient};

use crate::http::error::AppError;
use crate::http::extractors::json::Json;
use crate::http::response::{AffectedRows, MessageBody};
use crate::state::AppState;

/// GET /patients - Every patient row.
pub async fn list_patients(
    State(state): State<AppState>,
) -> Result<Json<Vec<Patient>>, AppError> {
    let patients = state.patients.list().await?;
    Ok(Json(patients))
}

/// POST /patients - Validate and insert a patient.
pub async fn create_patient(
    State(state): State<AppState>,
    Json(body): Json<CreatePatientRequest>,
) -> Result<(StatusCode, Json<MessageBody>), AppError> {
    state.patients.create(body).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageBody {
            message: "Patient added successfully",
        }),
    ))
}

/// GET /healthprofessionals/{staff_id}/patients - Distinct patients
/// treated by a health professional; 404 when there are none.
pub async fn list_patients_for_professional(
    State(state): State<AppState>,
    Path(staff_id): Path<i64>,
) -> Result<Json<Vec<Patient>>, AppError> {
    let patients = state.patients.for_professional(staff_id).await?;
    Ok(Json(patients))
}

/// DELETE /patients/{patient_id} - Delete a patient row. An unmatched id
/// answers 200 with a count of 0.
pub async fn delete_patient(
    State(state): State<AppState>,
    Path(patient_id): Path<i64>,
) -> Result<Json<AffectedRows>, AppError> {
    let rows_affected = state.patients.delete(patient_id).await?;
    Ok(Json(AffectedRows {
        message: "Patient record deleted successfully",
        rows_affected,
    }))
}
