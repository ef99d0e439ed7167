//! Admission endpoint handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;

use hospicare_types::admission::{Admission, CreateAdmissionRequest};

use crate::http::error::AppError;
use crate::http::extractors::json::Json;
use crate::http::response::AffectedRows;
use crate::state::AppState;

/// POST /patientadmissions - Validate and insert an admission.
pub async fn create_admission(
    State(state): State<AppState>,
    Json(body): Json<CreateAdmissionRequest>,
) -> Result<(StatusCode, Json<AffectedRows>), AppError> {
    let rows_affected = state.admissions.create(body).await?;
    Ok((
        StatusCode::CREATED,
        Json(AffectedRows {
            message: "Admission added successfully",
            rows_affected,
        }),
    ))
}

/// GET /patientadmissions/{patient_id} - Admissions for a patient; 404
/// when there are none.
pub async fn list_patient_admissions(
    State(state): State<AppState>,
    Path(patient_id): Path<i64>,
) -> Result<Json<Vec<Admission>>, AppError> {
    let admissions = state.admissions.for_patient(patient_id).await?;
    Ok(Json(admissions))
}
