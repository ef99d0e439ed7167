//! Treatment endpoint handlers.

use axum::extract::{Path, State};

use hospicare_types::treatment::{TreatmentRecord, UpdateTreatmentStatusRequest};

use crate::http::error::AppError;
use crate::http::extractors::json::Json;
use crate::http::response::AffectedRows;
use crate::state::AppState;

/// GET /treatments/{patient_id} - Treatment history for a patient.
/// Unlike the admissions read, an empty history is a 200 with an empty
/// array.
pub async fn treatment_history(
    State(state): State<AppState>,
    Path(patient_id): Path<i64>,
) -> Result<Json<Vec<TreatmentRecord>>, AppError> {
    let history = state.treatments.history(patient_id).await?;
    Ok(Json(history))
}

/// PUT /treatments/{treatment_id} - Update a treatment's status. An
/// unmatched id answers 200 with a count of 0.
pub async fn update_treatment(
    State(state): State<AppState>,
    Path(treatment_id): Path<i64>,
    Json(body): Json<UpdateTreatmentStatusRequest>,
) -> Result<Json<AffectedRows>, AppError> {
    let rows_affected = state.treatments.update_status(treatment_id, body).await?;
    Ok(Json(AffectedRows {
        message: "Patient treatment status updated successfully",
        rows_affected,
    }))
}

/// DELETE /treatments/{treatment_id} - Delete a treatment row.
pub async fn delete_treatment(
    State(state): State<AppState>,
    Path(treatment_id): Path<i64>,
) -> Result<Json<AffectedRows>, AppError> {
    let rows_affected = state.treatments.delete(treatment_id).await?;
    Ok(Json(AffectedRows {
        message: "Treatment record deleted successfully",
        rows_affected,
    }))
}
