//! Axum router wiring the care endpoints with middleware.
//!
//! Paths mirror the store vocabulary (`/patients`, `/patientadmissions`,
//! `/healthprofessionals/{id}/patients`, `/treatments`). Unknown paths
//! fall through to a uniform 404 envelope.

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(welcome))
        .route(
            "/patients",
            get(handlers::patient::list_patients).post(handlers::patient::create_patient),
        )
        .route(
            "/patients/{patient_id}",
            delete(handlers::patient::delete_patient),
        )
        .route(
            "/patientadmissions",
            post(handlers::admission::create_admission),
        )
        .route(
            "/patientadmissions/{patient_id}",
            get(handlers::admission::list_patient_admissions),
        )
        .route(
            "/healthprofessionals/{staff_id}/patients",
            get(handlers::patient::list_patients_for_professional),
        )
        .route(
            "/treatments/{id}",
            get(handlers::treatment::treatment_history)
                .put(handlers::treatment::update_treatment)
                .delete(handlers::treatment::delete_treatment),
        )
        .route("/health", get(health_check))
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET / - Fixed welcome message.
async fn welcome() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "message": "WELCOME TO HOSPICE PATIENT CARE!",
    }))
}

/// GET /health - Simple liveness endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Uniform 404 envelope for unknown paths.
async fn not_found() -> (StatusCode, axum::Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        axum::Json(serde_json::json!({
            "error": "Not Found",
            "message": "The requested resource does not exist",
        })),
    )
}
