//! Application error type mapping to HTTP status codes and envelope format.
//!
//! Client input errors and store constraint violations answer 400 with the
//! error message; the two not-found reads answer 404; store failures answer
//! a generic 500 envelope rather than leaking driver text to the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use hospicare_types::error::{AdmissionError, PatientError, TreatmentError};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Patient-related errors.
    Patient(PatientError),
    /// Admission-related errors.
    Admission(AdmissionError),
    /// Treatment-related errors.
    Treatment(TreatmentError),
    /// Malformed request at the framework boundary (bad JSON body).
    BadRequest(String),
}

impl From<PatientError> for AppError {
    fn from(e: PatientError) -> Self {
        AppError::Patient(e)
    }
}

impl From<AdmissionError> for AppError {
    fn from(e: AdmissionError) -> Self {
        AppError::Admission(e)
    }
}

impl From<TreatmentError> for AppError {
    fn from(e: TreatmentError) -> Self {
        AppError::Treatment(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Patient(e) => match e {
                PatientError::MissingField(_) | PatientError::Constraint(_) => {
                    bad_request(e.to_string())
                }
                PatientError::NoneForProfessional => not_found(e.to_string()),
                PatientError::Storage(msg) => internal(msg),
            },
            AppError::Admission(e) => match e {
                AdmissionError::MissingField(_)
                | AdmissionError::InvalidDateFormat
                | AdmissionError::Constraint(_) => bad_request(e.to_string()),
                AdmissionError::NotFoundForPatient => not_found(e.to_string()),
                AdmissionError::Storage(msg) => internal(msg),
            },
            AppError::Treatment(e) => match e {
                TreatmentError::MissingStatus | TreatmentError::Constraint(_) => {
                    bad_request(e.to_string())
                }
                TreatmentError::Storage(msg) => internal(msg),
            },
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Bad Request", "message": msg }),
            ),
        };

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}

fn bad_request(message: String) -> (StatusCode, serde_json::Value) {
    (StatusCode::BAD_REQUEST, json!({ "error": message }))
}

fn not_found(message: String) -> (StatusCode, serde_json::Value) {
    (StatusCode::NOT_FOUND, json!({ "error": message }))
}

fn internal(message: String) -> (StatusCode, serde_json::Value) {
    tracing::error!("store failure: {message}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({
            "error": "Internal Server Error",
            "message": "Something went wrong on the server."
        }),
    )
}
