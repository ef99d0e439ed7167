//! JSON extractor producing the service's uniform Bad Request envelope.
//!
//! axum's own `Json` rejection replies in plain text; this wrapper turns a
//! malformed or non-JSON body into the `{error, message}` format the rest
//! of the API uses. It also implements `IntoResponse` so handlers can use
//! one `Json` type in both directions.

use axum::extract::{FromRequest, Request};
use axum::response::{IntoResponse, Response};

use crate::http::error::AppError;

pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    S: Send + Sync,
    T: serde::de::DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
        }
    }
}

impl<T: serde::Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
