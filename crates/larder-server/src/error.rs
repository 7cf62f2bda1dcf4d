use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use larder_core::error::LarderError;
use serde_json::json;

/// Store error carried to the HTTP boundary.
///
/// The status code is decided by the error kind, never by its rendered
/// message; the body is always `{"error": "<message>"}`.
#[derive(Debug)]
pub struct ApiError(pub LarderError);

impl ApiError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self(LarderError::InvalidInput(msg.into()))
    }

    fn status(&self) -> StatusCode {
        match self.0 {
            LarderError::NotFound(_) => StatusCode::NOT_FOUND,
            LarderError::DuplicateId(_) => StatusCode::CONFLICT,
            LarderError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            LarderError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<LarderError> for ApiError {
    fn from(err: LarderError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
