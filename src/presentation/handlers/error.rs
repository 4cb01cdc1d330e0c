use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::ComplaintError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

impl IntoResponse for ComplaintError {
    fn into_response(self) -> Response {
        let status = match &self {
            ComplaintError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ComplaintError::NotFound(_) => StatusCode::NOT_FOUND,
            ComplaintError::InvalidTransition { .. } => StatusCode::CONFLICT,
            ComplaintError::Repository(e) => {
                tracing::error!(error = %e, "Complaint repository failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        error_response(status, self.to_string())
    }
}
