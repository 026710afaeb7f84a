//! Maps [`Error`] onto HTTP responses.

use super::dto::ErrorResponse;
use crate::errors::Error;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

impl Error {
    /// HTTP status and stable code for this error.
    #[must_use]
    pub const fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Validation { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            Self::MalformedBody { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "MALFORMED_BODY"),
            Self::ReceiptNotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::Config { .. } | Self::Io(_) | Self::EnvVar(_) | Self::Address(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody {
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
            violations: match self {
                Self::Validation { violations } => Some(violations),
                _ => None,
            },
        };

        (status, Json(body)).into_response()
    }
}
