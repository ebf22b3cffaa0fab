use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::{
    processor::StripeError,
    response::{ApiResponse, Meta},
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unorthorized Access")]
    Unauthorized,

    #[error("Not Found")]
    NotFound,

    #[error("Bad Request {0}")]
    BadRequest(String),

    #[error("Payment declined: {0}")]
    ProcessorDeclined(String),

    #[error("Payment processor unavailable: {0}")]
    ProcessorUnavailable(String),

    #[error("Database error")]
    DbError(#[from] sqlx::Error),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl From<StripeError> for AppError {
    fn from(err: StripeError) -> Self {
        match err {
            StripeError::Api { message, .. } => AppError::ProcessorDeclined(message),
            StripeError::Http(e) => AppError::ProcessorUnavailable(e.to_string()),
            StripeError::Config(msg) => AppError::Internal(anyhow::anyhow!(msg)),
        }
    }
}

#[derive(Serialize)]
struct ErrorData {
    error: String,
}

/// Legacy 401 body. The message string (misspelling included) is pinned by
/// compatibility tests against the original server.
#[derive(Serialize)]
struct UnauthorizedBody {
    error: bool,
    message: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(self, AppError::Unauthorized) {
            let body = UnauthorizedBody {
                error: true,
                message: "Unorthorized Access",
            };
            return (StatusCode::UNAUTHORIZED, axum::Json(body)).into_response();
        }

        let (status, message) = match &self {
            AppError::Unauthorized => unreachable!(),
            AppError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::ProcessorDeclined(_) => (StatusCode::PAYMENT_REQUIRED, self.to_string()),
            AppError::ProcessorUnavailable(_) => (StatusCode::BAD_GATEWAY, self.to_string()),
            AppError::DbError(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = ApiResponse {
            message,
            data: Some(ErrorData {
                error: self.to_string(),
            }),
            meta: Some(Meta::empty()),
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
