//! API error types with structured JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::article::ArticleError;
use crate::ledger::LedgerError;

/// Structured error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// API-level errors with HTTP status mapping.
///
/// Note what is NOT here: oracle failures. The pipeline absorbs those into
/// the heuristic fallback, so they can never surface as a request error.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),
    #[error("Article fetch error: {0}")]
    Article(#[from] ArticleError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::BadRequest(detail) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", detail.clone())
            }
            ApiError::Ledger(e) => {
                tracing::error!(error = %e, "ledger collaborator error");
                (
                    StatusCode::BAD_GATEWAY,
                    "LEDGER_UNAVAILABLE",
                    e.to_string(),
                )
            }
            ApiError::Article(e) => {
                tracing::error!(error = %e, "article extraction error");
                (StatusCode::BAD_GATEWAY, "FETCH_FAILED", e.to_string())
            }
        };

        let body = ErrorBody {
            error: ErrorDetail { code, message },
        };

        (status, Json(body)).into_response()
    }
}
