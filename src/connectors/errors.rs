use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;

/// Closed taxonomy for everything that can go wrong at the backend boundary.
/// Transport and service errors are mapped into these variants in the
/// connector; nothing above this layer sees a raw backend error.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// Document, account or file does not exist (404)
    #[error("not found: {0}")]
    NotFound(String),
    /// Missing or invalid session / credentials (401/403)
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    /// Input rejected before or by the backend (400)
    #[error("{0}")]
    Validation(String),
    /// Backend unreachable, timed out or answering 5xx
    #[error("service unavailable: {0}")]
    Unavailable(String),
    /// Backend answered with something we could not parse
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    /// Any other transport-level failure
    #[error("http error: {0}")]
    Http(String),
}

impl ResponseError for BackendError {
    fn error_response(&self) -> HttpResponse {
        let (status, message) = match self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "Resource not found"),
            Self::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "Unauthorized"),
            Self::Validation(_) => (StatusCode::BAD_REQUEST, "Validation failed"),
            Self::Unavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, "Service unavailable"),
            Self::InvalidResponse(_) => (StatusCode::BAD_GATEWAY, "Invalid backend response"),
            Self::Http(_) => (StatusCode::BAD_GATEWAY, "Backend error"),
        };

        HttpResponse::build(status).json(json!({
            "error": message,
            "details": self.to_string(),
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::InvalidResponse(_) => StatusCode::BAD_GATEWAY,
            Self::Http(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Unavailable(format!("Request timeout: {}", err))
        } else if err.is_connect() {
            Self::Unavailable(format!("Connection failed: {}", err))
        } else {
            Self::Http(err.to_string())
        }
    }
}
