use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

/// Top-level API error shared by all route handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),
    #[error("invalid credentials")]
    InvalidCredentials,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        };

        // Both rejection classes share one public body; the status code alone
        // reveals whether the request was well-formed, which the client
        // already knows. Logs and metrics carry the distinction.
        (status, "invalid credentials").into_response()
    }
}
