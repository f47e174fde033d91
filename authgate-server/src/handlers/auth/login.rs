use std::sync::Arc;

use axum::extract::Extension;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bytes::Bytes;

use authgate_credentials::Verdict;
use authgate_metrics::{OUTCOME_ACCEPTED, OUTCOME_MALFORMED, OUTCOME_REJECTED};

use super::dto::LoginRequest;
use crate::{error::ApiError, state::AppState};

/// POST /login
/// Decodes `{ "username", "password" }` and answers with a plaintext outcome.
/// Every invocation counts toward the attempt counter, whatever the outcome.
pub async fn login(
    Extension(state): Extension<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    authgate_metrics::record_login_request();

    let req = LoginRequest::from_bytes(&body).map_err(|e| {
        authgate_metrics::record_login_outcome(OUTCOME_MALFORMED);
        tracing::warn!(%e, "login request body failed to decode");
        ApiError::MalformedBody(e)
    })?;

    match state.verifier.verify(&req.username, &req.password) {
        Verdict::Accepted => {
            authgate_metrics::record_login_outcome(OUTCOME_ACCEPTED);
            tracing::info!(username = %req.username, "login accepted");
            Ok((StatusCode::OK, "login successful").into_response())
        }
        Verdict::Rejected => {
            authgate_metrics::record_login_outcome(OUTCOME_REJECTED);
            tracing::debug!("login rejected");
            Err(ApiError::InvalidCredentials)
        }
    }
}
