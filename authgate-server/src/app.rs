use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the primary axum router with the provided shared application state.
pub fn build_router(state: Arc<AppState>) -> Router {
    let router = Router::new();
    // the login route first, then probes and the scrape endpoint
    let router = router.route("/login", post(crate::handlers::auth::login::login));
    let router = router
        .route("/healthz", get(healthz_handler))
        .route("/ready", get(ready_handler))
        .route("/metrics", get(authgate_metrics::metrics_handler));
    router
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

async fn healthz_handler() -> impl IntoResponse {
    // Liveness: always 200 OK while the process is alive.
    (StatusCode::OK, "ok")
}

async fn ready_handler() -> impl IntoResponse {
    // Readiness: unconditional; this service has no downstream dependencies
    // to probe.
    (StatusCode::OK, "ready")
}
