//! Process-wide metrics registry for the gateway service.
//!
//! All metrics live in a single dedicated `Registry` owned by this crate.
//! Callers only get increment helpers and the exposition renderer; the
//! stored values are never handed out mutably.

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

/// Registry owning every metric this service exposes.
static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

/// Total login-route invocations, whatever the outcome. Counter names keep
/// the wire format the original service exposed to its scrapers.
pub static LOGIN_REQUESTS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    let c = IntCounter::with_opts(Opts::new(
        "auth_login_requests_total",
        "Total login requests",
    ))
    .expect("auth_login_requests_total opts");
    REGISTRY
        .register(Box::new(c.clone()))
        .expect("register auth_login_requests_total");
    c
});

/// Login outcomes broken down by class, so scrapes can tell malformed
/// requests apart from credential rejections.
pub static LOGIN_OUTCOMES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    let c = IntCounterVec::new(
        Opts::new("auth_login_outcomes_total", "Login outcomes by class"),
        &["outcome"],
    )
    .expect("auth_login_outcomes_total opts");
    REGISTRY
        .register(Box::new(c.clone()))
        .expect("register auth_login_outcomes_total");
    c
});

pub const OUTCOME_ACCEPTED: &str = "accepted";
pub const OUTCOME_REJECTED: &str = "rejected";
pub const OUTCOME_MALFORMED: &str = "malformed";

/// Force registration of every metric so a scrape that arrives before the
/// first login still sees zero-valued counters. Call once at startup.
pub fn init() {
    Lazy::force(&LOGIN_REQUESTS_TOTAL);
    Lazy::force(&LOGIN_OUTCOMES_TOTAL);
}

/// Count one login-route invocation. Called before decoding, so malformed
/// requests are counted too.
#[inline]
pub fn record_login_request() {
    LOGIN_REQUESTS_TOTAL.inc();
}

/// Count one login outcome under its class label.
#[inline]
pub fn record_login_outcome(outcome: &str) {
    LOGIN_OUTCOMES_TOTAL.with_label_values(&[outcome]).inc();
}

/// Render the registry in the Prometheus text exposition format.
pub fn render() -> String {
    let metric_families = REGISTRY.gather();
    let mut buf = Vec::new();
    let encoder = TextEncoder::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buf) {
        tracing::error!(%e, "failed to encode metrics");
        return String::new();
    }
    String::from_utf8(buf).unwrap_or_default()
}

/// GET /metrics
pub async fn metrics_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // The registry is process-global, so every assertion here is a delta
    // from a captured starting value rather than an absolute count.

    #[test]
    fn login_counter_is_monotonic_and_rendered() {
        init();
        let before = LOGIN_REQUESTS_TOTAL.get();
        record_login_request();
        record_login_request();
        // sibling tests may increment concurrently, so bound instead of pin
        let low = LOGIN_REQUESTS_TOTAL.get();
        assert!(low >= before + 2);

        let text = render();
        let high = LOGIN_REQUESTS_TOTAL.get();
        let line = text
            .lines()
            .find(|l| l.starts_with("auth_login_requests_total"))
            .expect("counter missing from exposition");
        let value: u64 = line
            .rsplit(' ')
            .next()
            .unwrap()
            .parse()
            .expect("counter sample is an integer");
        assert!(value >= low && value <= high);
    }

    #[test]
    fn concurrent_increments_are_never_lost() {
        init();
        let before = LOGIN_REQUESTS_TOTAL.get();
        let threads: Vec<_> = (0..8)
            .map(|_| {
                std::thread::spawn(|| {
                    for _ in 0..100 {
                        record_login_request();
                    }
                })
            })
            .collect();
        for t in threads {
            t.join().unwrap();
        }
        assert!(LOGIN_REQUESTS_TOTAL.get() >= before + 800);
    }

    #[tokio::test]
    async fn handler_serves_the_exposition() {
        init();
        let resp = metrics_handler().await.into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let ct = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .expect("content type set");
        assert!(ct.to_str().unwrap().starts_with("text/plain"));
    }

    #[test]
    fn outcome_labels_are_tracked_separately() {
        init();
        let before = LOGIN_OUTCOMES_TOTAL
            .with_label_values(&[OUTCOME_MALFORMED])
            .get();
        record_login_outcome(OUTCOME_MALFORMED);
        assert_eq!(
            LOGIN_OUTCOMES_TOTAL
                .with_label_values(&[OUTCOME_MALFORMED])
                .get(),
            before + 1
        );

        let text = render();
        assert!(text.contains("auth_login_outcomes_total{outcome=\"malformed\"}"));
    }
}
