pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

use axum::middleware::from_fn;
use axum::{Router, routing::get};
use service_core::middleware::{metrics::metrics_middleware, tracing::request_id_middleware};
use tower_http::trace::TraceLayer;

use crate::config::RootBehavior;

pub use startup::{AppState, Application};

pub fn build_router(state: AppState) -> Router {
    let root = match state.config.root_behavior {
        RootBehavior::Redirect => get(handlers::root::redirect_to_checkout),
        RootBehavior::Probe => get(handlers::root::probe_transaction),
    };

    Router::new()
        .route("/", root)
        .route("/healthz", get(handlers::health::probe_health))
        .route("/bad-health", get(handlers::health::degrade_health))
        .route("/checkout", get(handlers::checkout::checkout))
        .route("/metrics", get(handlers::metrics::metrics))
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}
