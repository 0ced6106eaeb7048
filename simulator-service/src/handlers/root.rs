//! Root endpoint, in its two deployed configurations.

use std::time::Duration;

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::AppState;
use crate::dtos::TransactionResponse;

/// Probe configuration: simulate a transaction with a delay of up to
/// 400ms, then report it.
pub async fn probe_transaction(State(state): State<AppState>) -> impl IntoResponse {
    let delay_ms = state.sampler.sample_probe_delay();
    tokio::time::sleep(Duration::from_millis(delay_ms)).await;

    Json(TransactionResponse {
        status: "ok".to_string(),
        transaction_time: format!("{}ms", delay_ms),
    })
}

/// Redirect configuration: send callers to the checkout endpoint.
pub async fn redirect_to_checkout() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, "/checkout")])
}
