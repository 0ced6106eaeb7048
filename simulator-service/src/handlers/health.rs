//! Health probe and degrade endpoints.
//!
//! The probe reads the shared flag, the degrade endpoint writes it; no
//! other code path touches it.

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use service_core::error::AppError;

use crate::AppState;

/// Liveness probe: succeeds until the process has been degraded.
pub async fn probe_health(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    if state.health.is_healthy() {
        Ok(Json(json!({ "status": "ok" })))
    } else {
        Err(AppError::Unhealthy)
    }
}

/// Force the process into the unhealthy state. One-way; repeat calls
/// acknowledge the same way.
pub async fn degrade_health(State(state): State<AppState>) -> impl IntoResponse {
    state.health.degrade();
    tracing::warn!("Health flag degraded; all subsequent probes will fail");

    Json(json!({ "status": "App health set to 'false'" }))
}
