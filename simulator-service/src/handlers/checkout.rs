//! Simulated checkout endpoint.

use std::time::Duration;

use axum::{Json, extract::State};
use service_core::error::AppError;

use crate::AppState;
use crate::dtos::TransactionResponse;
use crate::models::{TRANSACTION_ERR_CODE, TRANSACTION_FAILED, TRANSACTION_OK};
use crate::services::record_checkout;

/// Simulate one checkout: draw an outcome, then either fail immediately
/// or emit the success payload once the drawn delay has elapsed.
pub async fn checkout(
    State(state): State<AppState>,
) -> Result<Json<TransactionResponse>, AppError> {
    let outcome = state.sampler.sample_checkout();

    if outcome.is_error {
        record_checkout(outcome.payment_method.as_str(), "error");
        tracing::error!(
            err_code = TRANSACTION_ERR_CODE,
            transaction_time = outcome.delay_ms,
            payment_method = outcome.payment_method.as_str(),
            "Severe problem detected"
        );
        return Err(AppError::TransactionError(anyhow::anyhow!(
            TRANSACTION_FAILED
        )));
    }

    // Stand-in for backend processing time; suspends this request only.
    tokio::time::sleep(Duration::from_millis(outcome.delay_ms)).await;

    record_checkout(outcome.payment_method.as_str(), "ok");
    tracing::info!(
        transaction_time = outcome.delay_ms,
        payment_method = outcome.payment_method.as_str(),
        "Transaction OK"
    );

    Ok(Json(TransactionResponse {
        status: TRANSACTION_OK.to_string(),
        transaction_time: format!("{}ms", outcome.delay_ms),
    }))
}
