use serde::{Deserialize, Serialize};

/// Status line returned by a successful simulated transaction.
pub const TRANSACTION_OK: &str = "RSAP0001I: Transaction OK";

/// Status line carried by a failed simulated transaction.
pub const TRANSACTION_FAILED: &str = "RSAP0010E: Severe problem detected";

/// Machine-readable code attached to failure log records.
pub const TRANSACTION_ERR_CODE: &str = "RSAP0010E";

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Paypal,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Paypal => "paypal",
        }
    }
}

/// One set of per-request draws. Computed fresh for every checkout,
/// never persisted, never shared across requests.
#[derive(Debug, Clone, Copy)]
pub struct CheckoutOutcome {
    pub payment_method: PaymentMethod,
    pub is_error: bool,
    pub delay_ms: u64,
}
