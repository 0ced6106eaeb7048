use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub status: String,
    #[serde(rename = "transactionTime")]
    pub transaction_time: String,
}
