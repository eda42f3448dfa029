use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionResult {
    Approved,
    Declined,
    Error,
    Timeout,
    // Catch-all for wire values we do not recognize. Counted in window
    // totals but in no approved/declined/error bucket.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub processor_id: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub result: TransactionResult,
    pub payment_method: crate::domain::processor::PaymentMethod,
    pub country: crate::domain::processor::Country,
    pub amount_minor: i64,
    pub currency: String,
}
