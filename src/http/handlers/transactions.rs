use crate::domain::processor::{Country, PaymentMethod};
use crate::domain::transaction::{Transaction, TransactionResult};
use crate::AppState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct RecordTransactionRequest {
    pub processor_id: String,
    pub result: TransactionResult,
    pub payment_method: PaymentMethod,
    pub country: Country,
    #[serde(default)]
    pub amount_minor: i64,
    #[serde(default)]
    pub currency: String,
    pub timestamp: Option<chrono::DateTime<chrono::Utc>>,
}

pub async fn record_transaction(
    State(state): State<AppState>,
    Json(req): Json<RecordTransactionRequest>,
) -> impl IntoResponse {
    if req.processor_id.is_empty() {
        return (
            axum::http::StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": "processor_id is required"})),
        )
            .into_response();
    }

    let tx = Transaction {
        id: Uuid::new_v4(),
        processor_id: req.processor_id,
        timestamp: req.timestamp.unwrap_or_else(chrono::Utc::now),
        result: req.result,
        payment_method: req.payment_method,
        country: req.country,
        amount_minor: req.amount_minor,
        currency: req.currency,
    };

    let health = state.classifier.record(tx);
    if let Some(from) = health.previous_status {
        tracing::warn!(
            processor_id = %health.processor_id,
            from = ?from,
            to = ?health.status,
            authorization_rate = health.authorization_rate,
            "processor health transition"
        );
    }
    (axum::http::StatusCode::OK, Json(health)).into_response()
}
