use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

pub async fn get_all_health(State(state): State<AppState>) -> impl IntoResponse {
    let processors = state.classifier.all_health();
    (
        axum::http::StatusCode::OK,
        Json(serde_json::json!({
            "processors": processors,
            "count": processors.len(),
            "timestamp": chrono::Utc::now(),
        })),
    )
        .into_response()
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<usize>,
}

pub async fn get_processor_health(
    State(state): State<AppState>,
    Path(processor_id): Path<String>,
    Query(query): Query<HistoryQuery>,
) -> impl IntoResponse {
    let health = state.classifier.health(&processor_id);
    let recent = state
        .classifier
        .recent_outcomes(&processor_id, query.limit.unwrap_or(20));
    (
        axum::http::StatusCode::OK,
        Json(serde_json::json!({
            "health": health,
            "recent_transactions": recent,
            "transaction_count": recent.len(),
        })),
    )
        .into_response()
}

pub async fn liveness() -> impl IntoResponse {
    (axum::http::StatusCode::OK, "ok")
}
