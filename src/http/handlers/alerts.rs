use crate::AppState;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AlertsQuery {
    pub since: Option<chrono::DateTime<chrono::Utc>>,
}

pub async fn get_alerts(
    State(state): State<AppState>,
    Query(query): Query<AlertsQuery>,
) -> impl IntoResponse {
    let since = query
        .since
        .unwrap_or_else(|| chrono::Utc::now() - chrono::Duration::hours(1));
    let alerts = state.classifier.transitions_since(since);
    (
        axum::http::StatusCode::OK,
        Json(serde_json::json!({
            "alerts": alerts,
            "count": alerts.len(),
            "since": since,
            "timestamp": chrono::Utc::now(),
        })),
    )
        .into_response()
}
