use crate::domain::processor::ProcessorProfile;
use crate::AppState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

pub async fn list_processors(State(state): State<AppState>) -> impl IntoResponse {
    let processors = state.engine.processors();
    (
        axum::http::StatusCode::OK,
        Json(serde_json::json!({
            "processors": processors,
            "count": processors.len(),
        })),
    )
        .into_response()
}

pub async fn register_processor(
    State(state): State<AppState>,
    Json(profile): Json<ProcessorProfile>,
) -> impl IntoResponse {
    if profile.id.is_empty() {
        return (
            axum::http::StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": "id is required"})),
        )
            .into_response();
    }
    state.engine.register_processor(profile);
    (
        axum::http::StatusCode::OK,
        Json(serde_json::json!({"registered": true})),
    )
        .into_response()
}
