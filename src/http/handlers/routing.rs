use crate::domain::processor::{Country, PaymentMethod};
use crate::AppState;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RoutingRequest {
    pub payment_method: PaymentMethod,
    pub country: Country,
    #[serde(default)]
    pub amount_minor: i64,
}

pub async fn recommend(
    State(state): State<AppState>,
    Json(req): Json<RoutingRequest>,
) -> impl IntoResponse {
    let recommendation = state
        .engine
        .recommend(req.payment_method, req.country, req.amount_minor);
    (axum::http::StatusCode::OK, Json(recommendation)).into_response()
}

#[derive(Debug, Deserialize)]
pub struct RoutingQuery {
    pub payment_method: PaymentMethod,
    pub country: Country,
}

pub async fn recommend_query(
    State(state): State<AppState>,
    Query(query): Query<RoutingQuery>,
) -> impl IntoResponse {
    let recommendation = state
        .engine
        .recommend(query.payment_method, query.country, 0);
    (axum::http::StatusCode::OK, Json(recommendation)).into_response()
}
