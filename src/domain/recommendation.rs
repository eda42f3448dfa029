use crate::domain::health::HealthStatus;
use crate::domain::processor::{Country, PaymentMethod};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessorRank {
    pub processor_id: String,
    pub rank: usize,
    pub status: HealthStatus,
    pub authorization_rate: f64,
    pub recommended: bool,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingRecommendation {
    pub recommendations: Vec<ProcessorRank>,
    pub payment_method: PaymentMethod,
    pub country: Country,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}
