use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Down,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessorHealth {
    pub processor_id: String,
    pub status: HealthStatus,
    pub authorization_rate: f64,
    pub total_transactions: u64,
    pub success_count: u64,
    pub failure_count: u64,
    pub error_count: u64,
    pub last_updated: chrono::DateTime<chrono::Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_changed_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_status: Option<HealthStatus>,
}

impl ProcessorHealth {
    // Optimistic default for processors with no recorded outcomes.
    pub fn unknown(processor_id: &str) -> Self {
        Self {
            processor_id: processor_id.to_string(),
            status: HealthStatus::Healthy,
            authorization_rate: 1.0,
            total_transactions: 0,
            success_count: 0,
            failure_count: 0,
            error_count: 0,
            last_updated: chrono::Utc::now(),
            status_changed_at: None,
            previous_status: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthTransition {
    pub processor_id: String,
    pub from_status: HealthStatus,
    pub to_status: HealthStatus,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub reason: String,
}
