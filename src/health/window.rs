use crate::domain::health::HealthStatus;
use crate::domain::transaction::{Transaction, TransactionResult};

pub const WINDOW_SIZE: usize = 50;
pub const RETENTION_MINUTES: i64 = 10;
pub const MAX_HISTORY: usize = WINDOW_SIZE * 2;
pub const HEALTHY_THRESHOLD: f64 = 0.65;
pub const DEGRADED_FLOOR: f64 = 0.30;
pub const ERROR_RATE_DOWN: f64 = 0.50;
pub const ERROR_RATE_DEGRADED: f64 = 0.30;
pub const MIN_SAMPLE: u64 = 10;

#[derive(Debug, Clone, Default)]
pub struct WindowCounts {
    pub approved: u64,
    pub declined: u64,
    pub errors: u64,
    pub total: u64,
}

pub fn tally(window: &[Transaction]) -> WindowCounts {
    let mut counts = WindowCounts {
        total: window.len() as u64,
        ..WindowCounts::default()
    };
    for tx in window {
        match tx.result {
            TransactionResult::Approved => counts.approved += 1,
            TransactionResult::Declined => counts.declined += 1,
            TransactionResult::Error | TransactionResult::Timeout => counts.errors += 1,
            // Unrecognized results occupy a window slot but land in no bucket.
            TransactionResult::Unknown => {}
        }
    }
    counts
}

impl WindowCounts {
    // approved / (approved + declined); errors and timeouts are excluded
    // from the denominator. A window of nothing but errors rates 0.0, an
    // empty window rates the optimistic 1.0.
    pub fn authorization_rate(&self) -> f64 {
        let attempts = self.approved + self.declined;
        if attempts > 0 {
            self.approved as f64 / attempts as f64
        } else if self.errors > 0 {
            0.0
        } else {
            1.0
        }
    }

    pub fn error_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.errors as f64 / self.total as f64
        }
    }
}

pub fn classify(auth_rate: f64, error_rate: f64, total: u64) -> HealthStatus {
    // Below the minimum sample the optimistic default stands.
    if total < MIN_SAMPLE {
        return HealthStatus::Healthy;
    }
    if error_rate > ERROR_RATE_DOWN {
        return HealthStatus::Down;
    }
    if error_rate > ERROR_RATE_DEGRADED {
        return HealthStatus::Degraded;
    }
    if auth_rate < DEGRADED_FLOOR {
        return HealthStatus::Down;
    }
    if auth_rate < HEALTHY_THRESHOLD {
        return HealthStatus::Degraded;
    }
    HealthStatus::Healthy
}

// Same priority order as classify, so the reason matches the rule that fired.
pub fn transition_reason(auth_rate: f64, error_rate: f64) -> &'static str {
    if error_rate > ERROR_RATE_DOWN {
        return "high error/timeout rate";
    }
    if error_rate > ERROR_RATE_DEGRADED {
        return "elevated error/timeout rate";
    }
    if auth_rate < DEGRADED_FLOOR {
        return "very low authorization rate";
    }
    if auth_rate < HEALTHY_THRESHOLD {
        return "low authorization rate";
    }
    "performance recovered"
}
