use crate::domain::health::{HealthStatus, ProcessorHealth};
use crate::domain::recommendation::ProcessorRank;

const CONFIDENCE_SAMPLE: u64 = 30;
const CONFIDENCE_BONUS: f64 = 5.0;
const DEGRADED_PENALTY: f64 = 0.5;

pub fn route_score(health: &ProcessorHealth) -> f64 {
    let mut score = health.authorization_rate * 100.0;
    match health.status {
        // Never routed preferentially.
        HealthStatus::Down => score = 0.0,
        HealthStatus::Degraded => score *= DEGRADED_PENALTY,
        HealthStatus::Healthy => {}
    }
    if health.total_transactions > CONFIDENCE_SAMPLE {
        score += CONFIDENCE_BONUS;
    }
    score
}

pub fn rank_reason(status: HealthStatus, recommended: bool) -> &'static str {
    match status {
        HealthStatus::Down => "not recommended, processor is down",
        HealthStatus::Degraded if recommended => "best available but degraded, use with caution",
        HealthStatus::Degraded => "degraded, available as fallback",
        HealthStatus::Healthy if recommended => "best option, highest authorization rate",
        HealthStatus::Healthy => "healthy fallback option",
    }
}

// Candidates arrive in processor-id order; the sort is stable, so equal
// scores keep that order as the tie-break.
pub fn rank_candidates(healths: Vec<ProcessorHealth>) -> Vec<ProcessorRank> {
    let mut scored: Vec<(ProcessorHealth, f64)> = healths
        .into_iter()
        .map(|h| {
            let score = route_score(&h);
            (h, score)
        })
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    scored
        .into_iter()
        .enumerate()
        .map(|(i, (health, _score))| {
            let recommended = i == 0 && health.status != HealthStatus::Down;
            ProcessorRank {
                processor_id: health.processor_id,
                rank: i + 1,
                status: health.status,
                authorization_rate: health.authorization_rate,
                recommended,
                reason: rank_reason(health.status, recommended).to_string(),
            }
        })
        .collect()
}
