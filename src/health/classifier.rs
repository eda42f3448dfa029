use crate::domain::health::{HealthTransition, ProcessorHealth};
use crate::domain::transaction::Transaction;
use crate::health::window;
use parking_lot::RwLock;
use std::collections::HashMap;

#[derive(Default)]
struct ClassifierState {
    histories: HashMap<String, Vec<Transaction>>,
    snapshots: HashMap<String, ProcessorHealth>,
    transitions: Vec<HealthTransition>,
}

/// Tracks processor health from recorded transaction outcomes. Histories,
/// snapshots and the transition log live behind one lock so a record is a
/// single atomic critical section; reads share the lock.
pub struct HealthClassifier {
    state: RwLock<ClassifierState>,
}

impl HealthClassifier {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(ClassifierState::default()),
        }
    }

    pub fn record(&self, tx: Transaction) -> ProcessorHealth {
        let mut state = self.state.write();
        let now = chrono::Utc::now();
        let processor_id = tx.processor_id.clone();

        let history = state.histories.entry(processor_id.clone()).or_default();
        history.push(tx);
        prune(history, now);

        let window_start = history.len().saturating_sub(window::WINDOW_SIZE);
        let counts = window::tally(&history[window_start..]);

        let auth_rate = counts.authorization_rate();
        let error_rate = counts.error_rate();
        let status = window::classify(auth_rate, error_rate, counts.total);

        let mut health = ProcessorHealth {
            processor_id: processor_id.clone(),
            status,
            authorization_rate: auth_rate,
            total_transactions: counts.total,
            success_count: counts.approved,
            failure_count: counts.declined,
            error_count: counts.errors,
            last_updated: now,
            status_changed_at: None,
            previous_status: None,
        };

        // A transition needs a prior snapshot; the first computation for a
        // processor never alerts.
        let previous = state.snapshots.get(&processor_id).map(|p| p.status);
        if let Some(from_status) = previous {
            if from_status != status {
                health.previous_status = Some(from_status);
                health.status_changed_at = Some(now);
                state.transitions.push(HealthTransition {
                    processor_id: processor_id.clone(),
                    from_status,
                    to_status: status,
                    timestamp: now,
                    reason: window::transition_reason(auth_rate, error_rate).to_string(),
                });
            }
        }

        state.snapshots.insert(processor_id, health.clone());
        health
    }

    pub fn health(&self, processor_id: &str) -> ProcessorHealth {
        let state = self.state.read();
        state
            .snapshots
            .get(processor_id)
            .cloned()
            .unwrap_or_else(|| ProcessorHealth::unknown(processor_id))
    }

    pub fn all_health(&self) -> Vec<ProcessorHealth> {
        self.state.read().snapshots.values().cloned().collect()
    }

    pub fn transitions_since(
        &self,
        since: chrono::DateTime<chrono::Utc>,
    ) -> Vec<HealthTransition> {
        self.state
            .read()
            .transitions
            .iter()
            .filter(|t| t.timestamp > since)
            .cloned()
            .collect()
    }

    // Tail of the pruned history, oldest first. A limit of 0 returns all.
    pub fn recent_outcomes(&self, processor_id: &str, limit: usize) -> Vec<Transaction> {
        let state = self.state.read();
        let Some(history) = state.histories.get(processor_id) else {
            return Vec::new();
        };
        let start = if limit > 0 {
            history.len().saturating_sub(limit)
        } else {
            0
        };
        history[start..].to_vec()
    }
}

impl Default for HealthClassifier {
    fn default() -> Self {
        Self::new()
    }
}

fn prune(history: &mut Vec<Transaction>, now: chrono::DateTime<chrono::Utc>) {
    let cutoff = now - chrono::Duration::minutes(window::RETENTION_MINUTES);
    history.retain(|tx| tx.timestamp > cutoff);
    if history.len() > window::MAX_HISTORY {
        history.drain(..history.len() - window::MAX_HISTORY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::health::HealthStatus;
    use crate::domain::processor::{Country, PaymentMethod};
    use crate::domain::transaction::TransactionResult;
    use uuid::Uuid;

    fn tx_at(
        result: TransactionResult,
        timestamp: chrono::DateTime<chrono::Utc>,
    ) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            processor_id: "processor_a".to_string(),
            timestamp,
            result,
            payment_method: PaymentMethod::Pix,
            country: Country::BR,
            amount_minor: 100,
            currency: "BRL".to_string(),
        }
    }

    #[test]
    fn stale_outcomes_are_pruned_before_scoring() {
        let classifier = HealthClassifier::new();
        let stale = chrono::Utc::now() - chrono::Duration::minutes(20);

        let health = classifier.record(tx_at(TransactionResult::Error, stale));

        // The only outcome fell outside the retention window, so the score
        // comes from an empty window.
        assert_eq!(health.status, HealthStatus::Healthy);
        assert_eq!(health.authorization_rate, 1.0);
        assert_eq!(health.total_transactions, 0);
        assert!(classifier.recent_outcomes("processor_a", 0).is_empty());
    }

    #[test]
    fn history_is_capped_at_twice_the_window() {
        let classifier = HealthClassifier::new();
        let now = chrono::Utc::now();
        for _ in 0..150 {
            classifier.record(tx_at(TransactionResult::Approved, now));
        }
        assert_eq!(
            classifier.recent_outcomes("processor_a", 0).len(),
            window::MAX_HISTORY
        );
    }
}
