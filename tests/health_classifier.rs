use processor_failover::domain::health::HealthStatus;
use processor_failover::domain::processor::{Country, PaymentMethod};
use processor_failover::domain::transaction::{Transaction, TransactionResult};
use processor_failover::health::classifier::HealthClassifier;
use uuid::Uuid;

fn tx(processor_id: &str, result: TransactionResult) -> Transaction {
    Transaction {
        id: Uuid::new_v4(),
        processor_id: processor_id.to_string(),
        timestamp: chrono::Utc::now(),
        result,
        payment_method: PaymentMethod::Pix,
        country: Country::BR,
        amount_minor: 100,
        currency: "BRL".to_string(),
    }
}

fn record_n(classifier: &HealthClassifier, id: &str, result: TransactionResult, n: usize) {
    for _ in 0..n {
        classifier.record(tx(id, result.clone()));
    }
}

#[test]
fn new_processor_defaults_to_healthy() {
    let classifier = HealthClassifier::new();

    let health = classifier.health("processor_a");

    assert_eq!(health.status, HealthStatus::Healthy);
    assert_eq!(health.authorization_rate, 1.0);
    assert_eq!(health.total_transactions, 0);
}

#[test]
fn eighty_percent_approved_is_healthy() {
    let classifier = HealthClassifier::new();
    record_n(&classifier, "processor_a", TransactionResult::Approved, 40);
    record_n(&classifier, "processor_a", TransactionResult::Declined, 10);

    let health = classifier.health("processor_a");

    assert_eq!(health.status, HealthStatus::Healthy);
    assert!(health.authorization_rate > 0.79 && health.authorization_rate < 0.81);
}

#[test]
fn fifty_percent_approved_is_degraded() {
    let classifier = HealthClassifier::new();
    record_n(&classifier, "processor_a", TransactionResult::Approved, 25);
    record_n(&classifier, "processor_a", TransactionResult::Declined, 25);

    let health = classifier.health("processor_a");

    assert_eq!(health.status, HealthStatus::Degraded);
    assert_eq!(health.authorization_rate, 0.5);
}

#[test]
fn twenty_percent_approved_is_down() {
    let classifier = HealthClassifier::new();
    record_n(&classifier, "processor_a", TransactionResult::Approved, 10);
    record_n(&classifier, "processor_a", TransactionResult::Declined, 40);

    assert_eq!(classifier.health("processor_a").status, HealthStatus::Down);
}

#[test]
fn high_error_rate_is_down_despite_auth_rate() {
    let classifier = HealthClassifier::new();
    record_n(&classifier, "processor_a", TransactionResult::Approved, 20);
    record_n(&classifier, "processor_a", TransactionResult::Error, 30);

    // 60% errors outranks the perfect authorization rate.
    let health = classifier.health("processor_a");
    assert_eq!(health.status, HealthStatus::Down);
    assert_eq!(health.authorization_rate, 1.0);
    assert_eq!(health.error_count, 30);
}

#[test]
fn timeouts_count_as_errors() {
    let classifier = HealthClassifier::new();
    record_n(&classifier, "processor_a", TransactionResult::Approved, 20);
    record_n(&classifier, "processor_a", TransactionResult::Timeout, 30);

    assert_eq!(classifier.health("processor_a").status, HealthStatus::Down);
}

#[test]
fn rolling_window_evicts_old_outcomes() {
    let classifier = HealthClassifier::new();
    record_n(&classifier, "processor_a", TransactionResult::Error, 60);
    record_n(&classifier, "processor_a", TransactionResult::Approved, 50);

    // The scoring window is the 50 most recent outcomes, all approved now.
    let health = classifier.health("processor_a");
    assert_eq!(health.status, HealthStatus::Healthy);
    assert_eq!(health.authorization_rate, 1.0);
    assert_eq!(health.total_transactions, 50);
}

#[test]
fn history_retains_at_most_twice_the_window() {
    let classifier = HealthClassifier::new();
    record_n(&classifier, "processor_a", TransactionResult::Approved, 250);

    assert_eq!(classifier.recent_outcomes("processor_a", 0).len(), 100);
}

#[test]
fn below_min_sample_stays_healthy() {
    let classifier = HealthClassifier::new();
    record_n(&classifier, "processor_a", TransactionResult::Declined, 9);

    // Nine declines is under the minimum sample; the optimistic default
    // stands even though the authorization rate is zero.
    let health = classifier.health("processor_a");
    assert_eq!(health.status, HealthStatus::Healthy);
    assert_eq!(health.authorization_rate, 0.0);
}

#[test]
fn unknown_results_fill_the_window_without_a_bucket() {
    let classifier = HealthClassifier::new();
    record_n(&classifier, "processor_a", TransactionResult::Approved, 5);
    record_n(&classifier, "processor_a", TransactionResult::Declined, 5);
    record_n(&classifier, "processor_a", TransactionResult::Unknown, 10);

    let health = classifier.health("processor_a");
    assert_eq!(health.total_transactions, 20);
    assert_eq!(health.success_count, 5);
    assert_eq!(health.failure_count, 5);
    assert_eq!(health.error_count, 0);
    assert_eq!(health.authorization_rate, 0.5);
    assert_eq!(health.status, HealthStatus::Degraded);
}

#[test]
fn status_change_appends_exactly_one_transition() {
    let classifier = HealthClassifier::new();
    let before = chrono::Utc::now() - chrono::Duration::seconds(1);

    // Nine errors keep the forced-healthy default (with a stored snapshot);
    // the tenth crosses the minimum sample and flips straight to DOWN.
    record_n(&classifier, "processor_a", TransactionResult::Error, 10);

    let transitions = classifier.transitions_since(before);
    assert_eq!(transitions.len(), 1);
    let t = &transitions[0];
    assert_eq!(t.from_status, HealthStatus::Healthy);
    assert_eq!(t.to_status, HealthStatus::Down);
    assert_eq!(t.reason, "high error/timeout rate");

    let health = classifier.health("processor_a");
    assert_eq!(health.previous_status, Some(HealthStatus::Healthy));
    assert!(health.status_changed_at.is_some());
}

#[test]
fn first_computation_never_records_a_transition() {
    let classifier = HealthClassifier::new();
    let before = chrono::Utc::now() - chrono::Duration::seconds(1);

    classifier.record(tx("processor_a", TransactionResult::Approved));

    assert!(classifier.transitions_since(before).is_empty());
    assert!(classifier.health("processor_a").previous_status.is_none());
}

#[test]
fn transitions_since_is_strictly_after() {
    let classifier = HealthClassifier::new();
    let before = chrono::Utc::now() - chrono::Duration::seconds(1);
    record_n(&classifier, "processor_a", TransactionResult::Error, 10);

    let transitions = classifier.transitions_since(before);
    assert_eq!(transitions.len(), 1);

    // Querying at the transition's own timestamp excludes it.
    assert!(classifier
        .transitions_since(transitions[0].timestamp)
        .is_empty());
}

#[test]
fn degradation_and_recovery_are_both_logged() {
    let classifier = HealthClassifier::new();
    let before = chrono::Utc::now() - chrono::Duration::seconds(1);

    record_n(&classifier, "processor_a", TransactionResult::Approved, 50);
    record_n(&classifier, "processor_a", TransactionResult::Error, 50);
    record_n(&classifier, "processor_a", TransactionResult::Approved, 50);

    let transitions = classifier.transitions_since(before);
    assert!(transitions.len() >= 2);
    let last = transitions.last().unwrap();
    assert_eq!(last.to_status, HealthStatus::Healthy);
    assert_eq!(last.reason, "performance recovered");
    for pair in transitions.windows(2) {
        assert!(pair[0].timestamp <= pair[1].timestamp);
    }
}

#[test]
fn recent_outcomes_returns_tail_oldest_first() {
    let classifier = HealthClassifier::new();
    for amount in 1..=8 {
        let mut t = tx("processor_a", TransactionResult::Approved);
        t.amount_minor = amount;
        classifier.record(t);
    }

    let recent = classifier.recent_outcomes("processor_a", 3);
    let amounts: Vec<i64> = recent.iter().map(|t| t.amount_minor).collect();
    assert_eq!(amounts, vec![6, 7, 8]);

    assert!(classifier.recent_outcomes("processor_x", 3).is_empty());
}

#[test]
fn reads_do_not_mutate_state() {
    let classifier = HealthClassifier::new();
    record_n(&classifier, "processor_a", TransactionResult::Approved, 25);
    record_n(&classifier, "processor_a", TransactionResult::Declined, 25);

    let first = classifier.health("processor_a");
    for _ in 0..5 {
        let again = classifier.health("processor_a");
        assert_eq!(again.status, first.status);
        assert_eq!(again.authorization_rate, first.authorization_rate);
        assert_eq!(again.total_transactions, first.total_transactions);
        assert_eq!(again.last_updated, first.last_updated);
        assert_eq!(classifier.all_health().len(), 1);
    }
}
