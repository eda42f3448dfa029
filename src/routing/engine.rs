use crate::domain::processor::{Country, PaymentMethod, ProcessorProfile};
use crate::domain::recommendation::RoutingRecommendation;
use crate::health::classifier::HealthClassifier;
use crate::routing::score;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Holds the processor capability registry and turns a (method, country)
/// request into a ranked recommendation. The registry lock is independent of
/// the classifier's; a recommendation's filter and health-lookup steps are
/// not mutually atomic, which is fine for an advisory result.
pub struct RoutingEngine {
    classifier: Arc<HealthClassifier>,
    registry: RwLock<HashMap<String, ProcessorProfile>>,
}

impl RoutingEngine {
    pub fn new(classifier: Arc<HealthClassifier>) -> Self {
        Self {
            classifier,
            registry: RwLock::new(HashMap::new()),
        }
    }

    // Idempotent upsert, last write wins.
    pub fn register_processor(&self, profile: ProcessorProfile) {
        self.registry.write().insert(profile.id.clone(), profile);
    }

    pub fn processors(&self) -> Vec<ProcessorProfile> {
        self.registry.read().values().cloned().collect()
    }

    // amount_minor is carried on the contract for future routing policy; it
    // does not affect filtering or scoring.
    pub fn recommend(
        &self,
        method: PaymentMethod,
        country: Country,
        _amount_minor: i64,
    ) -> RoutingRecommendation {
        let mut candidates: Vec<ProcessorProfile> = self
            .registry
            .read()
            .values()
            .filter(|p| p.payment_methods.contains(&method) && p.countries.contains(&country))
            .cloned()
            .collect();

        // Deterministic base order so equal scores tie-break by id.
        candidates.sort_by(|a, b| a.id.cmp(&b.id));

        let healths = candidates
            .iter()
            .map(|p| self.classifier.health(&p.id))
            .collect();

        RoutingRecommendation {
            recommendations: score::rank_candidates(healths),
            payment_method: method,
            country,
            timestamp: chrono::Utc::now(),
        }
    }
}
