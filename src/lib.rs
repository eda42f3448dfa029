use std::sync::Arc;

pub mod config;
pub mod domain {
    pub mod health;
    pub mod processor;
    pub mod recommendation;
    pub mod transaction;
}
pub mod health {
    pub mod classifier;
    pub mod window;
}
pub mod http {
    pub mod handlers {
        pub mod alerts;
        pub mod health;
        pub mod processors;
        pub mod routing;
        pub mod transactions;
    }
}
pub mod routing {
    pub mod engine;
    pub mod score;
}

#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<health::classifier::HealthClassifier>,
    pub engine: Arc<routing::engine::RoutingEngine>,
}
