use axum::routing::{get, post};
use axum::Router;
use processor_failover::config::AppConfig;
use processor_failover::domain::processor::{Country, PaymentMethod, ProcessorProfile};
use processor_failover::health::classifier::HealthClassifier;
use processor_failover::routing::engine::RoutingEngine;
use processor_failover::AppState;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let classifier = Arc::new(HealthClassifier::new());
    let engine = Arc::new(RoutingEngine::new(classifier.clone()));

    if cfg.seed_demo_processors {
        register_demo_processors(&engine);
        tracing::info!(count = engine.processors().len(), "registered demo processors");
    }

    let state = AppState { classifier, engine };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(processor_failover::http::handlers::health::liveness))
        .route(
            "/api/v1/transactions",
            post(processor_failover::http::handlers::transactions::record_transaction),
        )
        .route(
            "/api/v1/health",
            get(processor_failover::http::handlers::health::get_all_health),
        )
        .route(
            "/api/v1/health/:processor_id",
            get(processor_failover::http::handlers::health::get_processor_health),
        )
        .route(
            "/api/v1/routing/recommend",
            post(processor_failover::http::handlers::routing::recommend)
                .get(processor_failover::http::handlers::routing::recommend_query),
        )
        .route(
            "/api/v1/processors",
            get(processor_failover::http::handlers::processors::list_processors)
                .post(processor_failover::http::handlers::processors::register_processor),
        )
        .route(
            "/api/v1/alerts",
            get(processor_failover::http::handlers::alerts::get_alerts),
        )
        .layer(cors)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}

fn register_demo_processors(engine: &RoutingEngine) {
    let processors = vec![
        ProcessorProfile {
            id: "processor_a".to_string(),
            name: "GlobalPay_BR".to_string(),
            countries: vec![Country::BR],
            payment_methods: vec![PaymentMethod::Pix, PaymentMethod::Card],
        },
        ProcessorProfile {
            id: "processor_b".to_string(),
            name: "PayLatam".to_string(),
            countries: vec![Country::BR, Country::MX, Country::CO],
            payment_methods: vec![PaymentMethod::Card],
        },
        ProcessorProfile {
            id: "processor_c".to_string(),
            name: "PixMaster".to_string(),
            countries: vec![Country::BR],
            payment_methods: vec![PaymentMethod::Pix],
        },
        ProcessorProfile {
            id: "processor_d".to_string(),
            name: "MexPago".to_string(),
            countries: vec![Country::MX],
            payment_methods: vec![PaymentMethod::Card, PaymentMethod::Oxxo],
        },
        ProcessorProfile {
            id: "processor_e".to_string(),
            name: "ColombiaPS".to_string(),
            countries: vec![Country::CO],
            payment_methods: vec![PaymentMethod::Pse, PaymentMethod::Card],
        },
    ];

    for p in processors {
        engine.register_processor(p);
    }
}
