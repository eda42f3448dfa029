#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub seed_demo_processors: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            seed_demo_processors: std::env::var("SEED_DEMO_PROCESSORS")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        }
    }
}
