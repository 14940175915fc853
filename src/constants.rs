//! Application constants and configuration

/// Advisory server reached when the user has not configured one
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";
pub const PREDICT_PATH: &str = "/api/predict";
pub const HEALTH_PATH: &str = "/api/health";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
