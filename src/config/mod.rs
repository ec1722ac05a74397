pub mod admin_user_conf;
pub mod latency_conf;
pub mod store_conf;

pub use admin_user_conf::AdminUserConfig;
pub use latency_conf::LatencyConfig;
pub use store_conf::StoreConfig;

/// Common configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}
