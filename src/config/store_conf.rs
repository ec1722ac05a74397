use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::config::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Location of the JSON backing file holding every persisted key.
    pub path: PathBuf,
}

impl StoreConfig {
    /// Load store configuration from environment variables
    ///
    /// Expected environment variables:
    /// - STORE_PATH: backing file location (defaults to "data/pulseboard_store.json")
    pub fn from_env() -> Result<Self, ConfigError> {
        let path = env::var("STORE_PATH").unwrap_or_else(|_| {
            warn!("STORE_PATH not set, using default: data/pulseboard_store.json");
            "data/pulseboard_store.json".to_string()
        });
        if path.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "STORE_PATH must not be empty".to_string(),
            ));
        }
        debug!("Store backing file: {}", path);
        Ok(StoreConfig {
            path: PathBuf::from(path),
        })
    }
}
