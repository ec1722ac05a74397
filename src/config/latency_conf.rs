use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use tracing::debug;

use crate::config::ConfigError;

/// Simulated network latency, applied once per facade operation.
///
/// The delays mirror what a small hosted API would exhibit: reads and writes
/// around 600ms, stats a little quicker, the reports payload slower, deletes
/// fastest. Disable the whole thing (tests, local tooling) with
/// `SIM_LATENCY=off` or [`LatencyConfig::disabled`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatencyConfig {
    pub enabled: bool,
    /// Login, signup, list, create and update operations.
    pub default_ms: u64,
    pub stats_ms: u64,
    pub reports_ms: u64,
    pub delete_ms: u64,
}

const DEFAULT_MS: u64 = 600;
const STATS_MS: u64 = 500;
const REPORTS_MS: u64 = 1000;
const DELETE_MS: u64 = 300;

impl LatencyConfig {
    /// Load latency configuration from environment variables
    ///
    /// Expected environment variables:
    /// - SIM_LATENCY: "off"/"false"/"0" disables simulated delays (defaults to on)
    /// - SIM_LATENCY_DEFAULT_MS / SIM_LATENCY_STATS_MS /
    ///   SIM_LATENCY_REPORTS_MS / SIM_LATENCY_DELETE_MS: per-operation overrides
    pub fn from_env() -> Result<Self, ConfigError> {
        let enabled = match env::var("SIM_LATENCY") {
            Ok(v) => !matches!(v.to_lowercase().as_str(), "off" | "false" | "0"),
            Err(_) => true,
        };
        let config = LatencyConfig {
            enabled,
            default_ms: parse_ms("SIM_LATENCY_DEFAULT_MS", DEFAULT_MS)?,
            stats_ms: parse_ms("SIM_LATENCY_STATS_MS", STATS_MS)?,
            reports_ms: parse_ms("SIM_LATENCY_REPORTS_MS", REPORTS_MS)?,
            delete_ms: parse_ms("SIM_LATENCY_DELETE_MS", DELETE_MS)?,
        };
        debug!("Latency config: {:?}", config);
        Ok(config)
    }

    pub fn disabled() -> Self {
        LatencyConfig {
            enabled: false,
            ..LatencyConfig::default()
        }
    }

    pub async fn simulate_default(&self) {
        self.pause(self.default_ms).await;
    }

    pub async fn simulate_stats(&self) {
        self.pause(self.stats_ms).await;
    }

    pub async fn simulate_reports(&self) {
        self.pause(self.reports_ms).await;
    }

    pub async fn simulate_delete(&self) {
        self.pause(self.delete_ms).await;
    }

    async fn pause(&self, ms: u64) {
        if self.enabled && ms > 0 {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        LatencyConfig {
            enabled: true,
            default_ms: DEFAULT_MS,
            stats_ms: STATS_MS,
            reports_ms: REPORTS_MS,
            delete_ms: DELETE_MS,
        }
    }
}

fn parse_ms(var: &str, default: u64) -> Result<u64, ConfigError> {
    match env::var(var) {
        Ok(v) => v
            .parse()
            .map_err(|e| ConfigError::ParseError(format!("Invalid {}: {}", var, e))),
        Err(_) => Ok(default),
    }
}
