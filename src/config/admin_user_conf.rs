use serde::{Deserialize, Serialize};
use std::env;
use tracing::warn;

/// Fallback admin credential pair.
///
/// This pair authenticates unconditionally and resolves to the first seeded
/// record without consulting the live collection, so it keeps working even if
/// that record was edited or deleted through the admin table. A deliberate
/// compatibility quirk, not a recovery feature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUserConfig {
    pub email: String,
    pub password: String,
}

impl AdminUserConfig {
    pub fn from_env() -> Self {
        let email = env::var("ADMIN_EMAIL").unwrap_or_else(|_| {
            warn!("ADMIN_EMAIL not set, using default: admin@example.com");
            "admin@example.com".to_string()
        });
        let password = env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
            warn!("ADMIN_PASSWORD not set, using default fallback password");
            "password".to_string()
        });
        AdminUserConfig { email, password }
    }
}

impl Default for AdminUserConfig {
    fn default() -> Self {
        AdminUserConfig {
            email: "admin@example.com".to_string(),
            password: "password".to_string(),
        }
    }
}
