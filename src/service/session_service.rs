use crate::model::user::User;
use crate::util::kv::{KvError, KvStore};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Store key holding the serialized active-session snapshot.
pub const SESSION_KEY: &str = "dashboard_active_session";

/// The single persisted "currently authenticated user" slot.
///
/// The stored record is a denormalized copy taken at login/signup/profile-save
/// time; later edits to the users collection through other paths do not touch
/// it. No expiry, no token, last writer wins.
pub struct SessionStore {
    store: Arc<dyn KvStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// Reads back the persisted session, if any. An undecodable value is
    /// treated as no session: the slot is cleared and `None` returned rather
    /// than failing the caller.
    #[instrument(skip(self))]
    pub async fn restore(&self) -> Result<Option<User>, KvError> {
        match self.store.get_string(SESSION_KEY).await? {
            None => Ok(None),
            Some(raw) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    info!("Restored session for {}", user.email);
                    Ok(Some(user))
                }
                Err(e) => {
                    warn!("Stored session is corrupt ({}), clearing it", e);
                    self.store.delete(SESSION_KEY).await?;
                    Ok(None)
                }
            },
        }
    }

    #[instrument(skip(self, user), fields(email = %user.email))]
    pub async fn establish(&self, user: &User) -> Result<(), KvError> {
        let raw = serde_json::to_string(user)
            .map_err(|e| KvError::Serialization(format!("Failed to encode session: {}", e)))?;
        self.store.set_string(SESSION_KEY, &raw).await
    }

    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<(), KvError> {
        self.store.delete(SESSION_KEY).await?;
        Ok(())
    }
}
