//! Local durable key-value storage.
//!
//! Everything the backend persists (the users collection, the active session)
//! goes through the [`KvStore`] trait as a JSON string under a fixed key. The
//! store is injected into the repository and the session store so tests can
//! swap the file-backed implementation for an in-memory one.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{debug, error, instrument};

use crate::config::store_conf::StoreConfig;

/// Error types for key-value store operations
#[derive(Debug, thiserror::Error)]
pub enum KvError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Trait for string-keyed durable storage operations
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get_string(&self, key: &str) -> Result<Option<String>, KvError>;
    async fn set_string(&self, key: &str, value: &str) -> Result<(), KvError>;
    /// Removes the key, returning whether it was present.
    async fn delete(&self, key: &str) -> Result<bool, KvError>;
    async fn exists(&self, key: &str) -> Result<bool, KvError>;
}

/// File-backed store: a single JSON object on disk mapping keys to string
/// values. Every operation loads and rewrites the whole map, which is fine for
/// the two small keys this backend keeps.
pub struct FileKvStore {
    path: PathBuf,
}

impl FileKvStore {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            path: config.path.clone(),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn load(&self) -> Result<HashMap<String, String>, KvError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                error!("Backing file {} is not valid JSON: {}", self.path.display(), e);
                KvError::Serialization(format!(
                    "Failed to decode backing file {}: {}",
                    self.path.display(),
                    e
                ))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Backing file {} absent, starting empty", self.path.display());
                Ok(HashMap::new())
            }
            Err(e) => {
                error!("Failed to read backing file {}: {}", self.path.display(), e);
                Err(KvError::Unavailable(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        }
    }

    async fn persist(&self, map: &HashMap<String, String>) -> Result<(), KvError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    KvError::Unavailable(format!(
                        "Failed to create store directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }
        let bytes = serde_json::to_vec_pretty(map)
            .map_err(|e| KvError::Serialization(format!("Failed to encode store: {}", e)))?;
        tokio::fs::write(&self.path, bytes).await.map_err(|e| {
            error!("Failed to write backing file {}: {}", self.path.display(), e);
            KvError::Unavailable(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }
}

#[async_trait]
impl KvStore for FileKvStore {
    #[instrument(skip(self))]
    async fn get_string(&self, key: &str) -> Result<Option<String>, KvError> {
        Ok(self.load().await?.remove(key))
    }

    #[instrument(skip(self, value))]
    async fn set_string(&self, key: &str, value: &str) -> Result<(), KvError> {
        let mut map = self.load().await?;
        map.insert(key.to_string(), value.to_string());
        self.persist(&map).await
    }

    #[instrument(skip(self))]
    async fn delete(&self, key: &str) -> Result<bool, KvError> {
        let mut map = self.load().await?;
        let existed = map.remove(key).is_some();
        if existed {
            self.persist(&map).await?;
        }
        Ok(existed)
    }

    #[instrument(skip(self))]
    async fn exists(&self, key: &str) -> Result<bool, KvError> {
        Ok(self.load().await?.contains_key(key))
    }
}

/// In-memory store for tests and ephemeral runs.
#[derive(Default)]
pub struct MemoryKvStore {
    map: Mutex<HashMap<String, String>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, KvError> {
        self.map
            .lock()
            .map_err(|_| KvError::Unavailable("store lock poisoned".to_string()))
    }
}

#[async_trait]
impl KvStore for MemoryKvStore {
    async fn get_string(&self, key: &str) -> Result<Option<String>, KvError> {
        Ok(self.lock()?.get(key).cloned())
    }

    async fn set_string(&self, key: &str, value: &str) -> Result<(), KvError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, KvError> {
        Ok(self.lock()?.remove(key).is_some())
    }

    async fn exists(&self, key: &str) -> Result<bool, KvError> {
        Ok(self.lock()?.contains_key(key))
    }
}
