use crate::util::kv::KvError;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Not Found: {0}")]
    NotFound(String),

    /// The backing store could not be read or written. Fatal; there is no
    /// recovery path, callers surface it as-is.
    #[error("Storage Error: {0}")]
    Storage(#[from] KvError),

    #[error("Serialization Error: {0}")]
    SerializationError(String),
}

// Convenient constructors
impl RepositoryError {
    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        RepositoryError::NotFound(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        RepositoryError::SerializationError(msg.into())
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::SerializationError(format!("JSON error: {}", err))
    }
}

// Result type alias for convenience
pub type RepositoryResult<T> = Result<T, RepositoryError>;
