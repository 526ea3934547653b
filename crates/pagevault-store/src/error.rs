/// Errors from document store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A write would push embedded usage past the soft quota.
    #[error("storage quota exceeded: {projected} bytes projected, soft limit is {limit}")]
    QuotaExceeded { projected: u64, limit: u64 },

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization or deserialization failure.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Backend-specific failure (lock poisoning, remote transport, ...).
    #[error("backend failure: {0}")]
    Backend(String),

    /// A remote backend was requested but its connection parameters are
    /// absent. Triggers fallback to the embedded tier, never surfaced to
    /// repository callers.
    #[error("remote backend not configured")]
    NotConfigured,
}

impl StoreError {
    /// Whether this error is the soft-quota breach ("storage full").
    pub fn is_quota(&self) -> bool {
        matches!(self, StoreError::QuotaExceeded { .. })
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
