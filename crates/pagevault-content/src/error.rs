use pagevault_store::StoreError;
use pagevault_types::PageId;

/// Errors from content repository operations.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// Publish was requested for a page with no draft.
    #[error("no draft content to publish for page '{0}'")]
    NoDraft(PageId),

    /// The underlying store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ContentError {
    /// Whether the failure is the embedded quota breach ("storage full").
    pub fn is_storage_full(&self) -> bool {
        matches!(self, ContentError::Store(err) if err.is_quota())
    }
}

/// Result alias for content operations.
pub type ContentResult<T> = Result<T, ContentError>;
