use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("store error: {0}")]
    Store(#[from] pagevault_store::StoreError),

    #[error("content error: {0}")]
    Content(#[from] pagevault_content::ContentError),

    #[error("auth error: {0}")]
    Auth(#[from] pagevault_auth::AuthError),
}

impl SiteError {
    /// Whether the underlying failure was the embedded capacity quota.
    pub fn is_storage_full(&self) -> bool {
        match self {
            SiteError::Store(err) => err.is_quota(),
            SiteError::Content(err) => err.is_storage_full(),
            SiteError::Auth(_) => false,
        }
    }
}

pub type SiteResult<T> = Result<T, SiteError>;
