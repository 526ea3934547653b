use pagevault_store::StoreError;

/// Errors from authentication operations.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The email/password pair matched no known identity.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// The session could not be persisted or read.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result alias for auth operations.
pub type AuthResult<T> = Result<T, AuthError>;
