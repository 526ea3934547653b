use std::sync::Arc;

use pagevault_store::{DocumentStore, Namespace};
use pagevault_types::{Clock, Session, SystemClock, UserIdentity};

use crate::credentials::CredentialTable;
use crate::error::{AuthError, AuthResult};

/// Storage key for the session singleton.
const SESSION_KEY: &str = "session";

/// The authentication gate.
///
/// Holds the credential table, a clock, and the store the session is
/// persisted in. Expiry is enforced lazily: any read of the session past
/// its window purges it and reports anonymous.
pub struct SessionGate {
    store: Arc<dyn DocumentStore>,
    clock: Arc<dyn Clock>,
    credentials: CredentialTable,
}

impl SessionGate {
    /// Gate over `store` with the system clock.
    pub fn new(store: Arc<dyn DocumentStore>, credentials: CredentialTable) -> Self {
        Self::with_clock(store, credentials, Arc::new(SystemClock))
    }

    /// Gate with an explicit clock, for tests.
    pub fn with_clock(
        store: Arc<dyn DocumentStore>,
        credentials: CredentialTable,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            clock,
            credentials,
        }
    }

    /// Authenticate and open a session valid for the full 24-hour window.
    pub async fn login(&self, email: &str, password: &str) -> AuthResult<Session> {
        let user = self
            .credentials
            .verify(email, password)
            .ok_or(AuthError::InvalidCredentials)?;

        let session = Session::issue(user, self.clock.now());
        self.persist(&session).await?;
        tracing::info!(email, role = %session.user.role, "login succeeded");
        Ok(session)
    }

    /// Close the current session.
    ///
    /// The local session is always cleared; a store failure is logged
    /// and swallowed so logout cannot be blocked by a flaky backend.
    pub async fn logout(&self) {
        if let Err(err) = self.store.delete(Namespace::Sessions, SESSION_KEY).await {
            tracing::warn!(error = %err, "session delete failed during logout");
        }
        tracing::info!("logged out");
    }

    /// The current session, if one exists and has not expired.
    ///
    /// An expired or unreadable session is purged on observation.
    pub async fn current_session(&self) -> Option<Session> {
        let doc = match self.store.get(Namespace::Sessions, SESSION_KEY).await {
            Ok(Some(doc)) => doc,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!(error = %err, "session read failed");
                return None;
            }
        };

        let session: Session = match serde_json::from_value(doc) {
            Ok(session) => session,
            Err(err) => {
                tracing::warn!(error = %err, "stored session is corrupt, purging");
                self.purge().await;
                return None;
            }
        };

        if session.is_expired(self.clock.now()) {
            tracing::debug!("session expired, purging");
            self.purge().await;
            return None;
        }

        Some(session)
    }

    /// The authenticated identity, if any.
    pub async fn current_user(&self) -> Option<UserIdentity> {
        self.current_session().await.map(|session| session.user)
    }

    /// Whether a live session exists.
    pub async fn is_authenticated(&self) -> bool {
        self.current_session().await.is_some()
    }

    /// Whether the current identity carries `permission`. Never fails;
    /// anonymous answers `false`.
    pub async fn has_permission(&self, permission: &str) -> bool {
        self.current_user()
            .await
            .map(|user| user.can(permission))
            .unwrap_or(false)
    }

    /// Whether the current identity has `role`. Never fails; anonymous
    /// answers `false`.
    pub async fn has_role(&self, role: &str) -> bool {
        self.current_user()
            .await
            .map(|user| user.role == role)
            .unwrap_or(false)
    }

    /// Extend the current session for a full window from now.
    ///
    /// Returns `false` when there is nothing to refresh — no session,
    /// an expired one, or a persist failure. A `false` stops the
    /// background refresh loop.
    pub async fn refresh(&self) -> bool {
        let Some(mut session) = self.current_session().await else {
            return false;
        };

        session.refresh(self.clock.now());
        match self.persist(&session).await {
            Ok(()) => {
                tracing::debug!(expires_at = %session.expires_at, "session refreshed");
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "session refresh persist failed");
                false
            }
        }
    }

    async fn persist(&self, session: &Session) -> AuthResult<()> {
        let doc = serde_json::to_value(session)
            .map_err(|e| pagevault_store::StoreError::Serialization(e.to_string()))?;
        self.store
            .set(Namespace::Sessions, SESSION_KEY, &doc)
            .await?;
        Ok(())
    }

    async fn purge(&self) {
        if let Err(err) = self.store.delete(Namespace::Sessions, SESSION_KEY).await {
            tracing::warn!(error = %err, "session purge failed");
        }
    }
}
