//! Session and credential gate for the Pagevault admin surface.
//!
//! Editors authenticate against a credential table and receive a
//! time-boxed session (24 hours), persisted through the same document
//! store as the content. Permission and role checks are pure reads that
//! never fail: an absent or expired session simply answers `false`.
//!
//! The state machine is small: `Anonymous → Authenticated` on login,
//! back on logout, and `Authenticated → Expired → Anonymous` lazily —
//! expiry is observed (and the session purged) on whatever check happens
//! to run first after the window closes. A background task refreshes the
//! session every 30 minutes while the admin surface is active.

pub mod credentials;
pub mod error;
pub mod gate;
pub mod monitor;

pub use credentials::CredentialTable;
pub use error::{AuthError, AuthResult};
pub use gate::SessionGate;
pub use monitor::{spawn_refresh_task, REFRESH_INTERVAL};
