//! High-level embedding API for Pagevault.
//!
//! [`Site`] bundles the storage chain, the page and settings
//! repositories, and the session gate behind one handle. This is the
//! entry point for applications embedding Pagevault; the CLI is a thin
//! wrapper over it.

pub mod error;
pub mod site;

pub use error::{SiteError, SiteResult};
pub use site::Site;

// Re-export key types so embedders need only this crate.
pub use pagevault_auth::{CredentialTable, SessionGate};
pub use pagevault_content::{ExportBundle, SettingsEditor, BACKUP_VERSION};
pub use pagevault_store::{DocumentStore, Namespace, StoreConfig};
pub use pagevault_types::{get_path, set_path, Document, PageId, Session, UserIdentity};
