//! Key-value document storage for Pagevault.
//!
//! Content lives in namespaced key-value slots: published pages, drafts,
//! the site settings singleton, and the persisted editor session. All
//! backends implement the [`DocumentStore`] trait:
//!
//! - [`MemoryStore`] — `HashMap`-based store for tests and embedding
//! - [`FileStore`] — one JSON file per namespace in a data directory
//! - [`TieredStore`] — ordered backends, first success wins
//!
//! # Design Rules
//!
//! 1. The store never interprets document contents — it is a pure
//!    key-value store.
//! 2. Embedded backends enforce a soft capacity quota (80% of 5 MiB);
//!    a write that would cross it fails whole, never partially.
//! 3. A failing tier in a [`TieredStore`] falls through silently to the
//!    next one; only the last tier's error propagates.
//! 4. There is no transactionality across namespaces. Publish is three
//!    independent operations at the repository layer.

pub mod config;
pub mod error;
pub mod file;
pub mod memory;
pub mod quota;
pub mod tiered;
pub mod traits;

pub use config::{RemoteConfig, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use quota::{UsageReport, EMBEDDED_CAPACITY_BYTES, QUOTA_THRESHOLD_PCT};
pub use tiered::TieredStore;
pub use traits::{DocumentStore, Namespace};
