//! Foundation types for Pagevault.
//!
//! This crate provides the identifiers, document representation, and session
//! types used throughout the Pagevault system. Every other Pagevault crate
//! depends on `pagevault-types`.
//!
//! # Key Types
//!
//! - [`PageId`] — Identifier for one of the five managed content pages
//! - [`Document`] — Schemaless nested content document (`serde_json::Value`)
//! - [`Session`] / [`UserIdentity`] — Time-boxed editor session and its owner
//! - [`Clock`] — Time source abstraction so expiry is testable
//!
//! The [`path`] module holds the dotted-path accessors (`"hero.title"`
//! style) that every field edit goes through.

pub mod clock;
pub mod error;
pub mod page;
pub mod path;
pub mod session;

/// A page or settings document: an arbitrarily nested JSON value.
///
/// No schema is enforced at this layer. Callers assume specific shapes
/// (e.g. `hero.title`, `features[]`) by convention only; validation, if
/// any, happens at the UI boundary.
pub type Document = serde_json::Value;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::TypeError;
pub use page::PageId;
pub use path::{get_path, set_path};
pub use session::{Session, UserIdentity, SESSION_WINDOW_SECS};
