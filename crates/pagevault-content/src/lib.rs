//! Content lifecycle for Pagevault.
//!
//! Each managed page has a published document (what visitors see) and an
//! optional draft (what an editor is working on). The lifecycle is:
//! load published → edit a draft copy → save the draft → publish, which
//! promotes the draft over the published document and clears it.
//!
//! - [`PageRepository`] — load / save-draft / publish / revert plumbing
//! - [`SettingsRepository`] / [`SettingsEditor`] — the site-wide settings
//!   singleton (no draft split; saved wholesale)
//! - [`backup`] — whole-site export/import bundles
//! - [`defaults`] — the static default-content table used to seed a
//!   fresh installation

pub mod backup;
pub mod defaults;
pub mod error;
pub mod repository;
pub mod settings;

pub use backup::{export_data, import_data, ExportBundle, BACKUP_VERSION};
pub use error::{ContentError, ContentResult};
pub use repository::PageRepository;
pub use settings::{SettingsEditor, SettingsRepository};
