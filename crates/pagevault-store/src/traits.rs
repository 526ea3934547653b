use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use pagevault_types::Document;

use crate::error::StoreResult;

/// Storage namespaces.
///
/// `Published` and `Drafts` are keyed by page id. `Settings` and
/// `Sessions` are singleton slots (one well-known key each).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Namespace {
    Published,
    Drafts,
    Settings,
    Sessions,
}

impl Namespace {
    pub const ALL: [Namespace; 4] = [
        Namespace::Published,
        Namespace::Drafts,
        Namespace::Settings,
        Namespace::Sessions,
    ];

    /// The persisted key for this namespace.
    ///
    /// These names are the site's legacy storage keys and must not change:
    /// existing deployments have data under them.
    pub fn storage_key(&self) -> &'static str {
        match self {
            Namespace::Published => "coworking_data",
            Namespace::Drafts => "coworking_drafts",
            Namespace::Settings => "coworking_settings",
            Namespace::Sessions => "coworking_auth",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Namespace::Published => "published",
            Namespace::Drafts => "drafts",
            Namespace::Settings => "settings",
            Namespace::Sessions => "sessions",
        };
        f.write_str(name)
    }
}

/// Namespaced key-value store for content documents.
///
/// All implementations must satisfy these invariants:
/// - `get` returns `Ok(None)` for an absent key, never an error.
/// - `set` either persists the whole document or fails without a partial
///   write. A quota breach leaves the previous value untouched.
/// - `delete` is idempotent; deleting an absent key returns `Ok(false)`.
/// - Operations are uncoordinated: the last writer wins, and callers get
///   no conflict detection. Single-editor use is assumed.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Read the document stored at `key`, if any.
    async fn get(&self, ns: Namespace, key: &str) -> StoreResult<Option<Document>>;

    /// Write `document` at `key`, replacing any previous value.
    async fn set(&self, ns: Namespace, key: &str, document: &Document) -> StoreResult<()>;

    /// Remove the document at `key`. Returns `true` if it existed.
    async fn delete(&self, ns: Namespace, key: &str) -> StoreResult<bool>;

    /// List all keys present in `ns`, sorted.
    async fn list_keys(&self, ns: Namespace) -> StoreResult<Vec<String>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_keys_are_legacy_names() {
        assert_eq!(Namespace::Published.storage_key(), "coworking_data");
        assert_eq!(Namespace::Drafts.storage_key(), "coworking_drafts");
        assert_eq!(Namespace::Settings.storage_key(), "coworking_settings");
        assert_eq!(Namespace::Sessions.storage_key(), "coworking_auth");
    }

    #[test]
    fn display_names() {
        assert_eq!(Namespace::Published.to_string(), "published");
        assert_eq!(Namespace::Drafts.to_string(), "drafts");
    }

    #[test]
    fn all_namespaces_have_distinct_keys() {
        let mut keys: Vec<&str> = Namespace::ALL.iter().map(|n| n.storage_key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 4);
    }
}
