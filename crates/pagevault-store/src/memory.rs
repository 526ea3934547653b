use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use pagevault_types::Document;

use crate::error::{StoreError, StoreResult};
use crate::quota::{self, UsageReport};
use crate::traits::{DocumentStore, Namespace};

/// In-memory, HashMap-based document store.
///
/// Intended for tests and embedding. All documents are held in memory
/// behind a `RwLock` and cloned on read/write. The embedded quota applies:
/// a write that would push total usage past the soft limit fails without
/// touching the previous value.
pub struct MemoryStore {
    spaces: RwLock<HashMap<Namespace, HashMap<String, Document>>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            spaces: RwLock::new(HashMap::new()),
        }
    }

    /// Number of documents across all namespaces.
    pub fn len(&self) -> usize {
        self.spaces
            .read()
            .expect("lock poisoned")
            .values()
            .map(|space| space.len())
            .sum()
    }

    /// Returns `true` if the store holds no documents.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove all documents from all namespaces.
    pub fn clear(&self) {
        self.spaces.write().expect("lock poisoned").clear();
    }

    /// Current usage against the embedded capacity.
    pub fn usage(&self) -> StoreResult<UsageReport> {
        let spaces = self.read_lock()?;
        let mut used = 0u64;
        for space in spaces.values() {
            for (key, doc) in space {
                used += quota::entry_size(key, doc)?;
            }
        }
        Ok(UsageReport::new(used))
    }

    fn read_lock(
        &self,
    ) -> StoreResult<std::sync::RwLockReadGuard<'_, HashMap<Namespace, HashMap<String, Document>>>>
    {
        self.spaces
            .read()
            .map_err(|e| StoreError::Backend(format!("lock poisoned: {e}")))
    }

    fn write_lock(
        &self,
    ) -> StoreResult<std::sync::RwLockWriteGuard<'_, HashMap<Namespace, HashMap<String, Document>>>>
    {
        self.spaces
            .write()
            .map_err(|e| StoreError::Backend(format!("lock poisoned: {e}")))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, ns: Namespace, key: &str) -> StoreResult<Option<Document>> {
        let spaces = self.read_lock()?;
        Ok(spaces.get(&ns).and_then(|space| space.get(key)).cloned())
    }

    async fn set(&self, ns: Namespace, key: &str, document: &Document) -> StoreResult<()> {
        let new_size = quota::entry_size(key, document)?;

        let mut spaces = self.write_lock()?;

        // Projected usage: current total minus the entry being replaced,
        // plus the incoming entry.
        let mut projected = new_size;
        for (space_ns, space) in spaces.iter() {
            for (existing_key, doc) in space {
                if *space_ns == ns && existing_key == key {
                    continue;
                }
                projected += quota::entry_size(existing_key, doc)?;
            }
        }
        quota::check_projected(projected)?;

        spaces
            .entry(ns)
            .or_default()
            .insert(key.to_string(), document.clone());
        Ok(())
    }

    async fn delete(&self, ns: Namespace, key: &str) -> StoreResult<bool> {
        let mut spaces = self.write_lock()?;
        Ok(spaces
            .get_mut(&ns)
            .map(|space| space.remove(key).is_some())
            .unwrap_or(false))
    }

    async fn list_keys(&self, ns: Namespace) -> StoreResult<Vec<String>> {
        let spaces = self.read_lock()?;
        let mut keys: Vec<String> = spaces
            .get(&ns)
            .map(|space| space.keys().cloned().collect())
            .unwrap_or_default();
        keys.sort();
        Ok(keys)
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("document_count", &self.len())
            .finish()
    }
}
