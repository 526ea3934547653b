use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use pagevault_types::Document;

use crate::error::StoreResult;
use crate::quota::{self, UsageReport};
use crate::traits::{DocumentStore, Namespace};

/// File-backed document store: one JSON file per namespace.
///
/// Each namespace is persisted as a single JSON object mapping keys to
/// documents, under the namespace's legacy storage key
/// (`coworking_data.json` and friends). Writes serialize the whole
/// namespace and go through a temp file plus rename, so a crashed write
/// leaves the previous file intact.
///
/// I/O is synchronous under the hood; the async surface matches the
/// [`DocumentStore`] trait so this backend is interchangeable with a
/// network-bound one.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// The data directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Current usage against the embedded capacity, measured as the sum
    /// of the namespace files' on-disk sizes.
    pub fn usage(&self) -> StoreResult<UsageReport> {
        let mut used = 0u64;
        for ns in Namespace::ALL {
            let path = self.space_path(ns);
            if let Ok(meta) = fs::metadata(&path) {
                used += meta.len();
            }
        }
        Ok(UsageReport::new(used))
    }

    fn space_path(&self, ns: Namespace) -> PathBuf {
        self.root.join(format!("{}.json", ns.storage_key()))
    }

    fn read_space(&self, ns: Namespace) -> StoreResult<BTreeMap<String, Document>> {
        let path = self.space_path(ns);
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let body = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&body)?)
    }

    fn write_space(&self, ns: Namespace, space: &BTreeMap<String, Document>) -> StoreResult<()> {
        let body = serde_json::to_string(space)?;

        // Quota check projects the new file size against the other
        // namespaces' current sizes. Checked before any byte is written.
        let mut projected = body.len() as u64;
        for other in Namespace::ALL {
            if other == ns {
                continue;
            }
            if let Ok(meta) = fs::metadata(self.space_path(other)) {
                projected += meta.len();
            }
        }
        quota::check_projected(projected)?;

        let path = self.space_path(ns);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, body)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for FileStore {
    async fn get(&self, ns: Namespace, key: &str) -> StoreResult<Option<Document>> {
        let space = self.read_space(ns)?;
        Ok(space.get(key).cloned())
    }

    async fn set(&self, ns: Namespace, key: &str, document: &Document) -> StoreResult<()> {
        let mut space = self.read_space(ns)?;
        let previous = space.insert(key.to_string(), document.clone());

        if let Err(err) = self.write_space(ns, &space) {
            // The file on disk is untouched; only our in-memory copy
            // changed. Restore it for clarity and report the failure.
            match previous {
                Some(doc) => {
                    space.insert(key.to_string(), doc);
                }
                None => {
                    space.remove(key);
                }
            }
            return Err(err);
        }
        Ok(())
    }

    async fn delete(&self, ns: Namespace, key: &str) -> StoreResult<bool> {
        let mut space = self.read_space(ns)?;
        let existed = space.remove(key).is_some();
        if existed {
            self.write_space(ns, &space)?;
        }
        Ok(existed)
    }

    async fn list_keys(&self, ns: Namespace) -> StoreResult<Vec<String>> {
        let space = self.read_space(ns)?;
        Ok(space.keys().cloned().collect())
    }
}
