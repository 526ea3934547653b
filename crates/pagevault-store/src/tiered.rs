use std::sync::Arc;

use async_trait::async_trait;

use pagevault_types::Document;

use crate::error::StoreResult;
use crate::traits::{DocumentStore, Namespace};

/// Ordered multi-backend resolver: first success wins.
///
/// Backends are tried in order. A failing tier logs a warning and falls
/// through to the next one; the caller only sees the error of the final
/// tier. On reads, a tier that succeeds but holds no value also falls
/// through, so a remote-first setup degrades transparently to the
/// embedded store when the remote is empty, misconfigured, or down.
///
/// Failures are not retried and fallbacks are not escalated — this is
/// the deliberate "try remote, quietly use local" policy.
pub struct TieredStore {
    tiers: Vec<Arc<dyn DocumentStore>>,
}

impl TieredStore {
    /// Build a resolver over `tiers`, tried front to back.
    ///
    /// Panics if `tiers` is empty; there must always be a final backend
    /// whose result is authoritative.
    pub fn new(tiers: Vec<Arc<dyn DocumentStore>>) -> Self {
        assert!(!tiers.is_empty(), "TieredStore requires at least one backend");
        Self { tiers }
    }

    /// Number of backends in the chain.
    pub fn tier_count(&self) -> usize {
        self.tiers.len()
    }

    fn last(&self) -> usize {
        self.tiers.len() - 1
    }
}

#[async_trait]
impl DocumentStore for TieredStore {
    async fn get(&self, ns: Namespace, key: &str) -> StoreResult<Option<Document>> {
        let last = self.last();
        for (i, tier) in self.tiers.iter().enumerate() {
            match tier.get(ns, key).await {
                Ok(Some(doc)) => return Ok(Some(doc)),
                Ok(None) if i == last => return Ok(None),
                Ok(None) => {}
                Err(err) if i == last => return Err(err),
                Err(err) => {
                    tracing::warn!(tier = i, %ns, key, error = %err, "store tier failed on get, falling back");
                }
            }
        }
        Ok(None)
    }

    async fn set(&self, ns: Namespace, key: &str, document: &Document) -> StoreResult<()> {
        let last = self.last();
        for (i, tier) in self.tiers.iter().enumerate() {
            match tier.set(ns, key, document).await {
                Ok(()) => return Ok(()),
                Err(err) if i == last => return Err(err),
                Err(err) => {
                    tracing::warn!(tier = i, %ns, key, error = %err, "store tier failed on set, falling back");
                }
            }
        }
        Ok(())
    }

    async fn delete(&self, ns: Namespace, key: &str) -> StoreResult<bool> {
        let last = self.last();
        for (i, tier) in self.tiers.iter().enumerate() {
            match tier.delete(ns, key).await {
                Ok(existed) => return Ok(existed),
                Err(err) if i == last => return Err(err),
                Err(err) => {
                    tracing::warn!(tier = i, %ns, key, error = %err, "store tier failed on delete, falling back");
                }
            }
        }
        Ok(false)
    }

    async fn list_keys(&self, ns: Namespace) -> StoreResult<Vec<String>> {
        let last = self.last();
        for (i, tier) in self.tiers.iter().enumerate() {
            match tier.list_keys(ns).await {
                Ok(keys) => return Ok(keys),
                Err(err) if i == last => return Err(err),
                Err(err) => {
                    tracing::warn!(tier = i, %ns, error = %err, "store tier failed on list, falling back");
                }
            }
        }
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::memory::MemoryStore;
    use serde_json::json;

    /// A backend that fails every operation, standing in for an
    /// unreachable or unconfigured remote.
    struct FailingStore;

    #[async_trait]
    impl DocumentStore for FailingStore {
        async fn get(&self, _ns: Namespace, _key: &str) -> StoreResult<Option<Document>> {
            Err(StoreError::NotConfigured)
        }
        async fn set(&self, _ns: Namespace, _key: &str, _doc: &Document) -> StoreResult<()> {
            Err(StoreError::NotConfigured)
        }
        async fn delete(&self, _ns: Namespace, _key: &str) -> StoreResult<bool> {
            Err(StoreError::NotConfigured)
        }
        async fn list_keys(&self, _ns: Namespace) -> StoreResult<Vec<String>> {
            Err(StoreError::NotConfigured)
        }
    }

    fn remote_then_local() -> (TieredStore, Arc<MemoryStore>) {
        let local = Arc::new(MemoryStore::new());
        let tiered = TieredStore::new(vec![Arc::new(FailingStore), local.clone()]);
        (tiered, local)
    }

    #[tokio::test]
    async fn failing_tier_falls_back_on_set_and_get() {
        let (tiered, local) = remote_then_local();
        let doc = json!({"hero": {"title": "X"}});

        tiered.set(Namespace::Drafts, "home", &doc).await.unwrap();
        // The write landed in the embedded tier.
        assert_eq!(
            local.get(Namespace::Drafts, "home").await.unwrap(),
            Some(doc.clone())
        );
        assert_eq!(
            tiered.get(Namespace::Drafts, "home").await.unwrap(),
            Some(doc)
        );
    }

    #[tokio::test]
    async fn empty_first_tier_falls_through_on_get() {
        let first = Arc::new(MemoryStore::new());
        let second = Arc::new(MemoryStore::new());
        second
            .set(Namespace::Published, "home", &json!({"from": "second"}))
            .await
            .unwrap();

        let tiered = TieredStore::new(vec![first, second]);
        let read = tiered.get(Namespace::Published, "home").await.unwrap();
        assert_eq!(read, Some(json!({"from": "second"})));
    }

    #[tokio::test]
    async fn first_tier_value_shadows_second() {
        let first = Arc::new(MemoryStore::new());
        let second = Arc::new(MemoryStore::new());
        first
            .set(Namespace::Published, "home", &json!({"from": "first"}))
            .await
            .unwrap();
        second
            .set(Namespace::Published, "home", &json!({"from": "second"}))
            .await
            .unwrap();

        let tiered = TieredStore::new(vec![first, second]);
        let read = tiered.get(Namespace::Published, "home").await.unwrap();
        assert_eq!(read, Some(json!({"from": "first"})));
    }

    #[tokio::test]
    async fn all_tiers_failing_surfaces_last_error() {
        let tiered = TieredStore::new(vec![Arc::new(FailingStore), Arc::new(FailingStore)]);
        let err = tiered.get(Namespace::Published, "home").await.unwrap_err();
        assert!(matches!(err, StoreError::NotConfigured));
    }

    #[tokio::test]
    async fn missing_everywhere_is_none() {
        let (tiered, _local) = remote_then_local();
        assert!(tiered
            .get(Namespace::Published, "home")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn delete_falls_back() {
        let (tiered, local) = remote_then_local();
        local
            .set(Namespace::Drafts, "home", &json!({}))
            .await
            .unwrap();
        assert!(tiered.delete(Namespace::Drafts, "home").await.unwrap());
    }

    #[tokio::test]
    async fn list_keys_falls_back() {
        let (tiered, local) = remote_then_local();
        local
            .set(Namespace::Drafts, "about", &json!({}))
            .await
            .unwrap();
        assert_eq!(
            tiered.list_keys(Namespace::Drafts).await.unwrap(),
            vec!["about"]
        );
    }

    #[test]
    #[should_panic(expected = "at least one backend")]
    fn empty_tier_list_panics() {
        let _ = TieredStore::new(Vec::new());
    }

    #[test]
    fn tier_count() {
        let (tiered, _) = remote_then_local();
        assert_eq!(tiered.tier_count(), 2);
    }
}
