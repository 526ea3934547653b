use std::sync::Arc;

use pagevault_store::{DocumentStore, Namespace};
use pagevault_types::{Document, PageId};

use crate::defaults;
use crate::error::{ContentError, ContentResult};

/// Draft/publish repository for page content.
///
/// The repository never hands callers an unusable document: a load that
/// finds nothing (or hits a failing store) degrades to the static default
/// for that page. Writes, in contrast, surface their failures — an editor
/// must know when a save did not stick.
pub struct PageRepository {
    store: Arc<dyn DocumentStore>,
}

impl PageRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Load content for `page`.
    ///
    /// With `prefer_draft`, an existing draft wins over the published
    /// document; either way the fallback chain ends at the seeded
    /// default, so this never fails.
    pub async fn load(&self, page: PageId, prefer_draft: bool) -> Document {
        if prefer_draft {
            match self.store.get(Namespace::Drafts, page.as_str()).await {
                Ok(Some(draft)) => return draft,
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!(%page, error = %err, "draft load failed, trying published");
                }
            }
        }

        match self.store.get(Namespace::Published, page.as_str()).await {
            Ok(Some(published)) => published,
            Ok(None) => defaults::default_page(page),
            Err(err) => {
                tracing::warn!(%page, error = %err, "published load failed, serving default");
                defaults::default_page(page)
            }
        }
    }

    /// Persist `document` as the draft for `page`.
    pub async fn save_draft(&self, page: PageId, document: &Document) -> ContentResult<()> {
        self.store
            .set(Namespace::Drafts, page.as_str(), document)
            .await?;
        tracing::debug!(%page, "draft saved");
        Ok(())
    }

    /// Promote the draft for `page` over its published document.
    ///
    /// Three independent store operations: read draft, write published,
    /// delete draft. Not atomic — an interruption can leave a stale draft
    /// behind, which is preferable to losing the content.
    pub async fn publish(&self, page: PageId) -> ContentResult<()> {
        let draft = self
            .store
            .get(Namespace::Drafts, page.as_str())
            .await?
            .ok_or(ContentError::NoDraft(page))?;

        self.store
            .set(Namespace::Published, page.as_str(), &draft)
            .await?;
        self.store.delete(Namespace::Drafts, page.as_str()).await?;
        tracing::info!(%page, "draft published");
        Ok(())
    }

    /// Discard the draft for `page`. Returns `true` if one existed.
    pub async fn delete_draft(&self, page: PageId) -> ContentResult<bool> {
        Ok(self.store.delete(Namespace::Drafts, page.as_str()).await?)
    }

    /// Pages that currently have a draft.
    ///
    /// Errors degrade to an empty list — the draft badge in the admin
    /// surface is informational only.
    pub async fn draft_list(&self) -> Vec<PageId> {
        match self.store.list_keys(Namespace::Drafts).await {
            Ok(keys) => keys
                .iter()
                .filter_map(|key| key.parse::<PageId>().ok())
                .collect(),
            Err(err) => {
                tracing::warn!(error = %err, "draft list failed");
                Vec::new()
            }
        }
    }

    /// Write the default document for every page that has no published
    /// content yet. Existing content is never overwritten.
    pub async fn seed_defaults(&self) -> ContentResult<()> {
        for page in PageId::ALL {
            if self
                .store
                .get(Namespace::Published, page.as_str())
                .await?
                .is_none()
            {
                self.store
                    .set(
                        Namespace::Published,
                        page.as_str(),
                        &defaults::default_page(page),
                    )
                    .await?;
                tracing::debug!(%page, "seeded default content");
            }
        }
        Ok(())
    }

    /// Delete every published document and draft, then re-seed defaults.
    pub async fn reset(&self) -> ContentResult<()> {
        for ns in [Namespace::Published, Namespace::Drafts] {
            for key in self.store.list_keys(ns).await? {
                self.store.delete(ns, &key).await?;
            }
        }
        self.seed_defaults().await
    }
}
