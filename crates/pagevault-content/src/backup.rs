//! Whole-site backup bundles.
//!
//! Export collects the published content for every page plus the site
//! settings. Import replays each page through the normal draft → publish
//! path, then overwrites settings. A failure mid-import aborts the
//! remaining pages but leaves the already-imported ones in place — there
//! is no compensating transaction.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pagevault_types::{Document, PageId};

use crate::error::ContentResult;
use crate::repository::PageRepository;
use crate::settings::SettingsRepository;

/// Bundle format version.
pub const BACKUP_VERSION: &str = "1.0";

/// A portable snapshot of the whole site.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportBundle {
    pub pages: BTreeMap<PageId, Document>,
    pub settings: Document,
    pub export_date: DateTime<Utc>,
    pub version: String,
}

/// Collect the published content of every page plus settings.
pub async fn export_data(
    pages: &PageRepository,
    settings: &SettingsRepository,
) -> ContentResult<ExportBundle> {
    let mut exported = BTreeMap::new();
    for page in PageId::ALL {
        exported.insert(page, pages.load(page, false).await);
    }

    Ok(ExportBundle {
        pages: exported,
        settings: settings.load().await,
        export_date: Utc::now(),
        version: BACKUP_VERSION.to_string(),
    })
}

/// Replay a bundle into the repositories.
///
/// Each page is written as a draft and immediately published; settings
/// are overwritten last. The `?` on each step is the abort point: pages
/// imported before a failure stay imported.
pub async fn import_data(
    pages: &PageRepository,
    settings: &SettingsRepository,
    bundle: &ExportBundle,
) -> ContentResult<()> {
    for (page, content) in &bundle.pages {
        pages.save_draft(*page, content).await?;
        pages.publish(*page).await?;
    }
    settings.save(&bundle.settings).await?;
    tracing::info!(
        pages = bundle.pages.len(),
        version = %bundle.version,
        "backup imported"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults;
    use pagevault_store::MemoryStore;
    use serde_json::json;
    use std::sync::Arc;

    fn repos() -> (PageRepository, SettingsRepository) {
        let store = Arc::new(MemoryStore::new());
        (
            PageRepository::new(store.clone()),
            SettingsRepository::new(store),
        )
    }

    #[tokio::test]
    async fn export_covers_every_page_and_settings() {
        let (pages, settings) = repos();
        pages.seed_defaults().await.unwrap();

        let bundle = export_data(&pages, &settings).await.unwrap();
        assert_eq!(bundle.pages.len(), PageId::ALL.len());
        assert_eq!(bundle.settings, defaults::default_settings());
        assert_eq!(bundle.version, BACKUP_VERSION);
    }

    #[tokio::test]
    async fn export_reflects_published_not_draft_content() {
        let (pages, settings) = repos();
        pages
            .save_draft(PageId::Home, &json!({"draft": "only"}))
            .await
            .unwrap();

        let bundle = export_data(&pages, &settings).await.unwrap();
        // The unpublished draft is not part of the bundle.
        assert_eq!(
            bundle.pages[&PageId::Home],
            defaults::default_page(PageId::Home)
        );
    }

    #[tokio::test]
    async fn import_into_fresh_store_restores_content() {
        let (source_pages, source_settings) = repos();
        source_pages
            .save_draft(PageId::Home, &json!({"hero": {"title": "Backed up"}}))
            .await
            .unwrap();
        source_pages.publish(PageId::Home).await.unwrap();
        source_settings
            .save(&json!({"branding": {"siteName": "Backed up site"}}))
            .await
            .unwrap();

        let bundle = export_data(&source_pages, &source_settings).await.unwrap();

        let (target_pages, target_settings) = repos();
        import_data(&target_pages, &target_settings, &bundle)
            .await
            .unwrap();

        assert_eq!(
            target_pages.load(PageId::Home, false).await,
            json!({"hero": {"title": "Backed up"}})
        );
        assert_eq!(
            target_settings.load().await,
            json!({"branding": {"siteName": "Backed up site"}})
        );
    }

    #[tokio::test]
    async fn import_leaves_no_stray_drafts() {
        let (pages, settings) = repos();
        let bundle = ExportBundle {
            pages: BTreeMap::from([(PageId::News, json!({"title": "N"}))]),
            settings: json!({}),
            export_date: Utc::now(),
            version: BACKUP_VERSION.to_string(),
        };

        import_data(&pages, &settings, &bundle).await.unwrap();
        assert!(pages.draft_list().await.is_empty());
        assert_eq!(pages.load(PageId::News, false).await, json!({"title": "N"}));
    }

    #[tokio::test]
    async fn bundle_serde_roundtrip() {
        let (pages, settings) = repos();
        pages.seed_defaults().await.unwrap();
        let bundle = export_data(&pages, &settings).await.unwrap();

        let json = serde_json::to_string(&bundle).unwrap();
        let back: ExportBundle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bundle);
    }
}
