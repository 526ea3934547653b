use std::path::Path;
use std::sync::Arc;

use pagevault_auth::{spawn_refresh_task, CredentialTable, SessionGate};
use pagevault_content::{backup, ExportBundle, PageRepository, SettingsRepository};
use pagevault_store::{
    DocumentStore, FileStore, MemoryStore, StoreConfig, TieredStore,
};
use pagevault_types::{Document, PageId, Session, UserIdentity};

use crate::error::SiteResult;

/// High-level Pagevault site API.
///
/// Owns the storage chain and the repositories over it. Opening a site
/// seeds default content and settings for anything not yet present, so a
/// freshly opened site is always fully readable.
pub struct Site {
    store: Arc<dyn DocumentStore>,
    pages: PageRepository,
    settings: SettingsRepository,
    gate: Arc<SessionGate>,
}

impl Site {
    /// Open a file-backed site at `data_dir` with no remote tier.
    pub async fn open(data_dir: impl AsRef<Path>) -> SiteResult<Self> {
        let embedded: Arc<dyn DocumentStore> = Arc::new(FileStore::open(data_dir.as_ref())?);
        Self::with_store_chain(embedded, StoreConfig::embedded_only(), None).await
    }

    /// Open a file-backed site, optionally fronted by a remote backend.
    ///
    /// The remote tier is used only when `config` enables it AND a
    /// backend is supplied; otherwise the embedded store serves alone.
    pub async fn open_with_remote(
        data_dir: impl AsRef<Path>,
        config: StoreConfig,
        remote: Option<Arc<dyn DocumentStore>>,
    ) -> SiteResult<Self> {
        let embedded: Arc<dyn DocumentStore> = Arc::new(FileStore::open(data_dir.as_ref())?);
        Self::with_store_chain(embedded, config, remote).await
    }

    /// An in-memory site, for tests and throwaway embedding.
    pub async fn in_memory() -> SiteResult<Self> {
        let embedded: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
        Self::with_store_chain(embedded, StoreConfig::embedded_only(), None).await
    }

    async fn with_store_chain(
        embedded: Arc<dyn DocumentStore>,
        config: StoreConfig,
        remote: Option<Arc<dyn DocumentStore>>,
    ) -> SiteResult<Self> {
        let store: Arc<dyn DocumentStore> = match remote {
            Some(remote) if config.remote_enabled() => {
                tracing::info!("storage chain: remote first, embedded fallback");
                Arc::new(TieredStore::new(vec![remote, embedded]))
            }
            _ => {
                tracing::debug!("storage chain: embedded only");
                embedded
            }
        };

        let pages = PageRepository::new(store.clone());
        let settings = SettingsRepository::new(store.clone());
        let gate = Arc::new(SessionGate::new(store.clone(), CredentialTable::demo()));

        pages.seed_defaults().await?;
        settings.seed_default().await?;

        Ok(Self {
            store,
            pages,
            settings,
            gate,
        })
    }

    // ---- Page content ----

    /// Published (or, with `prefer_draft`, in-progress) content for `page`.
    pub async fn load_page(&self, page: PageId, prefer_draft: bool) -> Document {
        self.pages.load(page, prefer_draft).await
    }

    pub async fn save_draft(&self, page: PageId, document: &Document) -> SiteResult<()> {
        self.pages.save_draft(page, document).await?;
        Ok(())
    }

    pub async fn publish(&self, page: PageId) -> SiteResult<()> {
        self.pages.publish(page).await?;
        Ok(())
    }

    /// Discard the draft for `page`. Returns `true` if one existed.
    pub async fn revert(&self, page: PageId) -> SiteResult<bool> {
        Ok(self.pages.delete_draft(page).await?)
    }

    /// Pages with an unpublished draft.
    pub async fn drafts(&self) -> Vec<PageId> {
        self.pages.draft_list().await
    }

    // ---- Settings ----

    pub async fn load_settings(&self) -> Document {
        self.settings.load().await
    }

    pub async fn save_settings(&self, settings: &Document) -> SiteResult<()> {
        self.settings.save(settings).await?;
        Ok(())
    }

    // ---- Backup ----

    pub async fn export(&self) -> SiteResult<ExportBundle> {
        Ok(backup::export_data(&self.pages, &self.settings).await?)
    }

    pub async fn import(&self, bundle: &ExportBundle) -> SiteResult<()> {
        backup::import_data(&self.pages, &self.settings, bundle).await?;
        Ok(())
    }

    /// Drop all content, drafts, and settings, then re-seed defaults.
    pub async fn reset(&self) -> SiteResult<()> {
        self.pages.reset().await?;
        self.settings.reset().await?;
        Ok(())
    }

    // ---- Sessions ----

    pub async fn login(&self, email: &str, password: &str) -> SiteResult<Session> {
        Ok(self.gate.login(email, password).await?)
    }

    pub async fn logout(&self) {
        self.gate.logout().await
    }

    pub async fn current_user(&self) -> Option<UserIdentity> {
        self.gate.current_user().await
    }

    pub async fn is_authenticated(&self) -> bool {
        self.gate.is_authenticated().await
    }

    /// Start the periodic session refresh loop for this site's gate.
    pub fn spawn_session_refresh(&self) -> tokio::task::JoinHandle<()> {
        spawn_refresh_task(self.gate.clone())
    }

    // ---- Accessors ----

    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.store
    }

    pub fn pages(&self) -> &PageRepository {
        &self.pages
    }

    pub fn settings(&self) -> &SettingsRepository {
        &self.settings
    }

    pub fn gate(&self) -> &SessionGate {
        &self.gate
    }
}
