use std::sync::Arc;

use pagevault_store::{DocumentStore, Namespace};
use pagevault_types::{get_path, set_path, Document};

use crate::defaults;
use crate::error::ContentResult;

/// Storage key for the settings singleton.
const SETTINGS_KEY: &str = "site";

/// Repository for the site-wide settings document.
///
/// Settings have no draft/publish split: a save writes the whole document
/// directly. Loads fall back to the default settings, so callers always
/// get a usable document.
pub struct SettingsRepository {
    store: Arc<dyn DocumentStore>,
}

impl SettingsRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Load the settings document, falling back to defaults.
    pub async fn load(&self) -> Document {
        match self.store.get(Namespace::Settings, SETTINGS_KEY).await {
            Ok(Some(settings)) => settings,
            Ok(None) => defaults::default_settings(),
            Err(err) => {
                tracing::warn!(error = %err, "settings load failed, serving defaults");
                defaults::default_settings()
            }
        }
    }

    /// Persist `settings` wholesale.
    pub async fn save(&self, settings: &Document) -> ContentResult<()> {
        self.store
            .set(Namespace::Settings, SETTINGS_KEY, settings)
            .await?;
        tracing::debug!("settings saved");
        Ok(())
    }

    /// Write the default settings if nothing is stored yet.
    pub async fn seed_default(&self) -> ContentResult<()> {
        if self
            .store
            .get(Namespace::Settings, SETTINGS_KEY)
            .await?
            .is_none()
        {
            self.save(&defaults::default_settings()).await?;
            tracing::debug!("seeded default settings");
        }
        Ok(())
    }

    /// Drop any stored settings and restore the defaults.
    pub async fn reset(&self) -> ContentResult<()> {
        self.store.delete(Namespace::Settings, SETTINGS_KEY).await?;
        self.save(&defaults::default_settings()).await
    }
}

/// In-memory editing session over a settings document.
///
/// The editor holds a pending copy and the last persisted copy; dirtiness
/// is structural inequality between the two. All mutation goes through
/// the dotted-path mutator. Persistence stays with
/// [`SettingsRepository`] — after a successful save, call
/// [`SettingsEditor::mark_saved`].
#[derive(Clone, Debug)]
pub struct SettingsEditor {
    pending: Document,
    persisted: Document,
}

impl SettingsEditor {
    /// Start an editing session over the currently persisted settings.
    pub fn new(current: Document) -> Self {
        Self {
            pending: current.clone(),
            persisted: current,
        }
    }

    /// Apply one field edit to the pending copy.
    pub fn update(&mut self, path: &str, value: Document) {
        self.pending = set_path(&self.pending, path, value);
    }

    /// Read a field from the pending copy.
    pub fn get(&self, path: &str) -> Option<&Document> {
        get_path(&self.pending, path)
    }

    /// The pending document, to hand to [`SettingsRepository::save`].
    pub fn pending(&self) -> &Document {
        &self.pending
    }

    /// Whether the pending copy differs from the last persisted one.
    pub fn is_dirty(&self) -> bool {
        self.pending != self.persisted
    }

    /// Record that the pending copy has been persisted.
    pub fn mark_saved(&mut self) {
        self.persisted = self.pending.clone();
    }

    /// Discard pending edits, returning to the persisted copy.
    pub fn reset(&mut self) {
        self.pending = self.persisted.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagevault_store::MemoryStore;
    use serde_json::json;

    fn repo() -> SettingsRepository {
        SettingsRepository::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn load_unseeded_returns_defaults() {
        let repo = repo();
        assert_eq!(repo.load().await, defaults::default_settings());
    }

    #[tokio::test]
    async fn save_then_load_roundtrip() {
        let repo = repo();
        let custom = json!({"branding": {"siteName": "New Name"}});
        repo.save(&custom).await.unwrap();
        assert_eq!(repo.load().await, custom);
    }

    #[tokio::test]
    async fn seed_is_idempotent_and_preserves_custom_settings() {
        let repo = repo();
        repo.seed_default().await.unwrap();
        assert_eq!(repo.load().await, defaults::default_settings());

        let custom = json!({"branding": {"siteName": "Mine"}});
        repo.save(&custom).await.unwrap();
        repo.seed_default().await.unwrap();
        assert_eq!(repo.load().await, custom);
    }

    #[tokio::test]
    async fn reset_restores_defaults() {
        let repo = repo();
        repo.save(&json!({"branding": {}})).await.unwrap();
        repo.reset().await.unwrap();
        assert_eq!(repo.load().await, defaults::default_settings());
    }

    #[test]
    fn editor_tracks_dirtiness_structurally() {
        let mut editor = SettingsEditor::new(defaults::default_settings());
        assert!(!editor.is_dirty());

        editor.update("branding.siteName", json!("Renamed"));
        assert!(editor.is_dirty());
        assert_eq!(editor.get("branding.siteName"), Some(&json!("Renamed")));

        // Writing the original value back clears dirtiness: comparison is
        // structural, not edit-counting.
        editor.update("branding.siteName", json!("The Coworking Space"));
        assert!(!editor.is_dirty());
    }

    #[test]
    fn editor_reset_discards_pending_edits() {
        let mut editor = SettingsEditor::new(defaults::default_settings());
        editor.update("layout.maxTeamColumns", json!(5));
        assert!(editor.is_dirty());

        editor.reset();
        assert!(!editor.is_dirty());
        assert_eq!(editor.get("layout.maxTeamColumns"), Some(&json!(3)));
    }

    #[test]
    fn editor_mark_saved_clears_dirtiness() {
        let mut editor = SettingsEditor::new(json!({}));
        editor.update("features.enablePayments", json!(true));
        assert!(editor.is_dirty());

        editor.mark_saved();
        assert!(!editor.is_dirty());
        assert_eq!(editor.get("features.enablePayments"), Some(&json!(true)));
    }

    #[test]
    fn editor_creates_missing_sections() {
        let mut editor = SettingsEditor::new(json!({}));
        editor.update("branding.colors.primary", json!("#000"));
        assert_eq!(
            editor.pending(),
            &json!({"branding": {"colors": {"primary": "#000"}}})
        );
    }
}
