//! Backend selection from the process environment.
//!
//! A remote document backend is used only when the feature flag is on
//! AND every connection parameter is present. A partially configured
//! remote is treated exactly like no remote at all — the embedded store
//! quietly serves everything.

use serde::{Deserialize, Serialize};

/// Feature flag: `"true"` enables the remote tier.
pub const ENV_USE_REMOTE: &str = "PAGEVAULT_USE_REMOTE";
/// Remote backend endpoint URL.
pub const ENV_REMOTE_ENDPOINT: &str = "PAGEVAULT_REMOTE_ENDPOINT";
/// Remote backend project identifier.
pub const ENV_REMOTE_PROJECT: &str = "PAGEVAULT_REMOTE_PROJECT";

/// Connection parameters for a remote document backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteConfig {
    pub endpoint: String,
    pub project: String,
}

/// Resolved storage configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoreConfig {
    use_remote_flag: bool,
    remote: Option<RemoteConfig>,
}

impl StoreConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary lookup (testable without
    /// mutating process-global state).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let use_remote_flag = lookup(ENV_USE_REMOTE)
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let remote = match (lookup(ENV_REMOTE_ENDPOINT), lookup(ENV_REMOTE_PROJECT)) {
            (Some(endpoint), Some(project)) if !endpoint.is_empty() && !project.is_empty() => {
                Some(RemoteConfig { endpoint, project })
            }
            _ => None,
        };

        Self {
            use_remote_flag,
            remote,
        }
    }

    /// An embedded-only configuration.
    pub fn embedded_only() -> Self {
        Self::default()
    }

    /// Whether the remote tier should be constructed: flag on and every
    /// parameter present.
    pub fn remote_enabled(&self) -> bool {
        self.use_remote_flag && self.remote.is_some()
    }

    /// The remote parameters, when the remote tier is enabled.
    pub fn remote(&self) -> Option<&RemoteConfig> {
        if self.use_remote_flag {
            self.remote.as_ref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<&str, &str> = pairs.iter().copied().collect();
        move |key| map.get(key).map(|v| v.to_string())
    }

    #[test]
    fn empty_env_means_embedded_only() {
        let config = StoreConfig::from_lookup(|_| None);
        assert!(!config.remote_enabled());
        assert!(config.remote().is_none());
    }

    #[test]
    fn fully_configured_remote_is_enabled() {
        let config = StoreConfig::from_lookup(lookup_from(&[
            (ENV_USE_REMOTE, "true"),
            (ENV_REMOTE_ENDPOINT, "https://api.example.com"),
            (ENV_REMOTE_PROJECT, "site-prod"),
        ]));
        assert!(config.remote_enabled());
        assert_eq!(config.remote().unwrap().project, "site-prod");
    }

    #[test]
    fn flag_without_parameters_is_off() {
        let config = StoreConfig::from_lookup(lookup_from(&[(ENV_USE_REMOTE, "true")]));
        assert!(!config.remote_enabled());
    }

    #[test]
    fn parameters_without_flag_are_off() {
        let config = StoreConfig::from_lookup(lookup_from(&[
            (ENV_REMOTE_ENDPOINT, "https://api.example.com"),
            (ENV_REMOTE_PROJECT, "site-prod"),
        ]));
        assert!(!config.remote_enabled());
        assert!(config.remote().is_none());
    }

    #[test]
    fn missing_one_parameter_disables_remote() {
        let config = StoreConfig::from_lookup(lookup_from(&[
            (ENV_USE_REMOTE, "true"),
            (ENV_REMOTE_ENDPOINT, "https://api.example.com"),
        ]));
        assert!(!config.remote_enabled());
    }

    #[test]
    fn empty_parameter_counts_as_missing() {
        let config = StoreConfig::from_lookup(lookup_from(&[
            (ENV_USE_REMOTE, "true"),
            (ENV_REMOTE_ENDPOINT, ""),
            (ENV_REMOTE_PROJECT, "site-prod"),
        ]));
        assert!(!config.remote_enabled());
    }

    #[test]
    fn flag_is_case_insensitive() {
        let config = StoreConfig::from_lookup(lookup_from(&[
            (ENV_USE_REMOTE, "TRUE"),
            (ENV_REMOTE_ENDPOINT, "https://api.example.com"),
            (ENV_REMOTE_PROJECT, "p"),
        ]));
        assert!(config.remote_enabled());
    }
}
