//! Application state management
//!
//! Page state shared through a Dioxus context provider. The secret configs
//! widget only reads it; the page controller owns every mutation.

use dioxus::prelude::*;

use stash_core::widget::{FlashMessageView, MessageType};
use stash_core::{PluginInfo, SecretConfig, SecretConfigCatalog};

use crate::config::ConsoleConfig;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Configured secret stores, `None` until a catalog provides them
    pub secret_configs: Signal<Option<Vec<SecretConfig>>>,
    /// Installed secret plugins
    pub plugin_infos: Signal<Option<Vec<PluginInfo>>>,
    /// Outcome of the most recent page operation
    pub flash: Signal<Option<FlashMessageView>>,
    pub config: Signal<ConsoleConfig>,
}

impl AppState {
    /// Replace both collections with a freshly loaded catalog.
    pub fn apply_catalog(&mut self, catalog: SecretConfigCatalog) {
        self.secret_configs.set(catalog.secret_configs);
        self.plugin_infos.set(catalog.plugin_infos);
    }

    pub fn show_flash(&mut self, kind: MessageType, message: impl Into<String>) {
        self.flash.set(Some(FlashMessageView {
            kind,
            message: message.into(),
        }));
    }

    /// Drop the acted-on entry from the page. Returns whether it was present.
    pub fn remove_secret_config(&mut self, target: &SecretConfig) -> bool {
        remove_entry(&mut self.secret_configs.write(), target)
    }
}

/// Remove the first entry equal to `target`, leaving entries that only share
/// its id in place.
pub fn remove_entry(configs: &mut Option<Vec<SecretConfig>>, target: &SecretConfig) -> bool {
    let Some(configs) = configs.as_mut() else {
        return false;
    };
    let Some(position) = configs.iter().position(|config| config == target) else {
        return false;
    };
    configs.remove(position);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn remove_entry_drops_matching_entry() {
        let mut configs = Some(vec![
            SecretConfig::new("s1", "vault"),
            SecretConfig::new("s2", "vault"),
        ]);

        assert!(remove_entry(&mut configs, &SecretConfig::new("s1", "vault")));
        assert_eq!(configs, Some(vec![SecretConfig::new("s2", "vault")]));
    }

    #[test]
    fn remove_entry_keeps_other_entries_with_same_id() {
        let mut configs = Some(vec![
            SecretConfig::new("s1", "a"),
            SecretConfig::new("s1", "b"),
            SecretConfig::new("s1", "a"),
        ]);

        assert!(remove_entry(&mut configs, &SecretConfig::new("s1", "a")));
        assert_eq!(
            configs,
            Some(vec![SecretConfig::new("s1", "b"), SecretConfig::new("s1", "a")])
        );
    }

    #[test]
    fn remove_entry_reports_missing_entry() {
        let mut configs = Some(vec![SecretConfig::new("s1", "vault")]);
        assert!(!remove_entry(&mut configs, &SecretConfig::new("s1", "other")));
        assert!(!remove_entry(&mut None, &SecretConfig::new("s1", "vault")));
    }
}
