//! Main application component

use dioxus::prelude::*;

use crate::config::resolve_console_config;
use crate::state::AppState;
use crate::styles::CONSOLE_STYLES;
use crate::views::{reload_catalog, SecretConfigsPage};

/// Root application component
#[component]
pub fn App() -> Element {
    // State signals
    let secret_configs = use_signal(|| None);
    let plugin_infos = use_signal(|| None);
    let flash = use_signal(|| None);
    let config = use_signal(resolve_console_config);
    let mut catalog_loaded = use_signal(|| false);

    let state = use_context_provider(|| AppState {
        secret_configs,
        plugin_infos,
        flash,
        config,
    });

    // Load the catalog once on startup
    use_effect(move || {
        if catalog_loaded() {
            return;
        }
        catalog_loaded.set(true);
        reload_catalog(state);
    });

    rsx! {
        style { "{CONSOLE_STYLES}" }
        SecretConfigsPage {}
    }
}
