//! Secret management page
//!
//! Page controller around the secret configs widget. It owns the catalog
//! signals and decides what edit, clone, and delete mean for this console.

use dioxus::prelude::*;
use stash_core::catalog::load_catalog_from_path;
use stash_core::widget::{has_secret_plugins, MessageType};
use stash_core::SecretConfig;

use crate::components::{FlashMessage, SecretConfigsWidget};
use crate::state::AppState;

/// Load the configured catalog into page state, reporting failures inline.
pub fn reload_catalog(mut state: AppState) {
    let path = state.config.read().catalog_path.clone();
    match load_catalog_from_path(&path) {
        Ok(catalog) => {
            let count = catalog.secret_configs().map_or(0, <[_]>::len);
            tracing::info!("Loaded {} secret configs from {}", count, path.display());
            state.apply_catalog(catalog);
            state.flash.set(None);
        }
        Err(e) => {
            tracing::error!("Failed to load secret configs: {}", e);
            state.show_flash(
                MessageType::Alert,
                format!("Could not load secret configurations: {e}"),
            );
        }
    }
}

#[component]
pub fn SecretConfigsPage() -> Element {
    let mut state = use_context::<AppState>();
    let secret_configs = (state.secret_configs)();
    let plugin_infos = (state.plugin_infos)();
    let flash = (state.flash)();
    let can_add = has_secret_plugins(plugin_infos.as_deref());

    let on_edit = move |config: SecretConfig| {
        tracing::info!("Edit requested for secret config {}", config.id);
        state.show_flash(
            MessageType::Info,
            format!("Editing secret configuration '{}'.", config.id),
        );
    };

    let on_clone = move |config: SecretConfig| {
        tracing::info!("Clone requested for secret config {}", config.id);
        state.show_flash(
            MessageType::Info,
            format!("Cloning secret configuration '{}'.", config.id),
        );
    };

    let on_delete = move |config: SecretConfig| {
        if state.remove_secret_config(&config) {
            tracing::info!("Deleted secret config: {}", config.id);
            state.show_flash(
                MessageType::Success,
                format!("The secret configuration '{}' was deleted successfully!", config.id),
            );
        } else {
            tracing::warn!("Secret config {} was already gone", config.id);
        }
    };

    let on_add = move |_| {
        tracing::info!("Add requested for secret config");
        state.show_flash(MessageType::Info, "Adding a new secret configuration.");
    };

    rsx! {
        div {
            class: "page",

            div {
                class: "page-header",
                h1 { class: "page-title", "Secret Management" }
                div {
                    class: "page-actions",
                    button {
                        r#type: "button",
                        class: "ui-button",
                        onclick: move |_| reload_catalog(state),
                        "Reload"
                    }
                    button {
                        r#type: "button",
                        class: "ui-button ui-button--primary",
                        "data-test-id": "secret-config-add",
                        disabled: !can_add,
                        onclick: on_add,
                        "Add"
                    }
                }
            }

            if let Some(flash) = flash {
                FlashMessage { kind: flash.kind, message: flash.message }
            }

            SecretConfigsWidget {
                secret_configs,
                plugin_infos,
                on_edit,
                on_clone,
                on_delete,
            }
        }
    }
}
