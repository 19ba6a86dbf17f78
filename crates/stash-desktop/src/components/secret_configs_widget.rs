//! Secret configs widget
//!
//! Renders the view built by `stash_core::widget` through the console
//! primitives. The widget owns no state: entries and plugins arrive as props
//! and every action is forwarded to the page's handlers.

use dioxus::prelude::*;
use stash_core::widget::{
    build_secret_configs_view, ActionButton, ActionKind, HeaderIconView, KeyValueList, PanelView,
    SecretConfigOperations, WidgetBody, SECRET_CONFIGS_TEST_ID, SECRET_CONFIG_INFO_TEST_ID,
};
use stash_core::{PluginInfo, SecretConfig};

use super::{CollapsiblePanel, FlashMessage, HeaderIcon, IconButton, IconGroup, KeyValuePair};

/// Page handlers bundled so a control can dispatch through
/// [`ActionButton::activate`].
#[derive(Clone, Copy, PartialEq)]
struct WidgetHandlers {
    on_edit: EventHandler<SecretConfig>,
    on_clone: EventHandler<SecretConfig>,
    on_delete: EventHandler<SecretConfig>,
}

impl SecretConfigOperations for WidgetHandlers {
    fn on_edit(&self, config: &SecretConfig) {
        self.on_edit.call(config.clone());
    }

    fn on_clone(&self, config: &SecretConfig) {
        self.on_clone.call(config.clone());
    }

    fn on_delete(&self, config: &SecretConfig) {
        self.on_delete.call(config.clone());
    }
}

#[component]
pub fn SecretConfigsWidget(
    #[props(!optional)] secret_configs: Option<Vec<SecretConfig>>,
    #[props(!optional)] plugin_infos: Option<Vec<PluginInfo>>,
    on_edit: EventHandler<SecretConfig>,
    on_clone: EventHandler<SecretConfig>,
    on_delete: EventHandler<SecretConfig>,
) -> Element {
    let handlers = WidgetHandlers {
        on_edit,
        on_clone,
        on_delete,
    };
    let view = build_secret_configs_view(secret_configs.as_deref(), plugin_infos.as_deref());

    let banner = view.banner.map(|banner| {
        rsx! {
            FlashMessage { kind: banner.kind, message: banner.message }
        }
    });

    match view.body {
        WidgetBody::Guidance(lines) => rsx! {
            div {
                {banner}
                ul {
                    "data-test-id": SECRET_CONFIG_INFO_TEST_ID,
                    for line in lines {
                        li { key: "{line}", "{line}" }
                    }
                }
            }
        },
        WidgetBody::Panels(panels) => rsx! {
            div {
                "data-test-id": SECRET_CONFIGS_TEST_ID,
                {banner}
                for (index, panel) in panels.into_iter().enumerate() {
                    {
                        let key = panel_key(index, &panel);
                        rsx! {
                            SecretConfigPanel {
                                key: "{key}",
                                data_test_id: panel.test_id(),
                                config: panel.config.clone(),
                                icon: panel.icon.clone(),
                                header: panel.header.clone(),
                                body: panel.body.clone(),
                                actions: action_states(&panel),
                                handlers,
                            }
                        }
                    }
                }
            }
        },
    }
}

/// Entry ids need not be unique, so panels are keyed by position as well.
fn panel_key(index: usize, panel: &PanelView<'_>) -> String {
    format!("{index}-{}", panel.config.id)
}

fn action_states(panel: &PanelView<'_>) -> Vec<(ActionKind, bool)> {
    panel
        .actions
        .iter()
        .map(|action| (action.kind, action.disabled))
        .collect()
}

/// Image reference and accessible name for the header icon primitive.
fn icon_props(icon: &HeaderIconView) -> (Option<String>, Option<String>) {
    match icon {
        HeaderIconView::Image { name, url } => (Some(url.clone()), Some((*name).to_string())),
        HeaderIconView::Placeholder => (None, None),
    }
}

#[component]
fn SecretConfigPanel(
    #[props(into)] data_test_id: String,
    config: SecretConfig,
    icon: HeaderIconView,
    header: KeyValueList,
    body: KeyValueList,
    actions: Vec<(ActionKind, bool)>,
    handlers: WidgetHandlers,
) -> Element {
    let (image_url, icon_name) = icon_props(&icon);

    rsx! {
        CollapsiblePanel {
            data_test_id,
            header: rsx! {
                HeaderIcon { image_url, name: icon_name }
                KeyValuePair { data: header.pairs().to_vec(), inline: header.is_inline() }
            },
            actions: rsx! {
                IconGroup {
                    for (kind, disabled) in actions {
                        {
                            let config = config.clone();
                            let control_key = kind.test_id();
                            rsx! {
                                IconButton {
                                    key: "{control_key}",
                                    kind,
                                    disabled,
                                    onclick: move |_| {
                                        let control = ActionButton { kind, disabled, config: &config };
                                        control.activate(&handlers);
                                    },
                                }
                            }
                        }
                    }
                }
            },
            KeyValuePair { data: body.pairs().to_vec(), inline: body.is_inline() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn icon_props_for_image_and_placeholder() {
        let image = HeaderIconView::Image {
            name: "Plugin Icon",
            url: "/plugins/vault.svg".to_string(),
        };
        assert_eq!(
            icon_props(&image),
            (
                Some("/plugins/vault.svg".to_string()),
                Some("Plugin Icon".to_string())
            )
        );
        assert_eq!(icon_props(&HeaderIconView::Placeholder), (None, None));
    }

    #[test]
    fn panel_keys_stay_unique_for_shared_ids() {
        let configs = vec![SecretConfig::new("s1", "a"), SecretConfig::new("s1", "b")];
        let swapped = vec![configs[1].clone(), configs[0].clone()];

        for entries in [&configs, &swapped] {
            let view = build_secret_configs_view(Some(entries.as_slice()), None);
            let keys: Vec<String> = view
                .body
                .panels()
                .iter()
                .enumerate()
                .map(|(index, panel)| panel_key(index, panel))
                .collect();
            assert_eq!(keys, vec!["0-s1".to_string(), "1-s1".to_string()]);
        }
    }

    #[test]
    fn action_states_preserve_control_order() {
        let configs = vec![SecretConfig::new("s1", "vault")];
        let view = build_secret_configs_view(Some(configs.as_slice()), None);

        assert_eq!(
            action_states(&view.body.panels()[0]),
            vec![
                (ActionKind::Edit, true),
                (ActionKind::Clone, true),
                (ActionKind::Delete, false),
            ]
        );
    }
}
