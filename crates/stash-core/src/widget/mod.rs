//! Secret configs widget view building.
//!
//! Maps the configured secret entries and the installed plugin metadata into
//! a presentational tree: an optional notice banner followed by either static
//! guidance or one collapsible panel per entry. Building is pure; the only
//! behaviour attached to the tree is forwarding action activations to caller
//! handlers (see [`SecretConfigOperations`]).

mod actions;
mod key_value;

pub use actions::{action_buttons, ActionButton, ActionKind, SecretConfigOperations};
pub use key_value::KeyValueList;

use crate::models::{PluginInfo, SecretConfig};

pub const SECRET_CONFIGS_TEST_ID: &str = "secret-configs";
pub const SECRET_CONFIG_INFO_TEST_ID: &str = "secret-config-info";
pub const SECRET_CONFIGS_GROUP_TEST_ID: &str = "secret-configs-group";

pub const NO_SECRET_PLUGIN_MESSAGE: &str = "No secret plugin installed.";

pub const GUIDANCE_LINES: [&str; 2] = [
    "Click on \"Add\" to add new secret configuration.",
    "A secret configuration can be used to access secrets from a secret management store.",
];

const PLUGIN_ICON_NAME: &str = "Plugin Icon";
const DESCRIPTION_KEY: &str = "Description";

/// Severity of a flash message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageType {
    #[default]
    Info,
    Success,
    Alert,
}

impl MessageType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Alert => "alert",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashMessageView {
    pub kind: MessageType,
    pub message: String,
}

/// Panel header icon
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderIconView {
    Image { name: &'static str, url: String },
    /// No icon available for the plugin
    Placeholder,
}

/// One collapsible panel per secret configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView<'a> {
    pub config: &'a SecretConfig,
    pub icon: HeaderIconView,
    pub header: KeyValueList,
    pub actions: [ActionButton<'a>; 3],
    pub body: KeyValueList,
}

impl PanelView<'_> {
    #[must_use]
    pub const fn test_id(&self) -> &'static str {
        SECRET_CONFIGS_GROUP_TEST_ID
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetBody<'a> {
    /// Shown when there are no entries at all
    Guidance([&'static str; 2]),
    Panels(Vec<PanelView<'a>>),
}

impl<'a> WidgetBody<'a> {
    #[must_use]
    pub const fn test_id(&self) -> &'static str {
        match self {
            Self::Guidance(_) => SECRET_CONFIG_INFO_TEST_ID,
            Self::Panels(_) => SECRET_CONFIGS_TEST_ID,
        }
    }

    #[must_use]
    pub fn panels(&self) -> &[PanelView<'a>] {
        match self {
            Self::Guidance(_) => &[],
            Self::Panels(panels) => panels,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretConfigsView<'a> {
    pub banner: Option<FlashMessageView>,
    pub body: WidgetBody<'a>,
}

/// Whether any secret plugin is installed.
#[must_use]
pub fn has_secret_plugins(plugin_infos: Option<&[PluginInfo]>) -> bool {
    plugin_infos.is_some_and(|infos| !infos.is_empty())
}

/// First plugin whose id equals `plugin_id`. No match is not an error.
#[must_use]
pub fn find_plugin_info<'a>(
    plugin_infos: Option<&'a [PluginInfo]>,
    plugin_id: &str,
) -> Option<&'a PluginInfo> {
    plugin_infos?.iter().find(|info| info.id == plugin_id)
}

#[must_use]
pub fn header_icon(plugin_info: Option<&PluginInfo>) -> HeaderIconView {
    match plugin_info.and_then(PluginInfo::image_url) {
        Some(url) => HeaderIconView::Image {
            name: PLUGIN_ICON_NAME,
            url: url.to_string(),
        },
        None => HeaderIconView::Placeholder,
    }
}

/// Compact `Id` / `Plugin Id` summary for the panel header.
#[must_use]
pub fn header_map(config: &SecretConfig) -> KeyValueList {
    KeyValueList::inline(vec![
        ("Id".to_string(), config.id.to_string()),
        ("Plugin Id".to_string(), config.plugin_id.clone()),
    ])
}

/// Full property listing with the description always last.
#[must_use]
pub fn info_for(config: &SecretConfig) -> KeyValueList {
    let mut info = KeyValueList::block(config.properties.as_map());
    info.push(DESCRIPTION_KEY, config.description.clone());
    info
}

fn panel_for<'a>(
    config: &'a SecretConfig,
    plugin_infos: Option<&'a [PluginInfo]>,
    has_plugins: bool,
) -> PanelView<'a> {
    let plugin_info = find_plugin_info(plugin_infos, &config.plugin_id);
    if plugin_info.is_none() {
        tracing::trace!(
            "No plugin info for {} (secret config {})",
            config.plugin_id,
            config.id
        );
    }

    PanelView {
        config,
        icon: header_icon(plugin_info),
        header: header_map(config),
        actions: action_buttons(config, has_plugins),
        body: info_for(config),
    }
}

/// Build the whole widget tree for the current entries and plugins.
#[must_use]
pub fn build_secret_configs_view<'a>(
    secret_configs: Option<&'a [SecretConfig]>,
    plugin_infos: Option<&'a [PluginInfo]>,
) -> SecretConfigsView<'a> {
    let has_plugins = has_secret_plugins(plugin_infos);
    let banner = (!has_plugins).then(|| FlashMessageView {
        kind: MessageType::Info,
        message: NO_SECRET_PLUGIN_MESSAGE.to_string(),
    });

    let body = match secret_configs {
        Some(configs) if !configs.is_empty() => WidgetBody::Panels(
            configs
                .iter()
                .map(|config| panel_for(config, plugin_infos, has_plugins))
                .collect(),
        ),
        _ => WidgetBody::Guidance(GUIDANCE_LINES),
    };

    SecretConfigsView { banner, body }
}
