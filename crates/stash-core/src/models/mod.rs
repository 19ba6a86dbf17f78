//! Data models for Stash

mod plugin_info;
mod secret_config;

pub use plugin_info::PluginInfo;
pub use secret_config::{
    ConfigProperties, ConfigProperty, SecretConfig, SecretConfigId, SECURE_VALUE_MASK,
};
