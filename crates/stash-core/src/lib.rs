//! stash-core - Core library for Stash
//!
//! This crate contains the secret configuration models, catalog loading, and
//! the pure view builder used by the Stash settings pages.

pub mod catalog;
pub mod error;
pub mod models;
pub mod util;
pub mod widget;

pub use catalog::SecretConfigCatalog;
pub use error::{Error, Result};
pub use models::{ConfigProperties, ConfigProperty, PluginInfo, SecretConfig, SecretConfigId};
