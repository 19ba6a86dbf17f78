//! Plugin metadata model

use serde::{Deserialize, Serialize};

use crate::util::normalize_text_option;

/// Descriptive record for an installed secret plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginInfo {
    /// Plugin identifier, matched against `SecretConfig::plugin_id`
    pub id: String,
    /// Optional icon reference
    #[serde(default)]
    pub image_url: Option<String>,
}

impl PluginInfo {
    /// Create plugin metadata without an icon
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            image_url: None,
        }
    }

    /// Attach an icon reference
    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// The icon reference, if one is present and non-blank.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        normalize_text_option(self.image_url.as_deref())
    }
}
