//! Secret configuration model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rendered in place of the value of an encrypted property.
pub const SECURE_VALUE_MASK: &str = "********";

/// Identifier of a secret configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecretConfigId(String);

impl SecretConfigId {
    /// Create an ID from any string-like value
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SecretConfigId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SecretConfigId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A named plugin property of a secret configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigProperty {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encrypted_value: Option<String>,
}

impl ConfigProperty {
    /// Plain-text property
    #[must_use]
    pub fn plain(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
            encrypted_value: None,
        }
    }

    /// Property whose value is stored encrypted
    #[must_use]
    pub fn secure(key: impl Into<String>, encrypted_value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
            encrypted_value: Some(encrypted_value.into()),
        }
    }

    #[must_use]
    pub const fn is_secure(&self) -> bool {
        self.encrypted_value.is_some()
    }

    /// Value as shown to users. Encrypted values are always masked.
    #[must_use]
    pub fn display_value(&self) -> String {
        if self.is_secure() {
            SECURE_VALUE_MASK.to_string()
        } else {
            self.value.clone().unwrap_or_default()
        }
    }
}

/// Ordered plugin properties of a secret configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigProperties(Vec<ConfigProperty>);

impl ConfigProperties {
    #[must_use]
    pub const fn new(properties: Vec<ConfigProperty>) -> Self {
        Self(properties)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigProperty> {
        self.0.iter()
    }

    /// Key/value pairs in insertion order with secure values masked.
    ///
    /// Repeated keys collapse into one pair: the last value wins, the first
    /// position is kept.
    #[must_use]
    pub fn as_map(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = Vec::with_capacity(self.0.len());
        for property in &self.0 {
            let value = property.display_value();
            if let Some(existing) = pairs.iter_mut().find(|(key, _)| *key == property.key) {
                existing.1 = value;
            } else {
                pairs.push((property.key.clone(), value));
            }
        }
        pairs
    }
}

impl FromIterator<ConfigProperty> for ConfigProperties {
    fn from_iter<T: IntoIterator<Item = ConfigProperty>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A configured connection to an external secret store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretConfig {
    pub id: SecretConfigId,
    /// Identifier of the plugin that talks to the secret store
    pub plugin_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub properties: ConfigProperties,
}

impl SecretConfig {
    /// Create a configuration without description or properties
    #[must_use]
    pub fn new(id: impl Into<SecretConfigId>, plugin_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            plugin_id: plugin_id.into(),
            description: String::new(),
            properties: ConfigProperties::default(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_property(mut self, property: ConfigProperty) -> Self {
        self.properties.0.push(property);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn as_map_keeps_insertion_order() {
        let properties: ConfigProperties = [
            ConfigProperty::plain("url", "https://vault"),
            ConfigProperty::plain("auth_method", "token"),
            ConfigProperty::plain("namespace", "ci"),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            properties.as_map(),
            vec![
                ("url".to_string(), "https://vault".to_string()),
                ("auth_method".to_string(), "token".to_string()),
                ("namespace".to_string(), "ci".to_string()),
            ]
        );
    }

    #[test]
    fn as_map_masks_secure_values() {
        let config = SecretConfig::new("s1", "vault")
            .with_property(ConfigProperty::secure("token", "AES:abc:def"))
            .with_property(ConfigProperty {
                key: "empty".to_string(),
                value: None,
                encrypted_value: None,
            });

        assert_eq!(
            config.properties.as_map(),
            vec![
                ("token".to_string(), SECURE_VALUE_MASK.to_string()),
                ("empty".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn as_map_collapses_duplicate_keys_in_first_position() {
        let properties: ConfigProperties = [
            ConfigProperty::plain("url", "old"),
            ConfigProperty::plain("path", "secret/"),
            ConfigProperty::plain("url", "new"),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            properties.as_map(),
            vec![
                ("url".to_string(), "new".to_string()),
                ("path".to_string(), "secret/".to_string()),
            ]
        );
    }

    #[test]
    fn deserializes_from_json() {
        let config: SecretConfig = serde_json::from_str(
            r#"{
                "id": "s1",
                "plugin_id": "vault",
                "description": "Vault",
                "properties": [
                    {"key": "url", "value": "https://vault"},
                    {"key": "token", "encrypted_value": "AES:xyz"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(config.id.as_str(), "s1");
        assert_eq!(config.properties.len(), 2);
        assert!(config.properties.iter().nth(1).unwrap().is_secure());
    }
}
