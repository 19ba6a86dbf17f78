//! Secret configuration catalog loading.
//!
//! A catalog is the already-resolved data a settings page hands to the
//! secret-configs widget: the configured entries plus the metadata of the
//! installed secret plugins. Either collection may be absent.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::models::{PluginInfo, SecretConfig};
use crate::util::compact_text;
use crate::{Error, Result};

/// Secret configurations and installed plugin metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretConfigCatalog {
    #[serde(default)]
    pub secret_configs: Option<Vec<SecretConfig>>,
    #[serde(default)]
    pub plugin_infos: Option<Vec<PluginInfo>>,
}

impl SecretConfigCatalog {
    #[must_use]
    pub fn secret_configs(&self) -> Option<&[SecretConfig]> {
        self.secret_configs.as_deref()
    }

    #[must_use]
    pub fn plugin_infos(&self) -> Option<&[PluginInfo]> {
        self.plugin_infos.as_deref()
    }
}

/// Parse a catalog from a raw JSON payload.
pub fn parse_catalog(payload: &str) -> Result<SecretConfigCatalog> {
    if payload.trim().is_empty() {
        return Err(Error::InvalidInput("catalog payload is empty".to_string()));
    }
    let catalog: SecretConfigCatalog = serde_json::from_str(payload)?;
    Ok(catalog)
}

/// Load a catalog from disk. A missing file yields an empty catalog.
pub fn load_catalog_from_path(path: &Path) -> Result<SecretConfigCatalog> {
    if !path.exists() {
        tracing::info!(
            "No secret config catalog at {}, starting empty",
            path.display()
        );
        return Ok(SecretConfigCatalog::default());
    }

    let content = std::fs::read_to_string(path)?;
    let catalog = parse_catalog(&content).map_err(|error| {
        tracing::warn!(
            "Failed to parse secret config catalog at {}: {}",
            path.display(),
            compact_text(&error.to_string())
        );
        error
    })?;

    tracing::debug!(
        "Loaded {} secret configs and {} plugin infos from {}",
        catalog.secret_configs().map_or(0, <[_]>::len),
        catalog.plugin_infos().map_or(0, <[_]>::len),
        path.display()
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"{
        "secret_configs": [
            {
                "id": "s1",
                "plugin_id": "vault",
                "description": "Vault",
                "properties": [{"key": "url", "value": "https://vault"}]
            }
        ],
        "plugin_infos": [{"id": "vault", "image_url": "/plugins/vault.svg"}]
    }"#;

    #[test]
    fn parses_full_catalog() {
        let catalog = parse_catalog(SAMPLE).unwrap();
        let configs = catalog.secret_configs().unwrap();
        assert_eq!(configs.len(), 1);
        assert_eq!(configs[0].plugin_id, "vault");
        assert_eq!(
            catalog.plugin_infos().unwrap()[0].image_url(),
            Some("/plugins/vault.svg")
        );
    }

    #[test]
    fn missing_and_null_collections_stay_absent() {
        let catalog = parse_catalog(r#"{"secret_configs": null}"#).unwrap();
        assert_eq!(catalog, SecretConfigCatalog::default());
    }

    #[test]
    fn rejects_empty_payload() {
        assert!(matches!(parse_catalog("  "), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            parse_catalog("{\"secret_configs\": ["),
            Err(Error::Serialization(_))
        ));
    }

    #[test]
    fn missing_file_yields_empty_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = load_catalog_from_path(&dir.path().join("absent.json")).unwrap();
        assert!(catalog.secret_configs().is_none());
        assert!(catalog.plugin_infos().is_none());
    }

    #[test]
    fn loads_catalog_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secret-configs.json");
        std::fs::write(&path, SAMPLE).unwrap();

        let catalog = load_catalog_from_path(&path).unwrap();
        assert_eq!(catalog, parse_catalog(SAMPLE).unwrap());
    }
}
