//! Runtime configuration for the desktop console.

use std::path::PathBuf;

const CATALOG_PATH_ENV: &str = "STASH_CATALOG_PATH";
const CATALOG_FILE: &str = "secret-configs.json";

/// Where the catalog path came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    Environment,
    DataDirectory,
    WorkingDirectory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub catalog_path: PathBuf,
    pub source: CatalogSource,
}

/// Resolve configuration from the process environment.
pub fn resolve_console_config() -> ConsoleConfig {
    let config = resolve_console_config_from(
        std::env::var(CATALOG_PATH_ENV).ok(),
        dirs::data_local_dir().or_else(dirs::data_dir),
    );
    tracing::debug!(
        "Using secret config catalog {} ({:?})",
        config.catalog_path.display(),
        config.source
    );
    config
}

pub fn resolve_console_config_from(
    env_path: Option<String>,
    data_dir: Option<PathBuf>,
) -> ConsoleConfig {
    if let Some(path) = env_path
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
    {
        return ConsoleConfig {
            catalog_path: PathBuf::from(path),
            source: CatalogSource::Environment,
        };
    }

    match data_dir {
        Some(dir) => ConsoleConfig {
            catalog_path: dir.join("stash").join(CATALOG_FILE),
            source: CatalogSource::DataDirectory,
        },
        None => ConsoleConfig {
            catalog_path: PathBuf::from(CATALOG_FILE),
            source: CatalogSource::WorkingDirectory,
        },
    }
}
