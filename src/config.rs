//! Store location configuration.
//!
//! The template store path is resolved from, in order: the `FIELDMAP_DB`
//! environment variable, the `store.path` entry of `.fieldmap.toml` in the
//! working directory, and the built-in default `db.json`. Configuration is
//! loaded once in `main` and passed down explicitly; nothing here is
//! process-global.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{FieldmapError, Result};

/// Environment variable overriding the store path
pub const STORE_PATH_ENV: &str = "FIELDMAP_DB";

/// Configuration file looked up in the working directory
pub const CONFIG_FILE: &str = ".fieldmap.toml";

/// Default store file
pub const DEFAULT_STORE_PATH: &str = "db.json";

/// On-disk `.fieldmap.toml` shape
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub store: StoreSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSection {
    /// Path to the template store file
    pub path: Option<PathBuf>,
}

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub store_path: PathBuf,
}

impl Config {
    /// Load configuration from the environment and the optional
    /// `.fieldmap.toml` in the working directory
    pub fn load() -> Result<Config> {
        let env_override = std::env::var_os(STORE_PATH_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        let file_config = read_file_config(Path::new(CONFIG_FILE))?;
        Ok(Config {
            store_path: resolve_store_path(env_override, file_config.as_ref()),
        })
    }
}

// Pure function: pick the first configured store path
pub fn resolve_store_path(
    env_override: Option<PathBuf>,
    file_config: Option<&FileConfig>,
) -> PathBuf {
    env_override
        .or_else(|| file_config.and_then(|config| config.store.path.clone()))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH))
}

fn read_file_config(path: &Path) -> Result<Option<FileConfig>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|error| {
        FieldmapError::Configuration(format!("failed to read {}: {error}", path.display()))
    })?;
    let config = toml::from_str(&content).map_err(|error| {
        FieldmapError::Configuration(format!("failed to parse {}: {error}", path.display()))
    })?;
    Ok(Some(config))
}
