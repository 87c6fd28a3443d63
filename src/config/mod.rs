pub mod types;

use std::path::{Path, PathBuf};

use crate::error::{OnecError, Result};
use types::AppConfig;

/// Load config from the XDG path, falling back to defaults when no file exists.
pub fn load_config() -> Result<AppConfig> {
    let path = config_path();
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(AppConfig::default());
    }
    load_config_from(&path)
}

/// Load config from an explicit path. A missing file is an error here.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let raw = std::fs::read_to_string(path).map_err(|source| OnecError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg = toml::from_str(&raw).map_err(|source| OnecError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(cfg)
}

/// Return XDG config dir (~/.config/onec-mcp/)
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join("onec-mcp")
}

/// Return the config file path
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}
