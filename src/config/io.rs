//! Configuration I/O operations

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::ConfigError;
use super::types::Config;

/// Get the config file path (~/.config/ansiboard/config.toml)
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Get the config directory path (~/.config/ansiboard)
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(".config").join("ansiboard"))
}

/// Load configuration from the default location, or return defaults if not found
pub fn load() -> Result<Config, ConfigError> {
    load_from(&config_path()?)
}

/// Load configuration from `path`, or return defaults if it does not exist
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        debug!(path = ?path, "No config file, using defaults");
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: Config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;
    debug!(path = ?path, "Loaded config");
    Ok(config)
}
