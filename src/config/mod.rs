//! Configuration management for ansiboard

mod error;
mod io;
mod types;

pub use error::ConfigError;
pub use types::*;

use std::path::{Path, PathBuf};

use crate::markup::{Palette, RenderOptions, Rgb};

impl Config {
    /// Get the config file path (~/.config/ansiboard/config.toml)
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/ansiboard)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        io::config_dir()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self, ConfigError> {
        io::load()
    }

    /// Load configuration from an explicit path, or return defaults if not found
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        io::load_from(path)
    }

    /// Serialize to pretty TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check version and palette entries.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.config_version > CURRENT_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: self.config_version,
                supported: CURRENT_VERSION,
            });
        }
        self.palette().map(|_| ())
    }

    /// The configured base palette, or the default table.
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        let Some(entries) = &self.render.palette else {
            return Ok(Palette::default());
        };
        if entries.len() != 16 {
            return Err(ConfigError::PaletteSize {
                found: entries.len(),
            });
        }

        let mut base = [Rgb::new(0, 0, 0); 16];
        for (index, (slot, value)) in base.iter_mut().zip(entries).enumerate() {
            *slot = Rgb::from_hex(value).ok_or_else(|| ConfigError::InvalidPalette {
                index,
                value: value.clone(),
            })?;
        }
        Ok(Palette::new(base))
    }

    /// Options for [`crate::Renderer`].
    pub fn render_options(&self) -> Result<RenderOptions, ConfigError> {
        Ok(RenderOptions {
            palette: self.palette()?,
            malformed_params: self.render.malformed_params,
        })
    }
}
