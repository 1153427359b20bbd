//! Configuration errors.

use std::path::PathBuf;

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine home directory")]
    NoHomeDir,

    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Unsupported config version {found} (this build understands up to {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("Palette must have exactly 16 colors, found {found}")]
    PaletteSize { found: usize },

    #[error("Invalid palette color {value:?} at index {index}; expected #rrggbb")]
    InvalidPalette { index: usize, value: String },
}
