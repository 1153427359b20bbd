//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::markup::MalformedParams;

/// Schema version written to new config files.
pub const CURRENT_VERSION: u32 = 1;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Schema version of the file.
    #[serde(default = "default_config_version")]
    pub config_version: u32,
    #[serde(default)]
    pub render: RenderConfig,
}

fn default_config_version() -> u32 {
    CURRENT_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            render: RenderConfig::default(),
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Treatment of non-numeric SGR parameter fields ("reset" or "ignore")
    #[serde(default)]
    pub malformed_params: MalformedParams,
    /// Replacement 16-color base table as `#rrggbb` strings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<Vec<String>>,
}
