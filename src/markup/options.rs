//! Rendering options.

use serde::{Deserialize, Serialize};

use super::palette::Palette;

/// How to treat an SGR parameter field that is not a plain number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedParams {
    /// Treat the field as `0`, which resets the style.
    #[default]
    Reset,
    /// Drop the field as an unknown code.
    Ignore,
}

/// Options shared by every render call made through a [`super::Renderer`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub palette: Palette,
    pub malformed_params: MalformedParams,
}
