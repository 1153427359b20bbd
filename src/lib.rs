//! ANSI Board Renderer library
//!
//! Converts legacy BBS text carrying ANSI/SGR escape sequences (including the
//! `^[` alias for the control byte) into escaped HTML with one styled
//! `<span>` per style run.

pub mod cli;
pub mod config;
pub mod markup;

pub use config::{Config, ConfigError};
pub use markup::{
    ansi_to_html, contains_escape_markup, normalize_escapes, strip_escapes, Color,
    MalformedParams, Palette, RenderOptions, Renderer, Rgb, TextStyle,
};
