//! Markup data types.
//!
//! Contains the core data structures for representing rendering state:
//! - Rgb: a resolved 24-bit color
//! - Color: a concrete color value (base palette, 256-color index, RGB)
//! - TextStyle: attributes and colors carried by the current span

use std::fmt;

/// A resolved 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex string.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Format as a lowercase `#rrggbb` hex string.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Format as a CSS `rgb(r, g, b)` literal.
    pub fn to_css_rgb(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// A concrete color value set by an SGR sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Entry of the 16-color base table (0-7 standard, 8-15 bright)
    Base(u8),
    /// 256-color palette index
    Indexed(u8),
    /// Explicit RGB color
    Rgb(u8, u8, u8),
}

/// Style attributes for a run of text.
///
/// `None` colors inherit whatever the surrounding document uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub blink: bool,
    pub reverse: bool,
}

impl TextStyle {
    /// True when no attribute or color differs from the default.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
