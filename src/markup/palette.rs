//! Color palette tables.
//!
//! The 16-color base table is shared by foreground and background codes
//! (30-37/90-97 and 40-47/100-107). The 256-color extended palette is the
//! base table followed by a 6x6x6 color cube and a 24-step grayscale ramp.

use super::types::{Color, Rgb};

/// Default base table: 8 standard colors followed by their bright variants.
pub const BASE_COLORS: [Rgb; 16] = [
    Rgb::new(0x00, 0x00, 0x00), // black
    Rgb::new(0xcc, 0x00, 0x00), // red
    Rgb::new(0x4e, 0x9a, 0x06), // green
    Rgb::new(0xc4, 0xa0, 0x00), // yellow
    Rgb::new(0x34, 0x65, 0xa4), // blue
    Rgb::new(0x75, 0x50, 0x7b), // magenta
    Rgb::new(0x06, 0x98, 0x9a), // cyan
    Rgb::new(0xd3, 0xd7, 0xcf), // white
    Rgb::new(0x55, 0x57, 0x53), // bright black
    Rgb::new(0xef, 0x29, 0x29), // bright red
    Rgb::new(0x8a, 0xe2, 0x34), // bright green
    Rgb::new(0xfc, 0xe9, 0x4f), // bright yellow
    Rgb::new(0x72, 0x9f, 0xcf), // bright blue
    Rgb::new(0xad, 0x7f, 0xa8), // bright magenta
    Rgb::new(0x34, 0xe2, 0xe2), // bright cyan
    Rgb::new(0xee, 0xee, 0xec), // bright white
];

/// First index of the 6x6x6 color cube.
const CUBE_START: u8 = 16;
/// First index of the grayscale ramp.
const GRAYSCALE_START: u8 = 232;

/// Resolve a color cube index (16-231); other indexes clamp into range.
pub fn cube(index: u8) -> Rgb {
    let i = index.clamp(CUBE_START, GRAYSCALE_START - 1) - CUBE_START;
    Rgb::new((i / 36) * 51, ((i % 36) / 6) * 51, (i % 6) * 51)
}

/// Resolve a grayscale ramp index (232-255).
pub fn grayscale(index: u8) -> Rgb {
    let gray = index.saturating_sub(GRAYSCALE_START) * 10 + 8;
    Rgb::new(gray, gray, gray)
}

/// The 16-color base table used to resolve named colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    base: [Rgb; 16],
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(BASE_COLORS)
    }
}

impl Palette {
    pub fn new(base: [Rgb; 16]) -> Self {
        Self { base }
    }

    /// Base table entry; indexes wrap into 0-15.
    pub fn base(&self, index: u8) -> Rgb {
        self.base[usize::from(index % 16)]
    }

    /// Resolve an extended-palette index (0-255).
    pub fn extended(&self, index: u8) -> Rgb {
        if index < CUBE_START {
            self.base(index)
        } else if index < GRAYSCALE_START {
            cube(index)
        } else {
            grayscale(index)
        }
    }

    /// Resolve any color to its RGB triple.
    pub fn resolve(&self, color: Color) -> Rgb {
        match color {
            Color::Base(index) => self.base(index),
            Color::Indexed(index) => self.extended(index),
            Color::Rgb(r, g, b) => Rgb::new(r, g, b),
        }
    }

    /// CSS value for a color.
    ///
    /// Base-table colors are written as hex constants, everything else as an
    /// `rgb(r, g, b)` literal.
    pub fn css_value(&self, color: Color) -> String {
        match color {
            Color::Base(index) => self.base(index).to_hex(),
            Color::Indexed(index) if index < CUBE_START => self.base(index).to_hex(),
            other => self.resolve(other).to_css_rgb(),
        }
    }
}
