//! SGR (Select Graphic Rendition) handler.
//!
//! Handles CSI m sequences for text styling:
//! - Attributes (bold, italic, underline, blink, reverse)
//! - 16-color foreground and background codes
//! - 256-color and RGB color support (38/48 sub-forms)

use super::super::options::MalformedParams;
use super::super::types::{Color, TextStyle};
use super::log_ignored_sgr;

/// Split raw SGR parameter text into numeric codes.
///
/// Empty fields are `0`. Fields that are not plain digits are `0` under
/// [`MalformedParams::Reset`] and dropped under [`MalformedParams::Ignore`].
/// Values beyond `u16::MAX` saturate.
pub fn parse_params(raw: &str, malformed: MalformedParams) -> Vec<u16> {
    raw.split(';')
        .filter_map(|field| {
            if field.is_empty() {
                return Some(0);
            }
            if !field.bytes().all(|b| b.is_ascii_digit()) {
                return match malformed {
                    MalformedParams::Reset => Some(0),
                    MalformedParams::Ignore => None,
                };
            }
            Some(field.bytes().fold(0u16, |acc, b| {
                acc.saturating_mul(10).saturating_add(u16::from(b - b'0'))
            }))
        })
        .collect()
}

impl TextStyle {
    /// Apply an SGR code list, left to right.
    pub fn apply_sgr(&mut self, params: &[u16]) {
        let mut i = 0;

        while i < params.len() {
            let code = params[i];
            i += 1;
            match code {
                0 => *self = TextStyle::default(), // Reset
                1 => self.bold = true,
                3 => self.italic = true,
                4 => self.underline = true,
                5 | 6 => self.blink = true,
                7 => self.reverse = true,
                22 => self.bold = false,
                23 => self.italic = false,
                24 => self.underline = false,
                25 => self.blink = false,
                27 => self.reverse = false,
                // Standard foreground colors (30-37)
                30..=37 => self.fg = Some(Color::Base((code - 30) as u8)),
                38 => {
                    // Extended foreground color
                    if let Some((consumed, color)) = parse_extended_color(&params[i..]) {
                        i += consumed;
                        if color.is_some() {
                            self.fg = color;
                        }
                    }
                }
                39 => self.fg = None,
                // Standard background colors (40-47)
                40..=47 => self.bg = Some(Color::Base((code - 40) as u8)),
                48 => {
                    // Extended background color
                    if let Some((consumed, color)) = parse_extended_color(&params[i..]) {
                        i += consumed;
                        if color.is_some() {
                            self.bg = color;
                        }
                    }
                }
                49 => self.bg = None,
                // Bright foreground colors (90-97)
                90..=97 => self.fg = Some(Color::Base((code - 90 + 8) as u8)),
                // Bright background colors (100-107)
                100..=107 => self.bg = Some(Color::Base((code - 100 + 8) as u8)),
                _ => log_ignored_sgr(code),
            }
        }
    }
}

/// Parse the fields following a 38/48 code.
///
/// Returns the number of fields consumed and the color, if any. `None` means
/// the form is malformed: the 38/48 has no effect and nothing is consumed.
/// A 256-color index above 255 consumes its fields but sets no color.
fn parse_extended_color(rest: &[u16]) -> Option<(usize, Option<Color>)> {
    match rest {
        // 256-color mode
        [5, index, ..] => Some((2, u8::try_from(*index).ok().map(Color::Indexed))),
        // RGB mode
        [2, r, g, b, ..] => Some((4, Some(Color::Rgb(channel(*r), channel(*g), channel(*b))))),
        _ => None,
    }
}

fn channel(value: u16) -> u8 {
    u8::try_from(value).unwrap_or(u8::MAX)
}
