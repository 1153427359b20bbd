//! Control sequence scanner.
//!
//! Splits normalized text into literal characters and CSI sequences
//! (`ESC [ <params> <final>`) and hands each to a [`Perform`] implementation.
//! The final byte is the first ASCII letter after the introducer; an
//! introducer that never reaches one swallows the rest of the input.

use super::handlers::log_unterminated_csi;

/// The control byte.
pub const ESC: u8 = 0x1b;

/// Receiver for scanner callbacks.
pub trait Perform {
    /// A literal character.
    fn print(&mut self, c: char);

    /// A complete control sequence with its raw parameter text.
    fn csi_dispatch(&mut self, params: &str, action: char);
}

/// Scan `text` once, left to right.
pub fn scan<P: Perform>(text: &str, performer: &mut P) {
    let bytes = text.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        if bytes[pos] == ESC && bytes.get(pos + 1) == Some(&b'[') {
            let start = pos + 2;
            match bytes[start..].iter().position(u8::is_ascii_alphabetic) {
                Some(offset) => {
                    let end = start + offset;
                    performer.csi_dispatch(&text[start..end], char::from(bytes[end]));
                    pos = end + 1;
                }
                None => {
                    log_unterminated_csi(bytes.len() - pos);
                    return;
                }
            }
            continue;
        }

        let Some(c) = text[pos..].chars().next() else {
            break;
        };
        performer.print(c);
        pos += c.len_utf8();
    }
}
