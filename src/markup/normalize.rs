//! Escape alias normalization.
//!
//! Old BBS software stored the control byte as the two characters `^[`.
//! Rewriting the alias first leaves the scanner a single lexical form.

/// The two-character alias for the control byte.
pub const ESCAPE_ALIAS: &str = "^[";

/// Replace every `^[` with the real control byte (0x1B).
///
/// Everything else, including control bytes already present, is untouched.
pub fn normalize_escapes(text: &str) -> String {
    text.replace(ESCAPE_ALIAS, "\x1b")
}
