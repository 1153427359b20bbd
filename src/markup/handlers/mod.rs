//! Escape sequence handlers.
//!
//! - style: SGR (Select Graphic Rendition) parameter parsing and state update
//!
//! Every other control function (cursor movement, erase, scroll) is
//! discarded; it is only logged here.

pub mod style;

use tracing::trace;

/// Log a discarded (non-SGR) CSI sequence for debugging.
pub fn log_discarded_csi(action: char, params: &str) {
    trace!(action = %action, params = %params, "Discarded CSI sequence");
}

/// Log an SGR code with no rendering effect.
pub fn log_ignored_sgr(code: u16) {
    trace!(code = code, "Ignored SGR code");
}

/// Log a CSI introducer that never reached a final byte.
pub fn log_unterminated_csi(dropped_bytes: usize) {
    trace!(dropped_bytes = dropped_bytes, "Unterminated CSI sequence");
}
