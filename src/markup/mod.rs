//! ANSI/SGR to HTML rendering engine.
//!
//! Converts BBS-style text (literal characters interleaved with CSI
//! sequences, possibly written with the `^[` alias) into escaped HTML where
//! each style run is wrapped in a single `<span style="...">`.
//!
//! Rendering is pure: every call owns its own style state, so a `Renderer`
//! can be shared freely between threads.

mod emitter;
mod escape;
mod handlers;
mod normalize;
mod options;
mod palette;
mod scanner;
mod types;


pub use emitter::css_declarations;
pub use escape::escape_html;
pub use handlers::style::parse_params;
pub use normalize::{normalize_escapes, ESCAPE_ALIAS};
pub use options::{MalformedParams, RenderOptions};
pub use palette::{cube, grayscale, Palette, BASE_COLORS};
pub use types::{Color, Rgb, TextStyle};

use rayon::prelude::*;
use tracing::debug;

use emitter::{MarkupEmitter, PlainTextCollector};

/// Renders escape-laden text into HTML using a fixed set of options.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    /// Create a renderer with the given options.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Normalize the `^[` alias, then render.
    pub fn render(&self, text: &str) -> String {
        if !contains_escape_markup(text) {
            return escape_html(text);
        }
        self.render_normalized(&normalize_escapes(text))
    }

    /// Render text whose escapes are already in control-byte form.
    ///
    /// Removing every tag from the result yields the input with all control
    /// sequences deleted and every literal character HTML-escaped.
    pub fn render_normalized(&self, text: &str) -> String {
        let mut emitter = MarkupEmitter::new(&self.options, text.len());
        scanner::scan(text, &mut emitter);
        emitter.finish()
    }

    /// Render many independent texts in parallel, preserving order.
    pub fn render_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<String> {
        let rendered: Vec<String> = texts
            .par_iter()
            .map(|text| self.render(text.as_ref()))
            .collect();
        debug!(count = rendered.len(), "Rendered batch");
        rendered
    }
}

/// Render with default options.
pub fn ansi_to_html(text: &str) -> String {
    Renderer::default().render(text)
}

/// Drop every control sequence and return the literal text, unescaped.
pub fn strip_escapes(text: &str) -> String {
    let normalized = normalize_escapes(text);
    let mut collector = PlainTextCollector::default();
    scanner::scan(&normalized, &mut collector);
    collector.out
}

/// True if the text holds a control sequence introducer or the `^[` alias.
pub fn contains_escape_markup(text: &str) -> bool {
    text.contains("\x1b[") || text.contains(ESCAPE_ALIAS)
}
