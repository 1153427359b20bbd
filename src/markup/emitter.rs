//! Scanner performers.
//!
//! `MarkupEmitter` turns scanner callbacks into escaped HTML with one
//! `<span style="...">` per style run. `PlainTextCollector` keeps only the
//! literal characters.

use super::escape::push_escaped;
use super::handlers::log_discarded_csi;
use super::handlers::style::parse_params;
use super::options::RenderOptions;
use super::palette::Palette;
use super::scanner::Perform;
use super::types::TextStyle;

/// Performer that builds the markup string.
pub(crate) struct MarkupEmitter<'a> {
    options: &'a RenderOptions,
    style: TextStyle,
    span_open: bool,
    out: String,
}

impl<'a> MarkupEmitter<'a> {
    pub fn new(options: &'a RenderOptions, capacity: usize) -> Self {
        Self {
            options,
            style: TextStyle::default(),
            span_open: false,
            out: String::with_capacity(capacity),
        }
    }

    /// Close any open span and return the markup.
    pub fn finish(mut self) -> String {
        self.close_span();
        self.out
    }

    /// Handle SGR - CSI m.
    /// Updates the style, then closes the current span and opens a new one
    /// if the new style has anything to declare.
    /// The open test is "has declarations", not `!is_default()`: blink-only
    /// or reverse-only states open no span.
    fn handle_sgr(&mut self, raw: &str) {
        let params = parse_params(raw, self.options.malformed_params);
        self.style.apply_sgr(&params);

        self.close_span();
        let declarations = css_declarations(&self.style, &self.options.palette);
        if !declarations.is_empty() {
            self.out.push_str("<span style=\"");
            self.out.push_str(&declarations.join("; "));
            self.out.push_str("\">");
            self.span_open = true;
        }
    }

    fn close_span(&mut self) {
        if self.span_open {
            self.out.push_str("</span>");
            self.span_open = false;
        }
    }
}

impl Perform for MarkupEmitter<'_> {
    fn print(&mut self, c: char) {
        push_escaped(&mut self.out, c);
    }

    fn csi_dispatch(&mut self, params: &str, action: char) {
        match action {
            'm' => self.handle_sgr(params),
            _ => log_discarded_csi(action, params),
        }
    }
}

/// Serialize the visible parts of a style as CSS declarations.
///
/// Only non-default attributes and colors are declared, colors as set.
/// Blink and reverse have no declaration.
pub fn css_declarations(style: &TextStyle, palette: &Palette) -> Vec<String> {
    let mut declarations = Vec::new();
    if style.bold {
        declarations.push("font-weight: bold".to_string());
    }
    if style.italic {
        declarations.push("font-style: italic".to_string());
    }
    if style.underline {
        declarations.push("text-decoration: underline".to_string());
    }
    if let Some(color) = style.fg {
        declarations.push(format!("color: {}", palette.css_value(color)));
    }
    if let Some(color) = style.bg {
        declarations.push(format!("background-color: {}", palette.css_value(color)));
    }
    declarations
}

/// Performer that keeps literal characters and drops every sequence.
#[derive(Debug, Default)]
pub(crate) struct PlainTextCollector {
    pub out: String,
}

impl Perform for PlainTextCollector {
    fn print(&mut self, c: char) {
        self.out.push(c);
    }

    fn csi_dispatch(&mut self, params: &str, action: char) {
        if action != 'm' {
            log_discarded_csi(action, params);
        }
    }
}
