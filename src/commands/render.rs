//! Render command handler

use anyhow::Result;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use ansiboard::Renderer;

use super::{load_config, read_inputs};

/// Render inputs to HTML on stdout.
///
/// Inputs are rendered in parallel and written in the order given,
/// separated by a newline.
#[cfg(not(tarpaulin_include))]
pub fn handle(files: &[PathBuf], wrap: bool, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let renderer = Renderer::new(config.render_options()?);
    let inputs = read_inputs(files)?;

    let texts: Vec<&str> = inputs.iter().map(|input| input.text.as_str()).collect();
    let rendered = renderer.render_batch(&texts);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (index, html) in rendered.iter().enumerate() {
        if index > 0 && !wrap {
            out.write_all(b"\n")?;
        }
        out.write_all(format_output(html, wrap).as_bytes())?;
    }
    out.flush()?;
    Ok(())
}

/// Optionally wrap rendered markup in a `<pre>` block.
pub(crate) fn format_output(html: &str, wrap: bool) -> String {
    if wrap {
        format!("<pre class=\"ansi\">{}</pre>\n", html)
    } else {
        html.to_string()
    }
}
