//! Strip command handler

use anyhow::Result;
use std::io::{self, Write};
use std::path::PathBuf;

use ansiboard::strip_escapes;

use super::read_inputs;

/// Print inputs with all escape sequences removed.
#[cfg(not(tarpaulin_include))]
pub fn handle(files: &[PathBuf]) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for input in read_inputs(files)? {
        out.write_all(strip_escapes(&input.text).as_bytes())?;
    }
    out.flush()?;
    Ok(())
}
