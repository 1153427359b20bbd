//! Command handlers for the ansiboard CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod completions;
pub mod config;
pub mod detect;
pub mod render;
pub mod strip;

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use ansiboard::Config;

/// A named input text.
#[derive(Debug)]
pub struct Input {
    /// File path, or "-" for stdin
    pub name: String,
    pub text: String,
}

/// Read every file, or stdin when `files` is empty.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected; old
/// BBS art is often stored in legacy code pages.
pub fn read_inputs(files: &[PathBuf]) -> Result<Vec<Input>> {
    if files.is_empty() {
        let mut bytes = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut bytes)
            .context("Failed to read stdin")?;
        return Ok(vec![Input {
            name: "-".to_string(),
            text: String::from_utf8_lossy(&bytes).into_owned(),
        }]);
    }

    files
        .iter()
        .map(|path| {
            let bytes =
                fs::read(path).with_context(|| format!("Failed to read input file: {:?}", path))?;
            Ok(Input {
                name: path.display().to_string(),
                text: String::from_utf8_lossy(&bytes).into_owned(),
            })
        })
        .collect()
}

/// Load configuration from `path` if given, else from the default location.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    Ok(config)
}
