//! Detect command handler

use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

use ansiboard::contains_escape_markup;

use super::{read_inputs, Input};

/// Detection result for one input.
#[derive(Debug, Serialize)]
pub struct Detection {
    pub input: String,
    pub has_escapes: bool,
}

/// Report which inputs contain escape sequences.
///
/// Returns true if at least one does.
#[cfg(not(tarpaulin_include))]
pub fn handle(files: &[PathBuf], json: bool) -> Result<bool> {
    let detections = detect_all(&read_inputs(files)?);

    if json {
        println!("{}", serde_json::to_string_pretty(&detections)?);
    } else {
        for detection in &detections {
            let verdict = if detection.has_escapes { "escapes" } else { "plain" };
            println!("{}: {}", detection.input, verdict);
        }
    }

    Ok(detections.iter().any(|d| d.has_escapes))
}

pub(crate) fn detect_all(inputs: &[Input]) -> Vec<Detection> {
    inputs
        .iter()
        .map(|input| Detection {
            input: input.name.clone(),
            has_escapes: contains_escape_markup(&input.text),
        })
        .collect()
}
