pub mod agenda;
pub mod parse;
pub mod resolve;
pub mod vocab;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::io::Read;
use std::path::Path;

/// The reference date for a command: the `--today` flag, else the local date.
pub fn reference_date(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| chrono::Local::now().date_naive())
}

/// Entry text from the positional argument, a file, or stdin (in that order).
pub fn read_input(text: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read entry file: {}", path.display()));
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read entry from stdin")?;
    Ok(buf)
}
