//! CLI `parse` command: extract plans, priorities, and keywords from one entry.

use anyhow::Result;
use chrono::NaiveDate;
use std::path::Path;

use journey::config::JourneyConfig;

/// Parse one entry and print the result as JSON on stdout.
pub fn parse(
    config: &JourneyConfig,
    text: Option<String>,
    file: Option<&Path>,
    today: Option<NaiveDate>,
    compact: bool,
) -> Result<()> {
    let input = super::read_input(text, file)?;
    let reference = super::reference_date(today);
    let extractor = config.extractor.build_extractor()?;

    tracing::info!(text_len = input.len(), reference = %reference, "parsing entry");
    let result = extractor.parse_entry(&input, reference);

    let json = if compact {
        serde_json::to_string(&result)?
    } else {
        serde_json::to_string_pretty(&result)?
    };
    println!("{json}");

    if result.is_empty() {
        eprintln!("Nothing extracted.");
    } else {
        eprintln!(
            "Found {} plan(s), {} priority(ies), {} keyword(s).",
            result.plans.len(),
            result.priorities.len(),
            result.keywords.len()
        );
    }

    Ok(())
}
