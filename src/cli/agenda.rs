//! CLI `agenda` command: fold a batch of entries into a per-day agenda.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::Path;

use journey::agenda::{build_agenda, JournalEntry};
use journey::config::JourneyConfig;

/// Read a JSON array of `{ "text": ..., "date": ... }` entries and print the agenda.
pub fn agenda(config: &JourneyConfig, file: &Path, today: Option<NaiveDate>) -> Result<()> {
    let json = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read agenda file: {}", file.display()))?;
    let entries: Vec<JournalEntry> =
        serde_json::from_str(&json).context("failed to parse agenda JSON")?;

    let reference = super::reference_date(today);
    let extractor = config.extractor.build_extractor()?;
    let agenda = build_agenda(&extractor, &entries, reference, &config.agenda);

    println!("{}", serde_json::to_string_pretty(&agenda)?);

    let rejected: usize = agenda
        .days
        .values()
        .map(|d| d.rejected_priorities.len())
        .sum();
    eprintln!(
        "Processed {} entries into {} day(s), {} unscheduled highlight(s), {} rejected priority(ies).",
        entries.len(),
        agenda.days.len(),
        agenda.unscheduled.len(),
        rejected
    );
    if rejected > 0 {
        eprintln!(
            "Days are capped at {} priorities (agenda.max_priorities_per_day).",
            config.agenda.max_priorities_per_day
        );
    }

    Ok(())
}
