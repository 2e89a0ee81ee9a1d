//! CLI `resolve` command: show how a single date phrase resolves.

use anyhow::Result;
use chrono::NaiveDate;

use journey::config::JourneyConfig;

pub fn resolve(config: &JourneyConfig, phrase: &str, today: Option<NaiveDate>) -> Result<()> {
    let reference = super::reference_date(today);
    let extractor = config.extractor.build_extractor()?;

    match extractor.resolve_date(reference, phrase) {
        Some(resolved) => {
            println!("{}", resolved.date);
            eprintln!(
                "  rule: {}  cue: {:?}  reference: {} ({})",
                resolved.rule,
                resolved.cue,
                reference,
                reference.format("%A")
            );
        }
        None => {
            println!("no date cue");
        }
    }

    Ok(())
}
