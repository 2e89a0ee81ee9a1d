//! CLI `vocab` command: print the effective cue vocabulary as TOML.

use anyhow::{Context, Result};

use journey::config::JourneyConfig;
use journey::Vocabulary;

/// Print the vocabulary for `locale`, or the merged configured vocabulary.
///
/// The output is a valid vocabulary file and can be edited and listed under
/// `extractor.vocabulary_files`.
pub fn vocab(config: &JourneyConfig, locale: Option<&str>) -> Result<()> {
    let text = match locale {
        Some(locale) => render(&Vocabulary::for_locale(locale)?)?,
        None => render(config.extractor.build_extractor()?.vocabulary())?,
    };
    println!("{text}");
    Ok(())
}

fn render(vocabulary: &Vocabulary) -> Result<String> {
    toml::to_string_pretty(vocabulary).context("failed to render vocabulary")
}
