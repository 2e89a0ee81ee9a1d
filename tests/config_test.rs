mod helpers;

use helpers::{date, extractor_with, reference};
use journey::config::{ExtractorConfig, JourneyConfig};
use journey::extract::date::MonthOverflow;
use tempfile::TempDir;

#[test]
fn config_file_drives_extractor() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[extractor]
locales = ["en"]
month_overflow = "rollover"
keyword_limit = 1
"#,
    )
    .unwrap();

    let config = JourneyConfig::load_from(&path).unwrap();
    assert_eq!(config.extractor.month_overflow, MonthOverflow::Rollover);

    let extractor = extractor_with(&config.extractor);
    let resolved = extractor.resolve_date(date(2025, 1, 31), "next month").unwrap();
    assert_eq!(resolved.date, date(2025, 3, 3));

    let result = extractor.parse_entry("padel padel coffee", reference());
    assert_eq!(result.keywords.len(), 1);
    assert_eq!(result.keywords[0].word, "padel");
}

#[test]
fn english_only_ignores_indonesian_cues() {
    let config = ExtractorConfig {
        locales: vec!["en".into()],
        ..Default::default()
    };
    let extractor = extractor_with(&config);
    let result = extractor.parse_entry("Aku akan main padel besok.", reference());
    assert!(result.plans.is_empty());
}

#[test]
fn vocabulary_file_adds_a_locale() {
    let tmp = TempDir::new().unwrap();
    let vocab_path = tmp.path().join("de.toml");
    std::fs::write(
        &vocab_path,
        r#"
intent_markers = ["werde"]
obligation_markers = ["muss"]
clause_connectors = ["und"]

[dates]
same_day = ["heute"]

[[dates.relative]]
phrase = "morgen"
shift = { amount = 1, unit = "day" }
"#,
    )
    .unwrap();

    let config = ExtractorConfig {
        locales: vec!["en".into()],
        vocabulary_files: vec![vocab_path.to_string_lossy().into_owned()],
        ..Default::default()
    };
    let extractor = extractor_with(&config);
    let result = extractor.parse_entry(
        "Ich werde Brot kaufen morgen und schlafen. Ich muss arbeiten heute.",
        reference(),
    );
    assert_eq!(result.plans[0].title, "Brot kaufen");
    assert_eq!(result.plans[0].planned_date, Some(date(2025, 6, 11)));
    assert_eq!(result.priorities[0].title, "arbeiten");
}

#[test]
fn missing_vocabulary_file_is_an_error() {
    let config = ExtractorConfig {
        vocabulary_files: vec!["/nonexistent/journey/vocab.toml".into()],
        ..Default::default()
    };
    let err = config.build_extractor().unwrap_err();
    assert!(err.to_string().contains("failed to read vocabulary file"));
}
