#![allow(dead_code)]

use chrono::NaiveDate;
use journey::config::ExtractorConfig;
use journey::Extractor;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// 2025-06-10, a Tuesday.
pub fn reference() -> NaiveDate {
    date(2025, 6, 10)
}

/// Extractor over the default bilingual vocabulary.
pub fn extractor() -> Extractor {
    Extractor::builtin().unwrap()
}

/// Extractor built through the config path, as the CLI does.
pub fn extractor_with(config: &ExtractorConfig) -> Extractor {
    config.build_extractor().unwrap()
}

/// Entries exercising most cue kinds, used by the property tests.
pub const CORPUS: &[&str] = &[
    "",
    "   ",
    "I will buy groceries tomorrow.",
    "I need to finish the report.",
    "Feeling okay today, nothing special.",
    "on 2025-02-30 I will travel.",
    "I will call mom next week and I need to pay rent.",
    "- I must go.\n- I should call Ana on friday\n- gonna run 5 km in 3 days",
    "My priority is to rest. I want to read later. I plan to visit Bali next year!",
    "Aku akan main padel besok. Saya harus bayar listrik hari ini.",
    "I will I will I will",
    "will will will. need to need to. must must must",
    "Tomorrow I will clean the garage, then I have to cook dinner because guests come.",
    "?!. ... --- ••• ",
    "I am going to write 3 pages on 2025-12-25 and then relax.",
];

/// English entries whose names collide with Indonesian cue words ("Dan", "Hari").
pub const ENGLISH_CORPUS: &[&str] = &[
    "I will call Dan and Sue tomorrow.",
    "I need to email Dan about the invoice.",
    "Lunch with Ada and Hari was great. I want to visit Ada next week.",
    "Yesterday I met Dan at the gym, then I must stretch more.",
    "I plan to cook with Hari on friday because Dan is away.",
    "Feeling okay today, nothing special.",
    "I will call mom next week and I need to pay rent.",
    "My priority is to rest. I want to read later. I plan to visit Bali next year!",
    "I am going to write 3 pages on 2025-12-25 and then relax.",
];
