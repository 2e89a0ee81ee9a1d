//! Cue vocabularies as data.
//!
//! A [`Vocabulary`] holds every lexical cue the extractor reacts to: intent and
//! obligation markers, clause connectors, stopwords, and the date cues that map a
//! phrase to an effect on the reference date. Built-in locales are `en` and `id`
//! (Indonesian); further locales can be loaded from TOML and [merged](Vocabulary::merge)
//! without touching any control flow.

use serde::{Deserialize, Serialize};

use crate::error::VocabularyError;

/// Locales with a built-in vocabulary.
pub const BUILTIN_LOCALES: &[&str] = &["en", "id"];

/// Calendar unit a date cue shifts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateUnit {
    Day,
    Week,
    Month,
    Year,
}

/// A forward shift from the reference date, e.g. `{ amount: 1, unit: week }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    pub amount: u32,
    pub unit: DateUnit,
}

impl Shift {
    pub const fn new(amount: u32, unit: DateUnit) -> Self {
        Self { amount, unit }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl From<DayOfWeek> for chrono::Weekday {
    fn from(day: DayOfWeek) -> Self {
        match day {
            DayOfWeek::Monday => chrono::Weekday::Mon,
            DayOfWeek::Tuesday => chrono::Weekday::Tue,
            DayOfWeek::Wednesday => chrono::Weekday::Wed,
            DayOfWeek::Thursday => chrono::Weekday::Thu,
            DayOfWeek::Friday => chrono::Weekday::Fri,
            DayOfWeek::Saturday => chrono::Weekday::Sat,
            DayOfWeek::Sunday => chrono::Weekday::Sun,
        }
    }
}

/// A fixed phrase with a fixed effect ("tomorrow" → +1 day).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelativeCue {
    pub phrase: String,
    pub shift: Shift,
}

/// A unit word usable in numeric offsets ("3 days", "2 minggu").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitCue {
    pub word: String,
    pub unit: DateUnit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayCue {
    pub name: String,
    pub day: DayOfWeek,
}

/// Date cues, grouped by the resolution rule they feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateVocabulary {
    pub relative: Vec<RelativeCue>,
    pub units: Vec<UnitCue>,
    /// Optional words before a numeric offset ("in 3 days").
    pub offset_prefixes: Vec<String>,
    pub weekday_prefixes: Vec<String>,
    pub weekdays: Vec<WeekdayCue>,
    /// Words introducing an explicit `YYYY-MM-DD` date.
    pub explicit_prefixes: Vec<String>,
    /// Words that pin a plan to the reference date itself.
    pub same_day: Vec<String>,
}

/// The full cue vocabulary for one or more locales.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    pub intent_markers: Vec<String>,
    pub obligation_markers: Vec<String>,
    pub clause_connectors: Vec<String>,
    pub stopwords: Vec<String>,
    pub dates: DateVocabulary,
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| (*w).to_string()).collect()
}

fn relative(list: &[(&str, u32, DateUnit)]) -> Vec<RelativeCue> {
    list.iter()
        .map(|(phrase, amount, unit)| RelativeCue {
            phrase: (*phrase).to_string(),
            shift: Shift::new(*amount, *unit),
        })
        .collect()
}

fn units(list: &[(&str, DateUnit)]) -> Vec<UnitCue> {
    list.iter()
        .map(|(word, unit)| UnitCue {
            word: (*word).to_string(),
            unit: *unit,
        })
        .collect()
}

fn weekdays(list: &[(&str, DayOfWeek)]) -> Vec<WeekdayCue> {
    list.iter()
        .map(|(name, day)| WeekdayCue {
            name: (*name).to_string(),
            day: *day,
        })
        .collect()
}

impl Vocabulary {
    /// English cues.
    pub fn english() -> Self {
        use DateUnit::*;
        use DayOfWeek::*;
        Self {
            intent_markers: words(&[
                "will", "plan to", "want to", "going to", "gonna", "have to", "need to",
            ]),
            obligation_markers: words(&[
                "need to",
                "must",
                "should",
                "have to",
                "priority is to",
                "priority is",
                "priority to",
                "priority",
            ]),
            clause_connectors: words(&["and", "but", "so", "because", "then", "after"]),
            stopwords: words(&[
                "the", "and", "this", "that", "with", "about", "from", "into", "there", "their",
                "today", "yesterday", "tomorrow", "feel", "felt", "really", "very", "just",
            ]),
            dates: DateVocabulary {
                relative: relative(&[
                    ("tomorrow", 1, Day),
                    ("next week", 1, Week),
                    ("next month", 1, Month),
                    ("next year", 1, Year),
                ]),
                units: units(&[("day", Day), ("week", Week), ("month", Month), ("year", Year)]),
                offset_prefixes: words(&["in", "within"]),
                weekday_prefixes: words(&["on"]),
                weekdays: weekdays(&[
                    ("monday", Monday),
                    ("tuesday", Tuesday),
                    ("wednesday", Wednesday),
                    ("thursday", Thursday),
                    ("friday", Friday),
                    ("saturday", Saturday),
                    ("sunday", Sunday),
                ]),
                explicit_prefixes: words(&["on"]),
                same_day: words(&[
                    "today",
                    "later",
                    "tonight",
                    "this evening",
                    "this afternoon",
                    "this morning",
                ]),
            },
        }
    }

    /// Indonesian cues.
    pub fn indonesian() -> Self {
        use DateUnit::*;
        use DayOfWeek::*;
        Self {
            intent_markers: words(&[
                "akan", "mau", "ingin", "berencana", "rencananya", "harus", "perlu",
            ]),
            obligation_markers: words(&["harus", "perlu", "wajib"]),
            clause_connectors: words(&[
                "dan", "tapi", "jadi", "karena", "lalu", "terus", "setelah",
            ]),
            stopwords: words(&[
                "yang", "dan", "untuk", "dengan", "ini", "itu", "saya", "aku", "hari", "besok",
                "kemarin", "sangat", "banget", "juga", "sudah",
            ]),
            dates: DateVocabulary {
                relative: relative(&[
                    ("besok", 1, Day),
                    ("minggu depan", 1, Week),
                    ("bulan depan", 1, Month),
                    ("tahun depan", 1, Year),
                ]),
                units: units(&[
                    ("hari", Day),
                    ("minggu", Week),
                    ("bulan", Month),
                    ("tahun", Year),
                ]),
                offset_prefixes: words(&["dalam"]),
                weekday_prefixes: words(&["pada", "hari"]),
                weekdays: weekdays(&[
                    ("senin", Monday),
                    ("selasa", Tuesday),
                    ("rabu", Wednesday),
                    ("kamis", Thursday),
                    ("jumat", Friday),
                    ("sabtu", Saturday),
                    ("minggu", Sunday),
                ]),
                explicit_prefixes: words(&["pada", "tanggal"]),
                same_day: words(&["hari ini", "nanti", "malam ini", "sore ini", "pagi ini"]),
            },
        }
    }

    /// Built-in vocabulary for a single locale code.
    pub fn for_locale(locale: &str) -> Result<Self, VocabularyError> {
        match locale.trim().to_lowercase().as_str() {
            "en" => Ok(Self::english()),
            "id" => Ok(Self::indonesian()),
            other => Err(VocabularyError::UnknownLocale(other.to_string())),
        }
    }

    /// Merged vocabulary for several locales, in the order given.
    pub fn for_locales<S: AsRef<str>>(locales: &[S]) -> Result<Self, VocabularyError> {
        let mut merged = Self::default();
        for locale in locales {
            merged.merge(Self::for_locale(locale.as_ref())?);
        }
        Ok(merged)
    }

    /// Union `other` into `self`. Existing entries keep their position; cues already
    /// present (compared case-insensitively on their phrase) are skipped.
    pub fn merge(&mut self, other: Vocabulary) {
        extend_unique(&mut self.intent_markers, other.intent_markers, String::as_str);
        extend_unique(&mut self.obligation_markers, other.obligation_markers, String::as_str);
        extend_unique(&mut self.clause_connectors, other.clause_connectors, String::as_str);
        extend_unique(&mut self.stopwords, other.stopwords, String::as_str);

        let dates = other.dates;
        extend_unique(&mut self.dates.relative, dates.relative, |c| c.phrase.as_str());
        extend_unique(&mut self.dates.units, dates.units, |c| c.word.as_str());
        extend_unique(&mut self.dates.offset_prefixes, dates.offset_prefixes, String::as_str);
        extend_unique(&mut self.dates.weekday_prefixes, dates.weekday_prefixes, String::as_str);
        extend_unique(&mut self.dates.weekdays, dates.weekdays, |c| c.name.as_str());
        extend_unique(&mut self.dates.explicit_prefixes, dates.explicit_prefixes, String::as_str);
        extend_unique(&mut self.dates.same_day, dates.same_day, String::as_str);
    }

    /// Parse a locale vocabulary from TOML.
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

fn extend_unique<T, F>(target: &mut Vec<T>, items: Vec<T>, key: F)
where
    F: Fn(&T) -> &str,
{
    for item in items {
        let k = key(&item).trim().to_lowercase();
        if k.is_empty() {
            continue;
        }
        if !target.iter().any(|t| key(t).trim().to_lowercase() == k) {
            target.push(item);
        }
    }
}
