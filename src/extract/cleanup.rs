//! Action-phrase cleanup.
//!
//! Turns the raw tail captured after an intent or obligation marker into a short
//! action title: "to play padel tomorrow and then rest" becomes "play padel".

use std::sync::LazyLock;

use regex::Regex;

use super::alternation;
use super::vocabulary::Vocabulary;
use crate::error::VocabularyError;

static RE_LEADING_TO: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^\s*to\s+").unwrap());

const TRAILING_PUNCTUATION: &[char] = &[',', '.', ';', ':'];

#[derive(Debug)]
pub struct ActionCleaner {
    /// Any date cue through the end of the phrase.
    time_phrase: Option<Regex>,
    /// The first coordinating or causal clause through the end of the phrase.
    /// Connectors only match in lowercase, so "Dan" the name is not "dan" the
    /// Indonesian "and".
    clause: Option<Regex>,
    min_len: usize,
}

impl ActionCleaner {
    pub fn new(vocab: &Vocabulary, min_len: usize) -> Result<Self, VocabularyError> {
        let time_phrase = time_phrase_alternation(vocab)
            .map(|alt| Regex::new(&format!(r"(?is)\s*\b(?:{alt})\b.*$")))
            .transpose()
            .map_err(VocabularyError::pattern("time phrase"))?;
        let connectors: Vec<String> = vocab
            .clause_connectors
            .iter()
            .map(|c| c.to_lowercase())
            .collect();
        let clause = alternation(connectors.iter().map(String::as_str))
            .map(|alt| Regex::new(&format!(r"(?s)\s+(?:{alt})\s+.*$")))
            .transpose()
            .map_err(VocabularyError::pattern("clause connector"))?;

        Ok(Self {
            time_phrase,
            clause,
            min_len,
        })
    }

    /// Clean `raw` into an action title. `None` when the result is shorter than the
    /// minimum title length; callers decide whether that rejects the candidate.
    pub fn clean(&self, raw: &str) -> Option<String> {
        let mut phrase = RE_LEADING_TO.replace(raw, "").into_owned();
        if let Some(re) = &self.time_phrase {
            phrase = re.replace(&phrase, "").into_owned();
        }
        if let Some(re) = &self.clause {
            phrase = re.replace(&phrase, "").into_owned();
        }
        let phrase = phrase
            .trim_end()
            .trim_end_matches(TRAILING_PUNCTUATION)
            .trim();

        if phrase.chars().count() < self.min_len {
            None
        } else {
            Some(phrase.to_string())
        }
    }
}

/// Every date cue in the vocabulary as one alternation: same-day words, relative
/// phrases, `<prefix> <weekday>`, `<prefix> YYYY-MM-DD`, and numeric offsets with an
/// optional leading preposition.
fn time_phrase_alternation(vocab: &Vocabulary) -> Option<String> {
    let dates = &vocab.dates;
    let mut parts = Vec::new();

    let fixed = dates
        .same_day
        .iter()
        .map(String::as_str)
        .chain(dates.relative.iter().map(|c| c.phrase.as_str()));
    parts.extend(alternation(fixed));

    let weekday_prefixes = alternation(dates.weekday_prefixes.iter().map(String::as_str));
    let weekday_names = alternation(dates.weekdays.iter().map(|w| w.name.as_str()));
    if let (Some(prefixes), Some(names)) = (weekday_prefixes, weekday_names) {
        parts.push(format!(r"(?:{prefixes})\s+(?:{names})"));
    }

    if let Some(prefixes) = alternation(dates.explicit_prefixes.iter().map(String::as_str)) {
        parts.push(format!(r"(?:{prefixes})\s+\d{{4}}-\d{{2}}-\d{{2}}"));
    }

    if let Some(units) = alternation(dates.units.iter().map(|u| u.word.as_str())) {
        let prefix = alternation(dates.offset_prefixes.iter().map(String::as_str))
            .map(|p| format!(r"(?:(?:{p})\s+)?"))
            .unwrap_or_default();
        parts.push(format!(r"{prefix}\d+\s*(?:{units})s?"));
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("|"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cleaner() -> ActionCleaner {
        let vocab = Vocabulary::for_locales(&["en", "id"]).unwrap();
        ActionCleaner::new(&vocab, 3).unwrap()
    }

    #[test]
    fn strips_leading_to() {
        assert_eq!(cleaner().clean("to play padel").as_deref(), Some("play padel"));
        assert_eq!(cleaner().clean("To read").as_deref(), Some("read"));
        // only a leading "to" is removed
        assert_eq!(cleaner().clean("go to gym").as_deref(), Some("go to gym"));
    }

    #[test]
    fn strips_trailing_time_phrase() {
        let c = cleaner();
        assert_eq!(c.clean("buy groceries tomorrow").as_deref(), Some("buy groceries"));
        assert_eq!(c.clean("call mom next week").as_deref(), Some("call mom"));
        assert_eq!(c.clean("study this evening with Rina").as_deref(), Some("study"));
        assert_eq!(c.clean("meet Tom on Friday at noon").as_deref(), Some("meet Tom"));
        assert_eq!(c.clean("fly home on 2025-12-20").as_deref(), Some("fly home"));
        assert_eq!(c.clean("visit grandma in 3 days").as_deref(), Some("visit grandma"));
        assert_eq!(c.clean("pergi ke pasar besok pagi").as_deref(), Some("pergi ke pasar"));
    }

    #[test]
    fn strips_trailing_clause() {
        let c = cleaner();
        assert_eq!(c.clean("cook dinner and watch a movie").as_deref(), Some("cook dinner"));
        assert_eq!(c.clean("sleep early because I am tired").as_deref(), Some("sleep early"));
        assert_eq!(c.clean("beres-beres rumah lalu istirahat").as_deref(), Some("beres-beres rumah"));
        // connectors inside words are left alone
        assert_eq!(c.clean("fix the sandbox").as_deref(), Some("fix the sandbox"));
    }

    #[test]
    fn capitalized_connector_is_a_name() {
        let c = cleaner();
        assert_eq!(c.clean("call Dan and Sue").as_deref(), Some("call Dan"));
        assert_eq!(
            c.clean("email Dan about the invoice").as_deref(),
            Some("email Dan about the invoice")
        );
        assert_eq!(c.clean("tell Jadi so she knows").as_deref(), Some("tell Jadi"));
    }

    #[test]
    fn connectors_from_files_are_matched_lowercase() {
        let mut vocab = Vocabulary::english();
        vocab.clause_connectors = vec!["UND".into()];
        let c = ActionCleaner::new(&vocab, 3).unwrap();
        assert_eq!(c.clean("Brot kaufen und Milch").as_deref(), Some("Brot kaufen"));
    }

    #[test]
    fn strips_trailing_punctuation() {
        assert_eq!(cleaner().clean("pay rent;, ").as_deref(), Some("pay rent"));
        assert_eq!(cleaner().clean("write notes:").as_deref(), Some("write notes"));
    }

    #[test]
    fn rejects_too_short_results() {
        let c = cleaner();
        assert_eq!(c.clean("go tomorrow"), None);
        assert_eq!(c.clean("to  "), None);
        assert_eq!(c.clean("tonight"), None);
        assert_eq!(c.clean("run").as_deref(), Some("run"));
    }

    #[test]
    fn time_words_inside_words_are_kept() {
        assert_eq!(
            cleaner().clean("translate the laterals").as_deref(),
            Some("translate the laterals")
        );
    }
}
