//! Heuristic intent and priority extraction.
//!
//! [`Extractor`] is the single entry point. It runs a pure, single-pass pipeline over
//! one journal entry: sentence segmentation, keyword ranking over the whole text, then
//! per sentence the plan and priority detectors (each with date resolution and action
//! cleanup), and finally deduplication. The reference date is always passed in.

pub mod cleanup;
pub mod date;
pub mod keywords;
pub mod plan;
pub mod priority;
pub mod segment;
pub mod types;
pub mod vocabulary;

use std::collections::HashSet;
use std::hash::Hash;

use chrono::NaiveDate;
use regex::Regex;

use crate::config::ExtractorConfig;
use crate::error::VocabularyError;
use cleanup::ActionCleaner;
use date::{DateResolver, ResolvedDate};
use keywords::KeywordRanker;
use plan::PlanDetector;
use priority::PriorityDetector;
use types::ExtractionResult;
use vocabulary::Vocabulary;

/// Build a regex alternation from cue phrases. Longer phrases come first so that
/// "priority is to" wins over "priority" at the same position; inner whitespace
/// matches any whitespace run. Returns `None` if there is nothing to match.
pub(crate) fn alternation<'a>(phrases: impl IntoIterator<Item = &'a str>) -> Option<String> {
    let mut phrases: Vec<&str> = phrases
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    if phrases.is_empty() {
        return None;
    }
    phrases.sort_by_key(|p| std::cmp::Reverse(p.chars().count()));
    let parts: Vec<String> = phrases
        .iter()
        .map(|p| {
            p.split_whitespace()
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(r"\s+")
        })
        .collect();
    Some(parts.join("|"))
}

/// Lookup key for a matched cue: lowercase, single-spaced.
pub(crate) fn cue_key(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Marker regex shared by the plan and priority detectors: a marker, whitespace or a
/// colon ("priority: taxes"), then 3..=`max_len` characters up to the next sentence
/// terminator, captured.
pub(crate) fn marker_pattern(
    kind: &'static str,
    markers: &[String],
    max_len: usize,
) -> Result<Regex, VocabularyError> {
    let alt = alternation(markers.iter().map(String::as_str))
        .ok_or(VocabularyError::EmptyCues(kind))?;
    let max_len = max_len.max(3);
    Regex::new(&format!(r"(?i)\b(?:{alt})\b[\s:]+([^.!?]{{3,{max_len}}})"))
        .map_err(VocabularyError::pattern(kind))
}

/// Keep the first occurrence of each key, in order.
fn dedupe_by_key<T, K, F>(items: Vec<T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    items.into_iter().filter(|item| seen.insert(key(item))).collect()
}

/// A compiled extractor. Immutable once built, so one instance can serve any
/// number of concurrent callers.
#[derive(Debug)]
pub struct Extractor {
    vocabulary: Vocabulary,
    dates: DateResolver,
    cleaner: ActionCleaner,
    keywords: KeywordRanker,
    plans: PlanDetector,
    priorities: PriorityDetector,
    dedupe: bool,
}

impl Extractor {
    /// Compile `vocabulary` under the tuning knobs in `config`. Locale and file
    /// settings in `config` are not consulted here; see
    /// [`ExtractorConfig::load_vocabulary`].
    pub fn new(config: &ExtractorConfig, vocabulary: Vocabulary) -> Result<Self, VocabularyError> {
        let dates = DateResolver::new(&vocabulary.dates, config.month_overflow)?;
        let cleaner = ActionCleaner::new(&vocabulary, config.min_title_len)?;
        let keywords = KeywordRanker::new(&vocabulary.stopwords, config.keyword_limit);
        let plans = PlanDetector::new(&vocabulary.intent_markers, config.max_action_len)?;
        let priorities =
            PriorityDetector::new(&vocabulary.obligation_markers, config.max_action_len)?;

        tracing::debug!(
            intent_markers = vocabulary.intent_markers.len(),
            obligation_markers = vocabulary.obligation_markers.len(),
            stopwords = vocabulary.stopwords.len(),
            "extractor compiled"
        );

        Ok(Self {
            vocabulary,
            dates,
            cleaner,
            keywords,
            plans,
            priorities,
            dedupe: config.dedupe,
        })
    }

    /// Extractor over the built-in bilingual vocabulary with default settings.
    pub fn builtin() -> Result<Self, VocabularyError> {
        let config = ExtractorConfig::default();
        let vocabulary = Vocabulary::for_locales(&config.locales)?;
        Self::new(&config, vocabulary)
    }

    /// Parse one journal entry against `reference` ("today").
    pub fn parse_entry(&self, text: &str, reference: NaiveDate) -> ExtractionResult {
        let sentences = segment::split_sentences(text);
        let keywords = self.keywords.rank(text);

        let mut plans = Vec::new();
        let mut priorities = Vec::new();
        for sentence in &sentences {
            if let Some(plan) = self.plans.detect(sentence, reference, &self.dates, &self.cleaner) {
                plans.push(plan);
            }
            if let Some(priority) = self.priorities.detect(sentence, reference, &self.cleaner) {
                priorities.push(priority);
            }
        }

        if self.dedupe {
            plans = dedupe_by_key(plans, |p| (p.title.clone(), p.planned_date));
            priorities = dedupe_by_key(priorities, |p| (p.title.clone(), p.date));
        }

        tracing::debug!(
            sentences = sentences.len(),
            keywords = keywords.len(),
            plans = plans.len(),
            priorities = priorities.len(),
            "entry parsed"
        );

        ExtractionResult {
            mood: None,
            keywords,
            plans,
            priorities,
        }
    }

    /// Missing text is parsed as the empty entry.
    pub fn parse_optional(&self, text: Option<&str>, reference: NaiveDate) -> ExtractionResult {
        self.parse_entry(text.unwrap_or_default(), reference)
    }

    /// Resolve the first date cue in `phrase`.
    pub fn resolve_date(&self, reference: NaiveDate, phrase: &str) -> Option<ResolvedDate> {
        self.dates.resolve_cue(reference, phrase)
    }

    /// The vocabulary this extractor was compiled from.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }
}
