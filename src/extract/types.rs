//! Extraction result types.
//!
//! Defines [`Keyword`], [`PlanCandidate`] (a future intention, optionally dated),
//! [`PriorityCandidate`] (an obligation dated to the processing day), and the
//! [`ExtractionResult`] that bundles them for one journal entry.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A frequency-ranked token from the entry text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    /// Lowercase surface form.
    pub word: String,
    /// Occurrences within the entry.
    pub count: usize,
}

/// A detected future intention ("I will call mom next week").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanCandidate {
    /// Action phrase with intent verb, time phrase, and trailing clauses stripped.
    pub title: String,
    /// Resolved date, or `None` when the sentence carries no date cue.
    /// Serialized as `YYYY-MM-DD` or `null`.
    pub planned_date: Option<NaiveDate>,
}

/// A detected obligation ("I need to pay rent").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityCandidate {
    pub title: String,
    /// Always the reference date the entry was processed against.
    pub date: NaiveDate,
}

/// Everything extracted from one journal entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Reserved for an external mood classifier; never set by the extractor.
    pub mood: Option<String>,
    pub keywords: Vec<Keyword>,
    pub plans: Vec<PlanCandidate>,
    pub priorities: Vec<PriorityCandidate>,
}

impl ExtractionResult {
    /// `true` if nothing at all was extracted.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty() && self.plans.is_empty() && self.priorities.is_empty()
    }
}
