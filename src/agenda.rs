//! Per-day agenda built from many entries.
//!
//! Plans become highlights on their planned day (or stay unscheduled); priorities are
//! accepted up to `max_priorities_per_day` per calendar day and the rest are reported
//! as rejected. This is the in-memory shape of what a journal store keeps, with the
//! same cap; nothing here is persisted.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::AgendaConfig;
use crate::extract::types::ExtractionResult;
use crate::extract::Extractor;

/// One journal entry as read from an agenda batch file.
#[derive(Debug, Clone, Deserialize)]
pub struct JournalEntry {
    /// Entry text. `null` is parsed as an empty entry; any non-string is a parse error.
    pub text: Option<String>,
    /// The day the entry was written; defaults to the batch reference date.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub title: String,
    /// Index of the entry this came from.
    pub entry: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgendaPriority {
    pub title: String,
    pub entry: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AgendaDay {
    pub highlights: Vec<Highlight>,
    pub priorities: Vec<AgendaPriority>,
    /// Priorities refused because the day was already full.
    pub rejected_priorities: Vec<AgendaPriority>,
}

/// What happened to one entry's candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AddOutcome {
    pub highlights: usize,
    pub priorities: usize,
    pub rejected: usize,
    pub duplicates: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Agenda {
    pub days: BTreeMap<NaiveDate, AgendaDay>,
    /// Plans with no resolved date.
    pub unscheduled: Vec<Highlight>,
    #[serde(skip)]
    max_priorities_per_day: usize,
}

impl Agenda {
    pub fn new(config: &AgendaConfig) -> Self {
        Self {
            days: BTreeMap::new(),
            unscheduled: Vec::new(),
            max_priorities_per_day: config.max_priorities_per_day,
        }
    }

    /// Add the candidates extracted from entry number `entry`.
    ///
    /// A priority whose title is already on its day counts as a duplicate, not a
    /// rejection.
    pub fn add(&mut self, entry: usize, result: &ExtractionResult) -> AddOutcome {
        let mut outcome = AddOutcome::default();

        for plan in &result.plans {
            let highlight = Highlight {
                title: plan.title.clone(),
                entry,
            };
            match plan.planned_date {
                Some(date) => self.days.entry(date).or_default().highlights.push(highlight),
                None => self.unscheduled.push(highlight),
            }
            outcome.highlights += 1;
        }

        for priority in &result.priorities {
            let day = self.days.entry(priority.date).or_default();
            let candidate = AgendaPriority {
                title: priority.title.clone(),
                entry,
            };
            if day.priorities.iter().any(|p| p.title == candidate.title) {
                outcome.duplicates += 1;
            } else if day.priorities.len() >= self.max_priorities_per_day {
                tracing::debug!(
                    date = %priority.date,
                    title = %candidate.title,
                    "priority rejected, day is full"
                );
                day.rejected_priorities.push(candidate);
                outcome.rejected += 1;
            } else {
                day.priorities.push(candidate);
                outcome.priorities += 1;
            }
        }

        outcome
    }

    pub fn day(&self, date: NaiveDate) -> Option<&AgendaDay> {
        self.days.get(&date)
    }
}

/// Parse every entry and fold the results into one agenda. Entries without a date
/// are processed against `today`.
pub fn build_agenda(
    extractor: &Extractor,
    entries: &[JournalEntry],
    today: NaiveDate,
    config: &AgendaConfig,
) -> Agenda {
    let mut agenda = Agenda::new(config);
    for (i, entry) in entries.iter().enumerate() {
        let reference = entry.date.unwrap_or(today);
        let result = extractor.parse_optional(entry.text.as_deref(), reference);
        let outcome = agenda.add(i, &result);
        tracing::debug!(
            entry = i,
            date = %reference,
            highlights = outcome.highlights,
            priorities = outcome.priorities,
            rejected = outcome.rejected,
            "entry added to agenda"
        );
    }
    agenda
}
