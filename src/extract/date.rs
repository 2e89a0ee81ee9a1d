//! Relative date resolution.
//!
//! [`DateResolver`] compiles a [`DateVocabulary`] into an ordered table of
//! [`DateRule`]s. Resolution walks the table and returns the first rule that
//! yields a real calendar date:
//!
//! 1. relative phrases, ordered by the size of their shift (tomorrow, next week,
//!    next month, next year); a phrase containing another goes first
//! 2. numeric offsets (`3 days`, `2 minggu`)
//! 3. `on <weekday>`, strictly after the reference date
//! 4. `on YYYY-MM-DD`, only if the date exists
//! 5. same-day words (today, later, tonight, ...)
//!
//! A cue that does not produce a valid date (`on 2025-02-30`, an offset that
//! overflows the calendar) is treated as no match and resolution falls through.

use std::collections::HashMap;
use std::fmt;

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{alternation, cue_key};
use super::vocabulary::{DateUnit, DateVocabulary, RelativeCue, Shift};
use crate::error::VocabularyError;

/// How month and year shifts treat a day-of-month the target month lacks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthOverflow {
    /// Jan 31 + 1 month → Feb 28 (or 29). Feb 29 + 1 year → Feb 28.
    #[default]
    Clamp,
    /// Jan 31 + 1 month → Mar 3 (Mar 2 in leap years). Feb 29 + 1 year → Mar 1.
    Rollover,
}

impl std::str::FromStr for MonthOverflow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clamp" => Ok(Self::Clamp),
            "rollover" => Ok(Self::Rollover),
            _ => Err(format!("unknown month overflow policy: {s}")),
        }
    }
}

/// Which kind of rule produced a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    Relative,
    Offset,
    Weekday,
    Explicit,
    SameDay,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Relative => "relative",
            Self::Offset => "offset",
            Self::Weekday => "weekday",
            Self::Explicit => "explicit",
            Self::SameDay => "same_day",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved date together with the rule and text that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDate {
    pub date: NaiveDate,
    pub rule: RuleKind,
    /// The matched cue as it appears in the input.
    pub cue: String,
}

/// One entry of the ordered resolution table.
#[derive(Debug)]
enum DateRule {
    Relative { pattern: Regex, shift: Shift },
    Offset { pattern: Regex, units: HashMap<String, DateUnit> },
    Weekday { pattern: Regex, days: HashMap<String, Weekday> },
    Explicit { pattern: Regex },
    SameDay { pattern: Regex },
}

impl DateRule {
    fn kind(&self) -> RuleKind {
        match self {
            Self::Relative { .. } => RuleKind::Relative,
            Self::Offset { .. } => RuleKind::Offset,
            Self::Weekday { .. } => RuleKind::Weekday,
            Self::Explicit { .. } => RuleKind::Explicit,
            Self::SameDay { .. } => RuleKind::SameDay,
        }
    }

    fn apply(
        &self,
        reference: NaiveDate,
        text: &str,
        overflow: MonthOverflow,
    ) -> Option<(NaiveDate, String)> {
        match self {
            Self::Relative { pattern, shift } => {
                let m = pattern.find(text)?;
                let date = shift_date(reference, *shift, overflow)?;
                Some((date, m.as_str().to_string()))
            }
            Self::SameDay { pattern } => {
                let m = pattern.find(text)?;
                Some((reference, m.as_str().to_string()))
            }
            Self::Offset { pattern, units } => pattern.captures_iter(text).find_map(|caps| {
                let amount: u32 = caps[1].parse().ok()?;
                let unit = *units.get(&cue_key(&caps[2]))?;
                let date = shift_date(reference, Shift::new(amount, unit), overflow)?;
                Some((date, caps[0].to_string()))
            }),
            Self::Weekday { pattern, days } => {
                let caps = pattern.captures(text)?;
                let day = *days.get(&cue_key(&caps[1]))?;
                Some((next_weekday(reference, day)?, caps[0].to_string()))
            }
            Self::Explicit { pattern } => pattern.captures_iter(text).find_map(|caps| {
                let year: i32 = caps[1].parse().ok()?;
                let month: u32 = caps[2].parse().ok()?;
                let day: u32 = caps[3].parse().ok()?;
                let date = NaiveDate::from_ymd_opt(year, month, day)?;
                Some((date, caps[0].to_string()))
            }),
        }
    }
}

fn compile(kind: &'static str, pattern: &str) -> Result<Regex, VocabularyError> {
    Regex::new(pattern).map_err(VocabularyError::pattern(kind))
}

/// Compiled, immutable date-cue table.
#[derive(Debug)]
pub struct DateResolver {
    rules: Vec<DateRule>,
    overflow: MonthOverflow,
}

impl DateResolver {
    /// Compile the vocabulary into the ordered rule table. Cue groups that are
    /// empty contribute no rule.
    pub fn new(vocab: &DateVocabulary, overflow: MonthOverflow) -> Result<Self, VocabularyError> {
        let mut rules = Vec::new();

        for cue in relative_order(&vocab.relative) {
            if let Some(alt) = alternation([cue.phrase.as_str()]) {
                rules.push(DateRule::Relative {
                    pattern: compile("relative date", &format!(r"(?i)\b(?:{alt})\b"))?,
                    shift: cue.shift,
                });
            }
        }

        if let Some(alt) = alternation(vocab.units.iter().map(|u| u.word.as_str())) {
            let units = vocab
                .units
                .iter()
                .map(|u| (cue_key(&u.word), u.unit))
                .collect();
            rules.push(DateRule::Offset {
                pattern: compile("date offset", &format!(r"(?i)\b(\d{{1,9}})\s*({alt})s?\b"))?,
                units,
            });
        }

        if let (Some(prefixes), Some(names)) = (
            alternation(vocab.weekday_prefixes.iter().map(String::as_str)),
            alternation(vocab.weekdays.iter().map(|w| w.name.as_str())),
        ) {
            let days = vocab
                .weekdays
                .iter()
                .map(|w| (cue_key(&w.name), Weekday::from(w.day)))
                .collect();
            rules.push(DateRule::Weekday {
                pattern: compile("weekday", &format!(r"(?i)\b(?:{prefixes})\s+({names})\b"))?,
                days,
            });
        }

        if let Some(prefixes) = alternation(vocab.explicit_prefixes.iter().map(String::as_str)) {
            rules.push(DateRule::Explicit {
                pattern: compile(
                    "explicit date",
                    &format!(r"(?i)\b(?:{prefixes})\s+(\d{{4}})-(\d{{2}})-(\d{{2}})\b"),
                )?,
            });
        }

        if let Some(alt) = alternation(vocab.same_day.iter().map(String::as_str)) {
            rules.push(DateRule::SameDay {
                pattern: compile("same-day", &format!(r"(?i)\b(?:{alt})\b"))?,
            });
        }

        Ok(Self { rules, overflow })
    }

    /// Resolve the first date cue in `text` against `reference`.
    pub fn resolve(&self, reference: NaiveDate, text: &str) -> Option<NaiveDate> {
        self.resolve_cue(reference, text).map(|r| r.date)
    }

    /// Like [`resolve`](Self::resolve), also reporting which rule matched.
    pub fn resolve_cue(&self, reference: NaiveDate, text: &str) -> Option<ResolvedDate> {
        self.rules.iter().find_map(|rule| {
            rule.apply(reference, text, self.overflow)
                .map(|(date, cue)| ResolvedDate {
                    date,
                    rule: rule.kind(),
                    cue,
                })
        })
    }

}

/// Relative cues in the order they are tried: smallest shift first, except that a
/// phrase containing another cue's phrase ("day after tomorrow" vs "tomorrow") is
/// always tried before it.
fn relative_order(cues: &[RelativeCue]) -> Vec<&RelativeCue> {
    let mut sorted: Vec<&RelativeCue> = cues.iter().collect();
    sorted.sort_by_key(|cue| (cue.shift.unit, cue.shift.amount));

    let mut ordered: Vec<&RelativeCue> = Vec::with_capacity(sorted.len());
    for cue in sorted {
        let key = cue_key(&cue.phrase);
        let at = ordered
            .iter()
            .position(|placed| contains_phrase(&key, &cue_key(&placed.phrase)))
            .unwrap_or(ordered.len());
        ordered.insert(at, cue);
    }
    ordered
}

/// Whole-word containment of normalized phrases.
fn contains_phrase(outer: &str, inner: &str) -> bool {
    outer != inner && format!(" {outer} ").contains(&format!(" {inner} "))
}

/// Shift `reference` forward. `None` when the result leaves chrono's range.
pub fn shift_date(reference: NaiveDate, shift: Shift, overflow: MonthOverflow) -> Option<NaiveDate> {
    match shift.unit {
        DateUnit::Day => reference.checked_add_days(Days::new(u64::from(shift.amount))),
        DateUnit::Week => reference.checked_add_days(Days::new(u64::from(shift.amount) * 7)),
        DateUnit::Month => add_months(reference, shift.amount, overflow),
        DateUnit::Year => add_months(reference, shift.amount.checked_mul(12)?, overflow),
    }
}

fn add_months(date: NaiveDate, months: u32, overflow: MonthOverflow) -> Option<NaiveDate> {
    match overflow {
        // chrono clamps to the last day of the target month
        MonthOverflow::Clamp => date.checked_add_months(Months::new(months)),
        MonthOverflow::Rollover => date
            .with_day(1)?
            .checked_add_months(Months::new(months))?
            .checked_add_days(Days::new(u64::from(date.day() - 1))),
    }
}

/// Next occurrence of `day` strictly after `reference`. `None` past the end of
/// chrono's range.
pub fn next_weekday(reference: NaiveDate, day: Weekday) -> Option<NaiveDate> {
    let current = reference.weekday().num_days_from_monday();
    let target = day.num_days_from_monday();
    let ahead = match (target + 7 - current) % 7 {
        0 => 7,
        n => n,
    };
    reference.checked_add_days(Days::new(u64::from(ahead)))
}
