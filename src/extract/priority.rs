//! Priority detection: obligations such as "I need to pay rent".
//!
//! Priorities are always dated to the reference date. Unlike plans there is no
//! forward dating, even when the sentence names a future day.

use chrono::NaiveDate;
use regex::Regex;

use super::cleanup::ActionCleaner;
use super::marker_pattern;
use super::types::PriorityCandidate;
use crate::error::VocabularyError;

#[derive(Debug)]
pub struct PriorityDetector {
    pattern: Regex,
}

impl PriorityDetector {
    pub fn new(
        obligation_markers: &[String],
        max_action_len: usize,
    ) -> Result<Self, VocabularyError> {
        Ok(Self {
            pattern: marker_pattern("obligation", obligation_markers, max_action_len)?,
        })
    }

    pub fn detect(
        &self,
        sentence: &str,
        reference: NaiveDate,
        cleaner: &ActionCleaner,
    ) -> Option<PriorityCandidate> {
        let caps = self.pattern.captures(sentence)?;
        let title = cleaner.clean(&caps[1])?;
        Some(PriorityCandidate {
            title,
            date: reference,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::vocabulary::Vocabulary;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
    }

    fn detect(sentence: &str) -> Option<PriorityCandidate> {
        let vocab = Vocabulary::for_locales(&["en", "id"]).unwrap();
        let detector = PriorityDetector::new(&vocab.obligation_markers, 120).unwrap();
        let cleaner = ActionCleaner::new(&vocab, 3).unwrap();
        detector.detect(sentence, reference(), &cleaner)
    }

    fn title(sentence: &str) -> Option<String> {
        detect(sentence).map(|p| p.title)
    }

    #[test]
    fn detects_obligation_markers() {
        assert_eq!(title("I need to finish the report.").as_deref(), Some("finish the report"));
        assert_eq!(title("I must call the bank!").as_deref(), Some("call the bank"));
        assert_eq!(title("I should drink more water").as_deref(), Some("drink more water"));
        assert_eq!(title("We have to move the car.").as_deref(), Some("move the car"));
    }

    #[test]
    fn priority_phrasings() {
        assert_eq!(title("My priority is to rest.").as_deref(), Some("rest"));
        assert_eq!(title("Top priority: the taxes").as_deref(), Some("the taxes"));
        assert_eq!(title("Priority:pay rent").as_deref(), Some("pay rent"));
        assert_eq!(title("My priority is sleep").as_deref(), Some("sleep"));
        assert_eq!(title("First priority finish slides").as_deref(), Some("finish slides"));
    }

    #[test]
    fn future_cue_is_ignored_for_the_date() {
        let found = detect("I must renew my passport next month.").unwrap();
        assert_eq!(found.title, "renew my passport");
        assert_eq!(found.date, reference());
    }

    #[test]
    fn indonesian_obligation() {
        assert_eq!(title("Aku harus bayar listrik hari ini.").as_deref(), Some("bayar listrik"));
        assert_eq!(title("Saya wajib lapor pajak").as_deref(), Some("lapor pajak"));
    }

    #[test]
    fn no_obligation_no_priority() {
        assert_eq!(detect("I will buy groceries tomorrow."), None);
        assert_eq!(detect("I must go."), None);
    }
}
