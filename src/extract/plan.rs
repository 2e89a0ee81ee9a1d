//! Plan detection: future intentions such as "I will call mom next week".

use chrono::NaiveDate;
use regex::Regex;

use super::cleanup::ActionCleaner;
use super::date::DateResolver;
use super::marker_pattern;
use super::types::PlanCandidate;
use crate::error::VocabularyError;

#[derive(Debug)]
pub struct PlanDetector {
    pattern: Regex,
}

impl PlanDetector {
    /// `max_action_len` bounds how many characters after the marker are captured.
    pub fn new(intent_markers: &[String], max_action_len: usize) -> Result<Self, VocabularyError> {
        Ok(Self {
            pattern: marker_pattern("intent", intent_markers, max_action_len)?,
        })
    }

    /// Detect a plan in one sentence.
    ///
    /// The date is resolved over the whole sentence, so a cue before the marker
    /// ("Tomorrow I will ...") still counts; no cue leaves `planned_date` empty. A
    /// phrase that cleans down to nothing usable drops the candidate.
    pub fn detect(
        &self,
        sentence: &str,
        reference: NaiveDate,
        dates: &DateResolver,
        cleaner: &ActionCleaner,
    ) -> Option<PlanCandidate> {
        let caps = self.pattern.captures(sentence)?;
        let title = cleaner.clean(&caps[1])?;
        Some(PlanCandidate {
            title,
            planned_date: dates.resolve(reference, sentence),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::date::MonthOverflow;
    use crate::extract::vocabulary::Vocabulary;

    struct Fixture {
        detector: PlanDetector,
        dates: DateResolver,
        cleaner: ActionCleaner,
    }

    impl Fixture {
        fn new() -> Self {
            let vocab = Vocabulary::for_locales(&["en", "id"]).unwrap();
            Self {
                detector: PlanDetector::new(&vocab.intent_markers, 120).unwrap(),
                dates: DateResolver::new(&vocab.dates, MonthOverflow::Clamp).unwrap(),
                cleaner: ActionCleaner::new(&vocab, 3).unwrap(),
            }
        }

        fn detect(&self, sentence: &str) -> Option<PlanCandidate> {
            self.detector
                .detect(sentence, reference(), &self.dates, &self.cleaner)
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn reference() -> NaiveDate {
        date(2025, 6, 10)
    }

    fn plan(title: &str, planned_date: Option<NaiveDate>) -> Option<PlanCandidate> {
        Some(PlanCandidate {
            title: title.into(),
            planned_date,
        })
    }

    #[test]
    fn detects_each_intent_marker() {
        let f = Fixture::new();
        for sentence in [
            "I will read a book.",
            "I plan to read a book.",
            "I want to read a book.",
            "I'm going to read a book.",
            "I'm gonna read a book.",
            "I have to read a book.",
            "I need to read a book.",
        ] {
            assert_eq!(f.detect(sentence), plan("read a book", None), "{sentence}");
        }
    }

    #[test]
    fn resolves_tomorrow() {
        let f = Fixture::new();
        assert_eq!(
            f.detect("I will buy groceries tomorrow."),
            plan("buy groceries", Some(date(2025, 6, 11)))
        );
    }

    #[test]
    fn date_cue_before_marker_counts() {
        let f = Fixture::new();
        assert_eq!(
            f.detect("Tomorrow I will clean the garage."),
            plan("clean the garage", Some(date(2025, 6, 11)))
        );
    }

    #[test]
    fn same_day_words_resolve_to_reference() {
        let f = Fixture::new();
        assert_eq!(
            f.detect("I want to stretch later."),
            plan("stretch", Some(reference()))
        );
        assert_eq!(
            f.detect("I am going to cook this evening."),
            plan("cook", Some(reference()))
        );
    }

    #[test]
    fn invalid_explicit_date_yields_no_date() {
        let f = Fixture::new();
        assert_eq!(f.detect("on 2025-02-30 I will travel."), plan("travel", None));
    }

    #[test]
    fn explicit_date() {
        let f = Fixture::new();
        assert_eq!(
            f.detect("I will fly home on 2025-12-20."),
            plan("fly home", Some(date(2025, 12, 20)))
        );
    }

    #[test]
    fn no_marker_no_plan() {
        let f = Fixture::new();
        assert_eq!(f.detect("Feeling okay today, nothing special."), None);
        // marker must be a whole word
        assert_eq!(f.detect("She is willing to help."), None);
    }

    #[test]
    fn short_cleaned_title_is_rejected() {
        let f = Fixture::new();
        // "go" survives cleanup but is under three characters
        assert_eq!(f.detect("I will go tomorrow."), None);
        // fewer than three characters after the marker never matches
        assert_eq!(f.detect("I will."), None);
    }

    #[test]
    fn indonesian_intent() {
        let f = Fixture::new();
        assert_eq!(
            f.detect("Aku akan main padel besok."),
            plan("main padel", Some(date(2025, 6, 11)))
        );
        assert_eq!(
            f.detect("Saya mau ke dokter minggu depan."),
            plan("ke dokter", Some(date(2025, 6, 17)))
        );
    }

    #[test]
    fn capture_is_bounded() {
        let vocab = Vocabulary::english();
        let detector = PlanDetector::new(&vocab.intent_markers, 10).unwrap();
        let dates = DateResolver::new(&vocab.dates, MonthOverflow::Clamp).unwrap();
        let cleaner = ActionCleaner::new(&vocab, 3).unwrap();
        let found = detector
            .detect("I will organize the entire bookshelf", reference(), &dates, &cleaner)
            .unwrap();
        assert_eq!(found.title, "organize t");
    }
}
