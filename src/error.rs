//! Errors raised while building an extractor from a vocabulary.
//!
//! Extraction itself is total over its input, so these only surface when a
//! vocabulary (built-in or loaded from a locale file) cannot be compiled.

use thiserror::Error;

use crate::extract::vocabulary::BUILTIN_LOCALES;

#[derive(Debug, Error)]
pub enum VocabularyError {
    /// A cue list that drives a detector ended up empty after merging.
    #[error("vocabulary has no {0} cues")]
    EmptyCues(&'static str),

    /// The locale name is not one of the built-in vocabularies.
    #[error("unknown locale: {0}. Supported: {supported}", supported = BUILTIN_LOCALES.join(", "))]
    UnknownLocale(String),

    /// A cue list produced a pattern the regex engine rejected.
    #[error("failed to compile {kind} pattern")]
    Pattern {
        kind: &'static str,
        #[source]
        source: regex::Error,
    },
}

impl VocabularyError {
    pub(crate) fn pattern(kind: &'static str) -> impl FnOnce(regex::Error) -> Self {
        move |source| Self::Pattern { kind, source }
    }
}
