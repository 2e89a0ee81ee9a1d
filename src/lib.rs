//! Journal entry extraction. Deterministic plans, priorities, and keywords from
//! free-text diary entries.
//!
//! Journey reads one entry at a time and returns an [`ExtractionResult`]:
//!
//! | Field | Contents |
//! |-------|----------|
//! | **keywords** | Up to 3 most frequent non-stopword tokens |
//! | **plans** | Future intentions ("I will ...") with an optional resolved date |
//! | **priorities** | Obligations ("I need to ...") dated to the reference day |
//! | **mood** | Always `null`; reserved for an external classifier |
//!
//! ```
//! use chrono::NaiveDate;
//! use journey::Extractor;
//!
//! let extractor = Extractor::builtin().unwrap();
//! let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
//! let result = extractor.parse_entry("I will buy groceries tomorrow.", today);
//! assert_eq!(result.plans[0].title, "buy groceries");
//! assert_eq!(result.plans[0].planned_date, NaiveDate::from_ymd_opt(2025, 6, 11));
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from TOML files and environment variables
//! - [`extract`]: Segmentation, keyword ranking, date resolution, and the detectors
//! - [`agenda`]: Folding many entries into a per-day agenda with a priority cap
//! - [`error`]: Vocabulary compilation errors

pub mod agenda;
pub mod config;
pub mod error;
pub mod extract;

pub use error::VocabularyError;
pub use extract::types::{ExtractionResult, Keyword, PlanCandidate, PriorityCandidate};
pub use extract::vocabulary::Vocabulary;
pub use extract::Extractor;
