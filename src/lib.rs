pub mod config;
pub mod core;
pub mod grading;
pub mod matching;
pub mod meaning;

pub use crate::core::transliterator::kana_to_hangul;
pub use config::{load_config, ConfigError, GradingConfig};
pub use grading::{
    display_canonical_reading, grade_by_meaning, grade_by_reading, Grader, MeaningOptions,
    QuizMode, ReadingOptions, Verdict, WordRecord,
};
pub use meaning::normalize_meaning;
