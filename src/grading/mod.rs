//! 채점 오케스트레이터
//!
//! 두 출제 모드의 공개 진입점입니다.
//!
//! 1. **뜻 모드**: 답안과 뜻/대체 뜻을 정규화해 비교 (`meaning`)
//! 2. **발음 모드**: 가나 읽기를 한글로 옮긴 뒤 유연 매칭 (`core`, `matching`)
//!
//! # 사용 예시
//!
//! ```
//! use kanagrade::grading::{Grader, QuizMode, WordRecord};
//!
//! let record = WordRecord::new("三日", "みっか", "삼일", "3일");
//! let grader = Grader::new();
//!
//! assert!(grader.grade(&record, QuizMode::Meaning, "3일").correct);
//! assert!(grader.grade(&record, QuizMode::Reading, "밋카").correct);
//!
//! let verdict = grader.grade(&record, QuizMode::Reading, "밋타");
//! assert_eq!(verdict.message, "정답(한글 표기): 미까");
//! ```

mod grader;
mod hint;
mod options;
mod record;

pub use grader::{
    display_canonical_reading, display_meaning, grade_by_meaning, grade_by_reading, Grader,
    Verdict,
};
pub use hint::{hint, Hint};
pub use options::{MeaningOptions, ReadingOptions};
pub use record::{QuizMode, WordRecord};
