//! 발음 정답 유연 매칭
//!
//! 가나 읽기를 한글로 옮긴 정답 표기에 대해, 학습자가 입력할 수 있는
//! 정당한 표기 변형을 허용합니다.
//!
//! - **발음(ん) 유연**: 받침 ㄴ/ㅁ/ㅇ 을 서로 바꿔 써도 정답
//! - **촉음(っ) 유연**: `미까` 를 `밋카`, `밌카`, `밋까` 로 써도 정답
//!
//! ```
//! use kanagrade::matching::ReadingMatcher;
//!
//! let matcher = ReadingMatcher::from_kana("みっか", true, true);
//! assert!(matcher.is_match("밋카"));
//! assert!(!matcher.is_match("밋타"));
//! ```

mod geminate;
mod nasal;
mod reading;

pub use geminate::{geminate_variants, GeminateLattice};
pub use nasal::{nasal_equivalent, NasalPattern};
pub use reading::{normalize_hangul, ReadingMatcher};
