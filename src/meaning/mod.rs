//! 뜻(한국어) 답안 정규화 및 비교

mod answer_set;
mod normalize;

pub use answer_set::{split_meanings, AnswerSet};
pub use normalize::normalize_meaning;
