//! 문제 힌트 (첫 글자 + 글자 수)

use super::record::{QuizMode, WordRecord};

/// 힌트
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    /// 정답 원문의 첫 글자
    pub first: char,
    /// 공백을 뺀 글자 수
    pub len: usize,
}

/// 레코드와 모드로 힌트 생성
/// - 발음 모드: 가나 읽기 기준
/// - 뜻 모드: 주 뜻의 첫 조각 (`;` `,` `/` 앞) 기준
pub fn hint(record: &WordRecord, mode: QuizMode) -> Option<Hint> {
    let source = match mode {
        QuizMode::Reading => record.reading.trim(),
        QuizMode::Meaning => record
            .meaning
            .split([';', ',', '/'])
            .next()
            .unwrap_or_default()
            .trim(),
    };
    let first = source.chars().next()?;
    let len = source.chars().filter(|c| !c.is_whitespace()).count();
    Some(Hint { first, len })
}
