//! 단어 레코드와 출제 모드

use serde::{Deserialize, Serialize};

/// 출제 모드
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum QuizMode {
    /// 뜻(한국어)으로 답하기
    Meaning,
    /// 발음(한글 표기)으로 답하기
    Reading,
}

/// 외부 수집기가 넘겨주는 단어 레코드 (읽기 전용)
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct WordRecord {
    /// 표제어 (한자 등)
    #[serde(default)]
    pub jp: String,
    /// 가나 읽기
    #[serde(default)]
    pub reading: String,
    /// 주 뜻
    #[serde(default)]
    pub meaning: String,
    /// 대체 뜻 (구분자로 여러 개)
    #[serde(default)]
    pub alt_meanings: String,
    /// 학습일 (YYYY-MM-DD 또는 빈 문자열)
    #[serde(default)]
    pub study_date: String,
}

impl WordRecord {
    pub fn new(jp: &str, reading: &str, meaning: &str, alt_meanings: &str) -> Self {
        Self {
            jp: jp.to_string(),
            reading: reading.to_string(),
            meaning: meaning.to_string(),
            alt_meanings: alt_meanings.to_string(),
            study_date: String::new(),
        }
    }

    /// 해당 모드로 출제 가능한지 확인
    pub fn is_eligible(&self, mode: QuizMode) -> bool {
        match mode {
            QuizMode::Meaning => !self.meaning.trim().is_empty(),
            QuizMode::Reading => !self.reading.trim().is_empty(),
        }
    }
}
