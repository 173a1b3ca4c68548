//! 채점 진입점
//!
//! 모든 함수는 인자만 읽는 순수 함수이며, 호출 사이에 상태를 남기지 않습니다.

use crate::config::GradingConfig;
use crate::core::transliterator::kana_to_hangul;
use crate::matching::ReadingMatcher;
use crate::meaning::AnswerSet;

use super::options::{MeaningOptions, ReadingOptions};
use super::record::{QuizMode, WordRecord};

/// 정답 피드백 메시지
const CORRECT_MESSAGE: &str = "정답!";

/// 뜻 모드 채점
///
/// # Examples
/// ```
/// use kanagrade::{grade_by_meaning, MeaningOptions};
///
/// let partial = MeaningOptions::default();
/// assert!(grade_by_meaning("유의", "주의", "유의; 경계", &partial));
/// assert!(grade_by_meaning("경계심", "주의", "유의; 경계", &partial));
/// assert!(!grade_by_meaning("경계심", "주의", "유의; 경계", &partial.with_partial(false)));
/// ```
pub fn grade_by_meaning(
    user_text: &str,
    meaning: &str,
    alt_meanings: &str,
    options: &MeaningOptions,
) -> bool {
    AnswerSet::build(meaning, alt_meanings).is_match(user_text, options.partial)
}

/// 발음 모드 채점
///
/// 가나 읽기를 한글로 옮긴 뒤, 사용자 입력의 한글만 남겨 비교합니다.
///
/// # Examples
/// ```
/// use kanagrade::{grade_by_reading, ReadingOptions};
///
/// let options = ReadingOptions::default();
/// assert!(grade_by_reading("밋카", "みっか", &options));
/// assert!(!grade_by_reading("밋타", "みっか", &options));
/// ```
pub fn grade_by_reading(user_text: &str, kana_reading: &str, options: &ReadingOptions) -> bool {
    ReadingMatcher::from_kana(
        kana_reading,
        options.nasal_flexible,
        options.geminate_flexible,
    )
    .is_match(user_text)
}

/// 피드백에 보여 줄 정답 한글 표기
pub fn display_canonical_reading(kana_reading: &str) -> String {
    kana_to_hangul(kana_reading)
}

/// 뜻 모드 정답 표시 문자열
pub fn display_meaning(meaning: &str, alt_meanings: &str) -> String {
    if alt_meanings.trim().is_empty() {
        meaning.to_string()
    } else {
        format!("{} (허용: {})", meaning, alt_meanings)
    }
}

/// 채점 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// 정답 여부
    pub correct: bool,
    /// 정답 표시 문자열
    pub expected: String,
    /// 피드백 메시지
    pub message: String,
}

/// 설정을 묶어 둔 채점기
///
/// 내부 상태가 없으므로 여러 스레드에서 공유해도 됩니다.
#[derive(Debug, Clone, Default)]
pub struct Grader {
    config: GradingConfig,
}

impl Grader {
    /// 기본 설정 (부분 일치, ん/촉음 유연 모두 허용)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GradingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GradingConfig {
        &self.config
    }

    /// 레코드를 모드에 맞게 채점
    pub fn grade(&self, record: &WordRecord, mode: QuizMode, answer: &str) -> Verdict {
        let (correct, expected) = match mode {
            QuizMode::Meaning => (
                grade_by_meaning(
                    answer,
                    &record.meaning,
                    &record.alt_meanings,
                    &self.config.meaning,
                ),
                display_meaning(&record.meaning, &record.alt_meanings),
            ),
            QuizMode::Reading => (
                grade_by_reading(answer, &record.reading, &self.config.reading),
                display_canonical_reading(&record.reading),
            ),
        };

        let message = if correct {
            CORRECT_MESSAGE.to_string()
        } else {
            match mode {
                QuizMode::Meaning => format!("정답: {}", expected),
                QuizMode::Reading => format!("정답(한글 표기): {}", expected),
            }
        };

        log::debug!("{} [{:?}] '{}' -> {}", record.jp, mode, answer, correct);

        Verdict {
            correct,
            expected,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mikka() -> WordRecord {
        WordRecord::new("三日", "みっか", "삼일", "3일")
    }

    #[test]
    fn test_grade_by_meaning() {
        let options = MeaningOptions::default();
        assert!(grade_by_meaning("주의", "주의", "유의; 경계", &options));
        assert!(grade_by_meaning(" 주의 ", "주의", "", &options));
        assert!(!grade_by_meaning("", "주의", "", &options));
    }

    #[test]
    fn test_grade_by_reading_exact() {
        let exact = ReadingOptions::exact();
        assert!(grade_by_reading("미까", "みっか", &exact));
        assert!(!grade_by_reading("밋카", "みっか", &exact));
        assert!(!grade_by_reading("", "みっか", &exact));
    }

    #[test]
    fn test_display_canonical_reading() {
        assert_eq!(display_canonical_reading("みっか"), "미까");
        assert_eq!(display_canonical_reading("ケイケン"), "케이켕");
        assert_eq!(display_canonical_reading(""), "");
    }

    #[test]
    fn test_display_meaning() {
        assert_eq!(display_meaning("삼일", "3일"), "삼일 (허용: 3일)");
        assert_eq!(display_meaning("삼일", ""), "삼일");
    }

    #[test]
    fn test_grader_verdicts() {
        let grader = Grader::new();
        let record = mikka();

        let ok = grader.grade(&record, QuizMode::Reading, "밋카");
        assert!(ok.correct);
        assert_eq!(ok.message, "정답!");
        assert_eq!(ok.expected, "미까");

        let wrong = grader.grade(&record, QuizMode::Reading, "밋타");
        assert!(!wrong.correct);
        assert_eq!(wrong.message, "정답(한글 표기): 미까");

        let wrong = grader.grade(&record, QuizMode::Meaning, "사흘간");
        assert!(!wrong.correct);
        assert_eq!(wrong.message, "정답: 삼일 (허용: 3일)");
    }

    #[test]
    fn test_grader_uses_config() {
        let mut config = GradingConfig::default();
        config.reading = ReadingOptions::exact();
        let grader = Grader::with_config(config);
        assert_eq!(grader.config().reading, ReadingOptions::exact());
        assert!(grader.config().meaning.partial);
        assert!(!grader.grade(&mikka(), QuizMode::Reading, "밋카").correct);
        assert!(grader.grade(&mikka(), QuizMode::Reading, "미까").correct);
    }

    #[test]
    fn test_grader_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Grader>();
    }
}
