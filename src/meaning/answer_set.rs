//! 뜻 정답 후보 집합

use std::collections::HashSet;

use super::normalize::normalize_meaning;

/// 단어 구분자 (`or`, `또는` 은 앞뒤 공백이 있어야 구분자)
const DELIMITERS: &[char] = &[';', ',', '/'];
const WORD_DELIMITERS: &[&str] = &["or", "또는"];

/// 부분 일치 판정에 쓰는 후보 최소 길이 (글자 수)
const PARTIAL_MIN_LEN: usize = 2;

/// 구분자로 뜻 필드를 나눔 (정규화 전 원문 조각)
pub fn split_meanings(field: &str) -> Vec<String> {
    let chars: Vec<char> = field.chars().collect();
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if DELIMITERS.contains(&c) {
            pieces.push(std::mem::take(&mut current));
            i += 1;
            continue;
        }
        if let Some(skip) = word_delimiter_at(&chars, i) {
            pieces.push(std::mem::take(&mut current));
            i += skip;
            continue;
        }
        current.push(c);
        i += 1;
    }
    pieces.push(current);
    pieces
}

/// `공백 + 단어 + 공백` 구분자면 소비할 글자 수
fn word_delimiter_at(chars: &[char], start: usize) -> Option<usize> {
    if !chars[start].is_whitespace() {
        return None;
    }
    WORD_DELIMITERS.iter().find_map(|word| {
        let word: Vec<char> = word.chars().collect();
        let end = start + 1 + word.len();
        let matches = chars.get(start + 1..end) == Some(word.as_slice())
            && chars.get(end).is_some_and(|c| c.is_whitespace());
        matches.then_some(word.len() + 2)
    })
}

/// 정규화된 정답 후보 집합
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    answers: HashSet<String>,
}

impl AnswerSet {
    /// 뜻 + 대체 뜻 필드로 후보 집합 생성 (빈 조각은 버림)
    pub fn build(meaning: &str, alt_meanings: &str) -> Self {
        let answers = split_meanings(meaning)
            .iter()
            .chain(split_meanings(alt_meanings).iter())
            .map(|piece| normalize_meaning(piece))
            .filter(|answer| !answer.is_empty())
            .collect();
        Self { answers }
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// 정규화된 후보가 들어 있는지 확인
    pub fn contains(&self, normalized: &str) -> bool {
        self.answers.contains(normalized)
    }

    /// 사용자 답안 판정
    /// - 정규화 후 비어 있으면 오답
    /// - 후보와 정확히 일치하면 정답
    /// - `partial` 이면 2글자 이상 후보와 어느 한쪽이 다른 쪽을 포함해도 정답
    pub fn is_match(&self, user_input: &str, partial: bool) -> bool {
        let user = normalize_meaning(user_input);
        if user.is_empty() {
            return false;
        }
        if self.contains(&user) {
            return true;
        }
        partial
            && self.answers.iter().any(|answer| {
                answer.chars().count() >= PARTIAL_MIN_LEN
                    && (answer.contains(user.as_str()) || user.contains(answer.as_str()))
            })
    }
}
