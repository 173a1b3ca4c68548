//! 발음(ん) 유연 매칭
//!
//! 정답 표기에서 받침이 ㄴ/ㅁ/ㅇ 인 음절은 같은 초성+중성의
//! ㄴ/ㅁ/ㅇ 받침 세 가지를 모두 허용합니다.

use crate::core::unicode::{compose_syllable, decompose_syllable, jong};

/// 비음 받침 세 가지
const NASAL_JONGSEONG: [u32; 3] = [jong::NIEUN, jong::MIEUM, jong::IEUNG];

/// 정답 한 글자 위치의 허용 문자
#[derive(Debug, Clone, PartialEq, Eq)]
enum Slot {
    /// 정확히 일치해야 함
    Exact(char),
    /// 비음 받침 세 가지 중 하나
    Nasal([char; 3]),
}

impl Slot {
    fn accepts(&self, c: char) -> bool {
        match self {
            Slot::Exact(expected) => *expected == c,
            Slot::Nasal(choices) => choices.contains(&c),
        }
    }
}

/// 위치별 허용 문자 집합으로 표현한 정답 패턴
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NasalPattern {
    slots: Vec<Slot>,
}

impl NasalPattern {
    /// 정답 표기에서 패턴 생성
    pub fn new(answer: &str) -> Self {
        let slots = answer.chars().map(slot_for).collect();
        Self { slots }
    }

    /// 입력 전체가 패턴과 일치하는지 확인
    pub fn matches(&self, input: &str) -> bool {
        let mut chars = input.chars();
        for slot in &self.slots {
            match chars.next() {
                Some(c) if slot.accepts(c) => {}
                _ => return false,
            }
        }
        chars.next().is_none()
    }
}

/// 정답 글자 `expected` 자리에 `actual` 을 써도 되는지 (비음 받침 교체 허용)
pub fn nasal_equivalent(expected: char, actual: char) -> bool {
    slot_for(expected).accepts(actual)
}

fn slot_for(c: char) -> Slot {
    let Some((cho, jung, jongseong)) = decompose_syllable(c) else {
        return Slot::Exact(c);
    };
    if !NASAL_JONGSEONG.contains(&jongseong) {
        return Slot::Exact(c);
    }

    let mut choices = [c; 3];
    for (choice, nasal) in choices.iter_mut().zip(NASAL_JONGSEONG) {
        if let Some(alt) = compose_syllable(cho, jung, nasal) {
            *choice = alt;
        }
    }
    Slot::Nasal(choices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nasal_final_alternatives() {
        let pattern = NasalPattern::new("케이켕");
        assert!(pattern.matches("케이켕"));
        assert!(pattern.matches("케이켄"));
        assert!(pattern.matches("케이켐"));
        assert!(!pattern.matches("케이케"));
        assert!(!pattern.matches("케이켁"));
    }

    #[test]
    fn test_word_internal_nasal() {
        let pattern = NasalPattern::new("캄파이");
        assert!(pattern.matches("칸파이"));
        assert!(pattern.matches("캉파이"));
        // 비음이 아닌 음절은 정확히 일치해야 함
        assert!(!pattern.matches("캄바이"));
    }

    #[test]
    fn test_length_must_match() {
        let pattern = NasalPattern::new("벤리");
        assert!(!pattern.matches("벤"));
        assert!(!pattern.matches("벤리리"));
        assert!(!pattern.matches(""));
    }

    #[test]
    fn test_non_syllable_exact() {
        let pattern = NasalPattern::new("ㄱ안");
        assert!(pattern.matches("ㄱ암"));
        assert!(!pattern.matches("ㄴ암"));
    }

    #[test]
    fn test_nasal_equivalent_per_char() {
        assert!(nasal_equivalent('캄', '캉'));
        assert!(nasal_equivalent('셍', '센'));
        assert!(!nasal_equivalent('캇', '칸'));
        assert!(!nasal_equivalent('가', '간'));
        assert!(nasal_equivalent('a', 'a'));
    }

    #[test]
    fn test_empty_pattern() {
        let pattern = NasalPattern::new("");
        assert!(pattern.matches(""));
        assert!(!pattern.matches("가"));
    }
}
