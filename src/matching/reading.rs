//! 발음(한글 표기) 정답 비교

use crate::core::transliterator::kana_to_hangul;
use crate::core::unicode::is_hangul_char;

use super::geminate::GeminateLattice;
use super::nasal::nasal_equivalent;

/// 한글(완성형 + 호환용 자모)만 남김. 공백 포함 나머지는 제거
pub fn normalize_hangul(text: &str) -> String {
    text.chars().filter(|&c| is_hangul_char(c)).collect()
}

/// 정답 표기에 대한 허용 표기 판정기
///
/// 촉음 변형 × 발음 유연 패턴 조합 중 하나라도 입력과 일치하면 정답입니다.
/// 조합을 미리 펼치지 않고 글자 단위로 비교합니다.
#[derive(Debug, Clone)]
pub struct ReadingMatcher {
    canonical: String,
    lattice: GeminateLattice,
    nasal_flexible: bool,
}

impl ReadingMatcher {
    /// 한글 정답 표기로 판정기 생성
    pub fn new(canonical: &str, nasal_flexible: bool, geminate_flexible: bool) -> Self {
        let canonical = normalize_hangul(canonical);
        let lattice = if geminate_flexible {
            GeminateLattice::new(&canonical)
        } else {
            GeminateLattice::exact(&canonical)
        };
        log::debug!(
            "발음 정답 '{}': 촉음 위치 {}개 (ん 유연: {})",
            canonical,
            lattice.eligible_count(),
            nasal_flexible
        );
        Self {
            canonical,
            lattice,
            nasal_flexible,
        }
    }

    /// 가나 읽기로 판정기 생성
    pub fn from_kana(kana: &str, nasal_flexible: bool, geminate_flexible: bool) -> Self {
        Self::new(&kana_to_hangul(kana), nasal_flexible, geminate_flexible)
    }

    /// 정규화된 정답 표기
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// 사용자 입력 판정 (빈 입력은 항상 오답)
    pub fn is_match(&self, user_input: &str) -> bool {
        let user = normalize_hangul(user_input);
        if user.is_empty() {
            return false;
        }
        if self.nasal_flexible {
            self.lattice.matches_with(&user, nasal_equivalent)
        } else {
            self.lattice.matches_with(&user, |expected, actual| expected == actual)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_hangul() {
        assert_eq!(normalize_hangul(" 밋 카 "), "밋카");
        assert_eq!(normalize_hangul("abc밋카!"), "밋카");
        assert_eq!(normalize_hangul("ㅁㅣ"), "ㅁㅣ");
        assert_eq!(normalize_hangul("みっか"), "");
    }

    #[test]
    fn test_geminate_relaxation() {
        let matcher = ReadingMatcher::from_kana("みっか", true, true);
        assert_eq!(matcher.canonical(), "미까");
        assert!(matcher.is_match("미까"));
        assert!(matcher.is_match("밋카"));
        assert!(matcher.is_match("밋까"));
        assert!(matcher.is_match("밌카"));
        assert!(!matcher.is_match("밋타"));
    }

    #[test]
    fn test_geminate_disabled() {
        let matcher = ReadingMatcher::from_kana("みっか", true, false);
        assert!(matcher.is_match("미까"));
        assert!(!matcher.is_match("밋카"));
    }

    #[test]
    fn test_nasal_disabled() {
        let matcher = ReadingMatcher::from_kana("けいけん", false, true);
        assert!(matcher.is_match("케이켕"));
        assert!(!matcher.is_match("케이켄"));
    }

    #[test]
    fn test_both_relaxations_compose() {
        // 캄 (ん) + 빠 (っ)
        let matcher = ReadingMatcher::from_kana("かんっぱ", true, true);
        assert_eq!(matcher.canonical(), "캄빠");
        assert!(matcher.is_match("칸빠"));
        // 촉음 변형이 비음 받침을 ㅅ으로 덮어씀
        assert!(matcher.is_match("캇파"));
    }

    #[test]
    fn test_empty_input_is_wrong() {
        let matcher = ReadingMatcher::from_kana("みっか", true, true);
        assert!(!matcher.is_match(""));
        assert!(!matcher.is_match("   "));
        assert!(!matcher.is_match("mikka"));
    }

    #[test]
    fn test_agrees_with_expanded_variants() {
        use crate::matching::{geminate_variants, NasalPattern};

        let inputs = ["칸빠", "캇파", "캉빳", "캄파", "칸팟", "캄빠", "캇빠", "캈파"];
        for kana in ["かんっぱ", "みっか", "けっこん", "いっしょ"] {
            let matcher = ReadingMatcher::from_kana(kana, true, true);
            let variants = geminate_variants(matcher.canonical());
            for input in inputs.iter().copied().chain(variants.iter().map(String::as_str)) {
                let expanded = variants.iter().any(|v| NasalPattern::new(v).matches(input));
                assert_eq!(matcher.is_match(input), expanded, "{kana} {input}");
            }
        }
    }

    #[test]
    fn test_long_sokuon_reading() {
        // 촉음 20개: 변형을 펼치면 4^20 개
        let kana = format!("あ{}ん", "っか".repeat(20));
        let matcher = ReadingMatcher::from_kana(&kana, true, true);
        let canonical = matcher.canonical().to_string();
        // 끝의 ん 은 마지막 까에 ㅇ 받침으로 붙음
        assert_eq!(canonical, format!("아{}깡", "까".repeat(19)));

        let start = std::time::Instant::now();
        assert!(matcher.is_match(&canonical));
        let relaxed = format!("앗{}칸", "캇".repeat(19));
        assert!(matcher.is_match(&relaxed));
        assert!(!matcher.is_match(&format!("앗{}탄", "캇".repeat(19))));
        assert!(!matcher.is_match("아까"));
        assert!(start.elapsed() < std::time::Duration::from_secs(1));
    }

    #[test]
    fn test_unmapped_reading_never_matches() {
        let matcher = ReadingMatcher::from_kana("abc", true, true);
        assert_eq!(matcher.canonical(), "");
        assert!(!matcher.is_match("가"));
    }
}
