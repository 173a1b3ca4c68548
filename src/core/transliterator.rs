//! 가나 -> 한글 표기 변환 유한 상태 기계 (FSM)
//!
//! 촉음(っ)과 발음(ん)은 바로 출력하지 않고 보류 상태로 두었다가
//! 다음 음절이 들어올 때 해소합니다.
//! - 촉음: 다음 음절 초성을 된소리로
//! - 발음: 다음 음절 초성에 따라 앞 음절에 ㅁ/ㄴ/ㅇ 받침

use super::kana::{normalize_kana, HATSUON, SOKUON};
use super::mora_table::{lookup_digraph, lookup_mora, tensed_choseong};
use super::unicode::{
    cho, choseong_of, jong, jongseong_of, replace_choseong, replace_jongseong,
};

/// 문두 발음이나 받침을 붙일 수 없을 때 쓰는 단독 음절
const STANDALONE_NASAL: char = '응';

/// 스캐너가 한 번에 소비하는 가나 단위
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KanaUnit {
    /// 촉음 (っ)
    Sokuon,
    /// 발음 (ん)
    Hatsuon,
    /// 한글 기본 음절로 매핑된 단음/합자
    Mora(char),
    /// 매핑 없는 문자 (건너뜀)
    Unmapped(char),
}

/// FSM 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// 보류 없음
    Idle,
    /// 발음이 다음 음절을 기다리는 중
    PendingNasal,
    /// 촉음이 다음 음절을 기다리는 중
    PendingGemination,
    /// 발음과 촉음이 모두 보류 중
    PendingBoth,
}

impl ScanState {
    /// 단위 하나를 소비한 뒤의 상태
    pub fn transition(self, unit: KanaUnit) -> ScanState {
        use ScanState::*;
        match (self, unit) {
            (Idle, KanaUnit::Sokuon) => PendingGemination,
            (Idle, KanaUnit::Hatsuon) => PendingNasal,
            (PendingNasal, KanaUnit::Sokuon) => PendingBoth,
            (PendingNasal, KanaUnit::Hatsuon) => PendingNasal,
            (PendingGemination, KanaUnit::Sokuon) => PendingGemination,
            (PendingGemination, KanaUnit::Hatsuon) => PendingBoth,
            (PendingBoth, KanaUnit::Sokuon | KanaUnit::Hatsuon) => PendingBoth,
            (_, KanaUnit::Mora(_)) => Idle,
            (state, KanaUnit::Unmapped(_)) => state,
        }
    }

    pub fn has_pending_nasal(self) -> bool {
        matches!(self, ScanState::PendingNasal | ScanState::PendingBoth)
    }

    pub fn has_pending_gemination(self) -> bool {
        matches!(self, ScanState::PendingGemination | ScanState::PendingBoth)
    }
}

/// 다음 음절 초성에 따라 발음(ん)의 받침 결정
/// - 양순음 (ㅂ ㅃ ㅍ ㅁ) -> ㅁ
/// - 치조음 (ㄷ ㅌ ㅅ ㅆ ㅈ ㅉ ㅊ ㄴ ㄹ) -> ㄴ
/// - 그 외 (연구개음, 모음 시작 등) -> ㅇ
pub fn nasal_jongseong_before(next_choseong: u32) -> u32 {
    match next_choseong {
        cho::BIEUP | cho::SSANG_BIEUP | cho::PIEUP | cho::MIEUM => jong::MIEUM,
        cho::DIGEUT
        | cho::TIEUT
        | cho::SIOT
        | cho::SSANG_SIOT
        | cho::JIEUT
        | cho::SSANG_JIEUT
        | cho::CHIEUT
        | cho::NIEUN
        | cho::RIEUL => jong::NIEUN,
        _ => jong::IEUNG,
    }
}

/// 정규화된 가나 문자열을 단위로 자르는 스캐너
///
/// 합자를 단음보다 먼저 확인합니다.
pub struct KanaScanner {
    chars: Vec<char>,
    pos: usize,
}

impl KanaScanner {
    pub fn new(input: &str) -> Self {
        Self {
            chars: normalize_kana(input),
            pos: 0,
        }
    }
}

impl Iterator for KanaScanner {
    type Item = KanaUnit;

    fn next(&mut self) -> Option<KanaUnit> {
        let c = *self.chars.get(self.pos)?;

        if c == SOKUON {
            self.pos += 1;
            return Some(KanaUnit::Sokuon);
        }
        if c == HATSUON {
            self.pos += 1;
            return Some(KanaUnit::Hatsuon);
        }

        if let Some(&second) = self.chars.get(self.pos + 1) {
            if let Some(syllable) = lookup_digraph(c, second) {
                self.pos += 2;
                return Some(KanaUnit::Mora(syllable));
            }
        }

        self.pos += 1;
        Some(match lookup_mora(c) {
            Some(syllable) => KanaUnit::Mora(syllable),
            None => KanaUnit::Unmapped(c),
        })
    }
}

/// 가나 -> 한글 표기 FSM
pub struct Transliterator {
    state: ScanState,
    /// 출력 버퍼
    output: String,
}

impl Transliterator {
    /// 새 FSM 생성
    pub fn new() -> Self {
        Self {
            state: ScanState::Idle,
            output: String::new(),
        }
    }

    /// 현재 상태
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// 단위 하나를 입력하여 상태 전이
    pub fn feed(&mut self, unit: KanaUnit) {
        match unit {
            KanaUnit::Mora(base) => self.emit(base),
            KanaUnit::Unmapped(c) => {
                log::trace!("매핑 없는 가나 건너뜀: {:?}", c);
            }
            KanaUnit::Sokuon | KanaUnit::Hatsuon => {}
        }
        self.state = self.state.transition(unit);
    }

    /// 음절 출력 (보류 중인 촉음/발음 해소 포함)
    fn emit(&mut self, base: char) {
        let mut syllable = base;

        if self.state.has_pending_gemination() {
            syllable = strengthen_initial(syllable);
        }

        if self.state.has_pending_nasal() {
            // 초성이 없는 음절은 모음 시작으로 보고 ㅇ 받침
            let next_cho = choseong_of(syllable).unwrap_or(cho::IEUNG);
            self.attach_nasal(nasal_jongseong_before(next_cho));
        }

        self.output.push(syllable);
    }

    /// 앞 음절에 비음 받침을 붙임
    ///
    /// 출력이 비었거나, 앞 글자가 음절이 아니거나, 이미 받침이 있으면 '응'을 덧붙임
    fn attach_nasal(&mut self, jongseong: u32) {
        let merged = self
            .output
            .chars()
            .last()
            .filter(|&last| jongseong_of(last) == Some(jong::NONE))
            .and_then(|last| replace_jongseong(last, jongseong));

        match merged {
            Some(syllable) => {
                self.output.pop();
                self.output.push(syllable);
            }
            None => self.output.push(STANDALONE_NASAL),
        }
    }

    /// FSM 종료 및 최종 결과 반환
    ///
    /// 끝에 남은 발음은 ㅇ 받침으로, 끝에 남은 촉음은 버림
    pub fn finish(mut self) -> String {
        if self.state.has_pending_nasal() {
            self.attach_nasal(jong::IEUNG);
        }
        self.state = ScanState::Idle;
        self.output
    }
}

impl Default for Transliterator {
    fn default() -> Self {
        Self::new()
    }
}

/// 촉음 뒤 음절의 초성을 된소리로 (치환표에 없는 초성은 그대로)
fn strengthen_initial(syllable: char) -> char {
    choseong_of(syllable)
        .and_then(tensed_choseong)
        .and_then(|tensed| replace_choseong(syllable, tensed))
        .unwrap_or(syllable)
}

/// 가나 읽기를 한글 근사 표기로 변환
///
/// 어떤 입력에도 실패하지 않으며, 매핑 없는 문자는 건너뜁니다.
pub fn kana_to_hangul(kana: &str) -> String {
    let mut fsm = Transliterator::new();
    for unit in KanaScanner::new(kana) {
        fsm.feed(unit);
    }
    fsm.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_mora() {
        assert_eq!(kana_to_hangul("ちかてつ"), "치카테츠");
        assert_eq!(kana_to_hangul("やくそく"), "야쿠소쿠");
        assert_eq!(kana_to_hangul("カタカナ"), "카타카나");
    }

    #[test]
    fn test_digraph_priority() {
        assert_eq!(kana_to_hangul("ちゅうい"), "츄우이");
        assert_eq!(kana_to_hangul("じょうほう"), "조우호우");
        // 합자가 아닌 조합은 단음 두 개 (ゃ 단독은 매핑 없음)
        assert_eq!(kana_to_hangul("かゃ"), "카");
    }

    #[test]
    fn test_nasal_assimilation() {
        // 양순음 앞 -> ㅁ
        assert_eq!(kana_to_hangul("かんぱい"), "캄파이");
        assert_eq!(kana_to_hangul("さんま"), "삼마");
        // 치조음 앞 -> ㄴ
        assert_eq!(kana_to_hangul("べんり"), "벤리");
        assert_eq!(kana_to_hangul("かんしゃ"), "칸샤");
        // 연구개음/모음 앞 -> ㅇ
        assert_eq!(kana_to_hangul("りんご"), "링고");
        assert_eq!(kana_to_hangul("れんあい"), "렝아이");
    }

    #[test]
    fn test_nasal_at_end_defaults_to_velar() {
        assert_eq!(kana_to_hangul("けいけん"), "케이켕");
        assert_eq!(kana_to_hangul("ちょうせん"), "초우셍");
    }

    #[test]
    fn test_nasal_at_start() {
        assert_eq!(kana_to_hangul("ん"), "응");
        assert_eq!(kana_to_hangul("んか"), "응카");
    }

    #[test]
    fn test_repeated_nasal_collapses() {
        assert_eq!(kana_to_hangul("かんん"), "캉");
    }

    #[test]
    fn test_gemination() {
        // 두 번째 음절은 된소리, 첫 음절은 받침 없음
        assert_eq!(kana_to_hangul("みっか"), "미까");
        assert_eq!(kana_to_hangul("きって"), "키떼");
        assert_eq!(kana_to_hangul("いっしょ"), "이쑈");
        assert_eq!(kana_to_hangul("きっぷ"), "키뿌");
    }

    #[test]
    fn test_gemination_voiced_row_unchanged() {
        // 탁음 행은 치환표에 없음
        assert_eq!(kana_to_hangul("べっど"), "베도");
        assert_eq!(kana_to_hangul("ばっぐ"), "바구");
    }

    #[test]
    fn test_gemination_at_end_dropped() {
        assert_eq!(kana_to_hangul("あっ"), "아");
    }

    #[test]
    fn test_long_vowel_ignored() {
        assert_eq!(kana_to_hangul("コーヒー"), "코히");
    }

    #[test]
    fn test_unmapped_skipped() {
        assert_eq!(kana_to_hangul("か1き"), "카키");
        assert_eq!(kana_to_hangul("abc"), "");
        assert_eq!(kana_to_hangul(""), "");
    }

    #[test]
    fn test_state_transitions() {
        use ScanState::*;
        assert_eq!(Idle.transition(KanaUnit::Sokuon), PendingGemination);
        assert_eq!(Idle.transition(KanaUnit::Hatsuon), PendingNasal);
        assert_eq!(PendingNasal.transition(KanaUnit::Sokuon), PendingBoth);
        assert_eq!(PendingGemination.transition(KanaUnit::Hatsuon), PendingBoth);
        assert_eq!(PendingBoth.transition(KanaUnit::Mora('카')), Idle);
        assert_eq!(PendingNasal.transition(KanaUnit::Unmapped('x')), PendingNasal);
        assert!(PendingBoth.has_pending_nasal());
        assert!(PendingBoth.has_pending_gemination());
        assert!(!Idle.has_pending_nasal());
    }

    #[test]
    fn test_nasal_and_gemination_together() {
        // 촉음 적용 후 된소리 초성 ㄲ 기준으로 받침 결정 (ㅇ)
        assert_eq!(kana_to_hangul("かんっか"), "캉까");
        let mut fsm = Transliterator::new();
        fsm.feed(KanaUnit::Mora('카'));
        fsm.feed(KanaUnit::Hatsuon);
        fsm.feed(KanaUnit::Sokuon);
        assert_eq!(fsm.state(), ScanState::PendingBoth);
        fsm.feed(KanaUnit::Mora('파'));
        assert_eq!(fsm.state(), ScanState::Idle);
        assert_eq!(fsm.finish(), "캄빠");
    }

    #[test]
    fn test_scanner_units() {
        let units: Vec<KanaUnit> = KanaScanner::new("きゃっん?").collect();
        assert_eq!(
            units,
            vec![
                KanaUnit::Mora('캬'),
                KanaUnit::Sokuon,
                KanaUnit::Hatsuon,
                KanaUnit::Unmapped('?'),
            ]
        );
    }
}
