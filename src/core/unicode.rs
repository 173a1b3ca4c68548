//! 유니코드 한글 음절 조합/분해 유틸리티

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;

/// 초성 개수
pub const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
pub const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
pub const JONGSEONG_COUNT: u32 = 28;

/// 완성형 음절 개수 (19 × 21 × 28)
const SYLLABLE_COUNT: u32 = CHOSEONG_COUNT * JUNGSEONG_COUNT * JONGSEONG_COUNT;

/// 호환용 자모 영역 (ㄱ ~ ㆎ)
const COMPAT_JAMO_START: u32 = 0x3131;
const COMPAT_JAMO_END: u32 = 0x318E;

/// 초성 인덱스
///
/// ㄱ(0) ㄲ(1) ㄴ(2) ㄷ(3) ㄸ(4) ㄹ(5) ㅁ(6) ㅂ(7) ㅃ(8) ㅅ(9)
/// ㅆ(10) ㅇ(11) ㅈ(12) ㅉ(13) ㅊ(14) ㅋ(15) ㅌ(16) ㅍ(17) ㅎ(18)
pub mod cho {
    pub const GIYEOK: u32 = 0;
    pub const SSANG_GIYEOK: u32 = 1;
    pub const NIEUN: u32 = 2;
    pub const DIGEUT: u32 = 3;
    pub const SSANG_DIGEUT: u32 = 4;
    pub const RIEUL: u32 = 5;
    pub const MIEUM: u32 = 6;
    pub const BIEUP: u32 = 7;
    pub const SSANG_BIEUP: u32 = 8;
    pub const SIOT: u32 = 9;
    pub const SSANG_SIOT: u32 = 10;
    pub const IEUNG: u32 = 11;
    pub const JIEUT: u32 = 12;
    pub const SSANG_JIEUT: u32 = 13;
    pub const CHIEUT: u32 = 14;
    pub const KIEUK: u32 = 15;
    pub const TIEUT: u32 = 16;
    pub const PIEUP: u32 = 17;
    pub const HIEUT: u32 = 18;
}

/// 종성 인덱스 (0 = 종성 없음)
///
/// 비음 받침 ㄴ/ㅁ/ㅇ 과 촉음 받침 ㅅ/ㅆ 만 사용
pub mod jong {
    pub const NONE: u32 = 0;
    pub const NIEUN: u32 = 4;
    pub const MIEUM: u32 = 16;
    pub const SIOT: u32 = 19;
    pub const SSANG_SIOT: u32 = 20;
    pub const IEUNG: u32 = 21;
}

/// 초성/중성/종성 인덱스로 완성된 한글 유니코드 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
///
/// 범위를 벗어난 인덱스는 None
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
///
/// 완성형 음절 영역 밖의 문자는 None (분해 불가)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    let code = c as u32;
    if !(HANGUL_SYLLABLE_BASE..HANGUL_SYLLABLE_BASE + SYLLABLE_COUNT).contains(&code) {
        return None;
    }
    let offset = code - HANGUL_SYLLABLE_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((choseong, jungseong, jongseong))
}

/// 문자가 완성형 한글(가-힣)인지 확인
pub fn is_composed_syllable(c: char) -> bool {
    decompose_syllable(c).is_some()
}

/// 완성형 한글 또는 호환용 자모인지 확인
pub fn is_hangul_char(c: char) -> bool {
    let cp = c as u32;
    is_composed_syllable(c) || (COMPAT_JAMO_START..=COMPAT_JAMO_END).contains(&cp)
}

/// 음절의 초성 인덱스
pub fn choseong_of(c: char) -> Option<u32> {
    decompose_syllable(c).map(|(cho, _, _)| cho)
}

/// 음절의 종성 인덱스 (0 = 없음)
pub fn jongseong_of(c: char) -> Option<u32> {
    decompose_syllable(c).map(|(_, _, jong)| jong)
}

/// 초성만 교체한 음절 생성
pub fn replace_choseong(c: char, choseong: u32) -> Option<char> {
    let (_, jung, jong) = decompose_syllable(c)?;
    compose_syllable(choseong, jung, jong)
}

/// 종성만 교체한 음절 생성
pub fn replace_jongseong(c: char, jongseong: u32) -> Option<char> {
    let (cho, jung, _) = decompose_syllable(c)?;
    compose_syllable(cho, jung, jongseong)
}
