//! 가나 문자 정규화 (가타카나 -> 히라가나, 장음 기호 제거)

/// 가타카나 -> 히라가나 코드포인트 차이
const KATAKANA_OFFSET: u32 = 0x60;

/// 변환 대상 가타카나 범위 (ァ ~ ヺ)
const KATAKANA_START: u32 = 0x30A1;
const KATAKANA_END: u32 = 0x30FA;

/// 촉음 (っ)
pub const SOKUON: char = 'っ';
/// 발음 (ん)
pub const HATSUON: char = 'ん';

/// 장음 기호인지 확인 (ｰ ー ― －)
pub fn is_long_vowel_mark(c: char) -> bool {
    matches!(c, '\u{FF70}' | '\u{30FC}' | '\u{2015}' | '\u{FF0D}')
}

/// 가타카나 한 글자를 히라가나로 변환 (범위 밖 문자는 그대로)
pub fn to_hiragana_char(c: char) -> char {
    let cp = c as u32;
    if (KATAKANA_START..=KATAKANA_END).contains(&cp) {
        char::from_u32(cp - KATAKANA_OFFSET).unwrap_or(c)
    } else {
        c
    }
}

/// 읽기 문자열을 스캐너 입력으로 정규화
/// - 가타카나는 히라가나로
/// - 장음 기호는 제거 (길이를 늘리지 않음)
pub fn normalize_kana(input: &str) -> Vec<char> {
    input
        .chars()
        .filter(|&c| !is_long_vowel_mark(c))
        .map(to_hiragana_char)
        .collect()
}
