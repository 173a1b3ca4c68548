//! 가나 -> 한글 기본 음절 매핑 테이블
//!
//! 프로세스 시작 후 한 번만 생성되는 읽기 전용 데이터입니다.

use std::collections::HashMap;

use lazy_static::lazy_static;

use super::unicode::cho;

/// 요음(ゃゅょ) 합자 -> 한글 음절
#[rustfmt::skip]
const DIGRAPHS: [(&str, char); 33] = [
    ("きゃ", '캬'), ("きゅ", '큐'), ("きょ", '쿄'),
    ("ぎゃ", '갸'), ("ぎゅ", '규'), ("ぎょ", '교'),
    ("しゃ", '샤'), ("しゅ", '슈'), ("しょ", '쇼'),
    ("じゃ", '자'), ("じゅ", '주'), ("じょ", '조'),
    ("ちゃ", '챠'), ("ちゅ", '츄'), ("ちょ", '초'),
    ("にゃ", '냐'), ("にゅ", '뉴'), ("にょ", '뇨'),
    ("ひゃ", '햐'), ("ひゅ", '휴'), ("ひょ", '효'),
    ("びゃ", '뱌'), ("びゅ", '뷰'), ("びょ", '뵤'),
    ("ぴゃ", '퍄'), ("ぴゅ", '퓨'), ("ぴょ", '표'),
    ("みゃ", '먀'), ("みゅ", '뮤'), ("みょ", '묘'),
    ("りゃ", '랴'), ("りゅ", '류'), ("りょ", '료'),
];

/// 단음 -> 한글 음절 (간이 표기)
#[rustfmt::skip]
const MONOGRAPHS: [(char, char); 77] = [
    ('あ', '아'), ('い', '이'), ('う', '우'), ('え', '에'), ('お', '오'),
    ('か', '카'), ('き', '키'), ('く', '쿠'), ('け', '케'), ('こ', '코'),
    ('が', '가'), ('ぎ', '기'), ('ぐ', '구'), ('げ', '게'), ('ご', '고'),
    ('さ', '사'), ('し', '시'), ('す', '스'), ('せ', '세'), ('そ', '소'),
    ('ざ', '자'), ('じ', '지'), ('ず', '즈'), ('ぜ', '제'), ('ぞ', '조'),
    ('た', '타'), ('ち', '치'), ('つ', '츠'), ('て', '테'), ('と', '토'),
    ('だ', '다'), ('ぢ', '지'), ('づ', '즈'), ('で', '데'), ('ど', '도'),
    ('な', '나'), ('に', '니'), ('ぬ', '누'), ('ね', '네'), ('の', '노'),
    ('は', '하'), ('ひ', '히'), ('ふ', '후'), ('へ', '헤'), ('ほ', '호'),
    ('ば', '바'), ('び', '비'), ('ぶ', '부'), ('べ', '베'), ('ぼ', '보'),
    ('ぱ', '파'), ('ぴ', '피'), ('ぷ', '푸'), ('ぺ', '페'), ('ぽ', '포'),
    ('ま', '마'), ('み', '미'), ('む', '무'), ('め', '메'), ('も', '모'),
    ('や', '야'), ('ゆ', '유'), ('よ', '요'),
    ('ら', '라'), ('り', '리'), ('る', '루'), ('れ', '레'), ('ろ', '로'),
    ('わ', '와'), ('を', '오'),
    ('ぁ', '아'), ('ぃ', '이'), ('ぅ', '우'), ('ぇ', '에'), ('ぉ', '오'),
    ('ゎ', '와'), ('ゔ', '부'),
];

lazy_static! {
    static ref DIGRAPH_TABLE: HashMap<(char, char), char> = DIGRAPHS
        .iter()
        .filter_map(|(kana, syllable)| {
            let mut chars = kana.chars();
            Some(((chars.next()?, chars.next()?), *syllable))
        })
        .collect();
    static ref MONOGRAPH_TABLE: HashMap<char, char> = MONOGRAPHS.iter().copied().collect();
}

/// 합자 두 글자를 한글 음절로 변환
pub fn lookup_digraph(first: char, second: char) -> Option<char> {
    DIGRAPH_TABLE.get(&(first, second)).copied()
}

/// 단음 한 글자를 한글 음절로 변환
pub fn lookup_mora(c: char) -> Option<char> {
    MONOGRAPH_TABLE.get(&c).copied()
}

/// 촉음 뒤 초성을 된소리로 바꾸는 치환
///
/// ㅋ/ㅌ/ㅍ/ㅅ/ㅈ/ㅊ 계열만 지원합니다.
/// 탁음 행(が/だ/ば, 초성 ㄱ/ㄷ/ㅂ)은 치환하지 않습니다.
pub fn tensed_choseong(choseong: u32) -> Option<u32> {
    match choseong {
        cho::KIEUK => Some(cho::SSANG_GIYEOK),  // ㅋ -> ㄲ
        cho::TIEUT => Some(cho::SSANG_DIGEUT),  // ㅌ -> ㄸ
        cho::PIEUP => Some(cho::SSANG_BIEUP),   // ㅍ -> ㅃ
        cho::SIOT => Some(cho::SSANG_SIOT),     // ㅅ -> ㅆ
        cho::JIEUT => Some(cho::SSANG_JIEUT),   // ㅈ -> ㅉ
        cho::CHIEUT => Some(cho::SSANG_JIEUT),  // ㅊ -> ㅉ
        _ => None,
    }
}

/// 된소리 초성을 받침 없는 표기의 대응 초성으로 되돌림
///
/// 밋카 처럼 촉음이 앞 음절 받침으로 흡수된 표기를 만들 때 사용
pub fn untensed_choseong(choseong: u32) -> Option<u32> {
    match choseong {
        cho::SSANG_GIYEOK => Some(cho::KIEUK), // ㄲ -> ㅋ
        cho::SSANG_DIGEUT => Some(cho::TIEUT), // ㄸ -> ㅌ
        cho::SSANG_BIEUP => Some(cho::PIEUP),  // ㅃ -> ㅍ
        cho::SSANG_SIOT => Some(cho::SIOT),    // ㅆ -> ㅅ
        cho::SSANG_JIEUT => Some(cho::CHIEUT), // ㅉ -> ㅊ
        _ => None,
    }
}

/// 된소리(경음) 초성인지 확인
pub fn is_tensed_choseong(choseong: u32) -> bool {
    untensed_choseong(choseong).is_some()
}
