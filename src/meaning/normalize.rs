//! 뜻(한국어) 답안 정규화

/// 공백으로 바꾸는 문장부호/괄호
const PUNCTUATION: &[char] = &[
    '(', ')', '{', '}', '「', '」', '『', '』', '<', '>', '.', ',', '/', '·', '~', '!', '@', '#',
    '$', '%', '^', '&', '*', '?', ':', ';', '\'', '"', '|', '_', '-',
];

/// 끝에서 떼어 내는 용언/명사 파생 어미 (긴 것부터 시도)
const SUFFIXES: &[&str] = &[
    "하는것", "합니다", "하였다", "하기", "하다", "하게", "되어", "된다", "되는", "적임", "상태",
    "함", "적", "성", "력",
];

/// 끝의 어미를 하나 떼어 냄. 줄기가 비게 되는 어미는 떼지 않음
fn strip_one_suffix(text: &str) -> Option<&str> {
    SUFFIXES.iter().find_map(|suffix| {
        text.strip_suffix(suffix)
            .filter(|stem| !stem.is_empty())
    })
}

/// 뜻 답안 정규화
///
/// 1. 앞뒤 공백 제거, 문장부호는 공백으로
/// 2. 공백 제거
/// 3. 끝의 파생 어미 제거 (더 뗄 어미가 없을 때까지)
/// 4. 소문자화
///
/// `normalize_meaning(normalize_meaning(s)) == normalize_meaning(s)`
pub fn normalize_meaning(text: &str) -> String {
    let spaced: String = text
        .trim()
        .chars()
        .map(|c| if PUNCTUATION.contains(&c) { ' ' } else { c })
        .collect();

    let compact: String = spaced.split_whitespace().collect();

    let mut stem = compact.as_str();
    while let Some(shorter) = strip_one_suffix(stem) {
        stem = shorter;
    }

    stem.to_lowercase()
}
