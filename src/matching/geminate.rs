//! 촉음(っ) 유연 허용
//!
//! 된소리 초성 음절 앞의 음절에 ㅅ/ㅆ 받침을 붙인 표기를 함께 허용합니다.
//! 예) 미까 -> 밋카, 밌카, 밋까
//!
//! 위치마다 대안이 4개라 변형을 모두 만들면 4^k 개가 됩니다.
//! 판정은 [`GeminateLattice::matches_with`] 가 글자 단위로 한 번 훑어서 합니다.

use std::collections::BTreeSet;

use crate::core::mora_table::{is_tensed_choseong, untensed_choseong};
use crate::core::unicode::{
    choseong_of, compose_syllable, decompose_syllable, is_composed_syllable, jong,
};

/// 한 위치의 대안: 앞 음절 종성과 현재 음절 초성
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PairChoice {
    prev_jong: u32,
    cur_cho: u32,
}

/// 한 위치에서 만들 수 있는 대안 (첫 번째는 원형)
fn pair_choices(prev_jong: u32, cur_cho: u32) -> Vec<PairChoice> {
    let mut choices = vec![PairChoice { prev_jong, cur_cho }];
    if let Some(plain) = untensed_choseong(cur_cho) {
        choices.push(PairChoice { prev_jong: jong::SIOT, cur_cho: plain });
        choices.push(PairChoice { prev_jong: jong::SSANG_SIOT, cur_cho: plain });
    }
    choices.push(PairChoice { prev_jong: jong::SIOT, cur_cho });
    choices
}

/// 정답 표기와 위치별 촉음 대안
///
/// `choices[i]` 가 비어 있지 않으면 (i-1, i) 쌍이 대상 위치입니다.
/// 글자 i 의 초성은 `choices[i]`, 종성은 `choices[i + 1]` 이 정합니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminateLattice {
    chars: Vec<char>,
    parts: Vec<Option<(u32, u32, u32)>>,
    choices: Vec<Vec<PairChoice>>,
}

impl GeminateLattice {
    /// 촉음 대안을 포함한 격자 생성
    pub fn new(answer: &str) -> Self {
        let mut lattice = Self::exact(answer);
        for i in 1..lattice.chars.len() {
            if !is_composed_syllable(lattice.chars[i - 1]) {
                continue;
            }
            let (Some((_, _, prev_jong)), Some(cur_cho)) =
                (lattice.parts[i - 1], choseong_of(lattice.chars[i]))
            else {
                continue;
            };
            if is_tensed_choseong(cur_cho) {
                lattice.choices[i] = pair_choices(prev_jong, cur_cho);
            }
        }
        lattice
    }

    /// 대안 없이 원형만 허용하는 격자
    pub fn exact(answer: &str) -> Self {
        let chars: Vec<char> = answer.chars().collect();
        let parts = chars.iter().map(|&c| decompose_syllable(c)).collect();
        let choices = vec![Vec::new(); chars.len()];
        Self { chars, parts, choices }
    }

    /// 촉음 대안이 있는 위치 수
    pub fn eligible_count(&self) -> usize {
        self.choices.iter().filter(|c| !c.is_empty()).count()
    }

    /// 글자 j 의 초성 후보
    fn leads(&self, j: usize) -> Vec<u32> {
        match (&self.choices[j], self.parts[j]) {
            (choices, _) if !choices.is_empty() => choices.iter().map(|c| c.cur_cho).collect(),
            (_, Some((cho, _, _))) => vec![cho],
            (_, None) => vec![0],
        }
    }

    /// 글자 j 의 종성 후보 (순서는 다음 글자의 초성 후보와 같음)
    fn tails(&self, j: usize) -> Vec<u32> {
        match (self.choices.get(j + 1), self.parts[j]) {
            (Some(choices), _) if !choices.is_empty() => {
                choices.iter().map(|c| c.prev_jong).collect()
            }
            (_, Some((_, _, jongseong))) => vec![jongseong],
            (_, None) => vec![0],
        }
    }

    fn expected_char(&self, j: usize, lead: u32, tail: u32) -> char {
        self.parts[j]
            .and_then(|(_, jung, _)| compose_syllable(lead, jung, tail))
            .unwrap_or(self.chars[j])
    }

    /// 입력이 변형 중 하나와 일치하는지 확인
    ///
    /// `accepts(expected, actual)` 는 한 글자 비교 규칙입니다.
    /// 위치마다 살아 있는 대안만 들고 가므로 입력 길이에 비례합니다.
    pub fn matches_with<F>(&self, input: &str, accepts: F) -> bool
    where
        F: Fn(char, char) -> bool,
    {
        let input: Vec<char> = input.chars().collect();
        if input.len() != self.chars.len() {
            return false;
        }

        // alive[k]: 현재 글자의 k번째 초성 후보로 여기까지 일치 가능
        let mut alive = vec![true];
        for (j, &actual) in input.iter().enumerate() {
            let leads = self.leads(j);
            let tails = self.tails(j);
            let mut next = vec![false; tails.len()];
            for (k, &lead) in leads.iter().enumerate() {
                if !alive.get(k).copied().unwrap_or(false) {
                    continue;
                }
                for (t, &tail) in tails.iter().enumerate() {
                    if !next[t] && accepts(self.expected_char(j, lead, tail), actual) {
                        next[t] = true;
                    }
                }
            }
            if !next.contains(&true) {
                return false;
            }
            alive = next;
        }
        true
    }

    /// 가능한 변형 전체 (원형 포함, 중복 제거)
    pub fn variants(&self) -> Vec<String> {
        let mut partial: Vec<(String, usize)> = vec![(String::new(), 0)];
        for j in 0..self.chars.len() {
            let leads = self.leads(j);
            let tails = self.tails(j);
            let mut expanded = Vec::with_capacity(partial.len() * tails.len());
            for (prefix, k) in &partial {
                for (t, &tail) in tails.iter().enumerate() {
                    let mut word = prefix.clone();
                    word.push(self.expected_char(j, leads[*k], tail));
                    expanded.push((word, t));
                }
            }
            partial = expanded;
        }

        let unique: BTreeSet<String> = partial.into_iter().map(|(word, _)| word).collect();
        unique.into_iter().collect()
    }
}

/// 정답 표기의 촉음 변형 전체 (원형 포함, 중복 제거)
///
/// 해당 위치가 여러 개면 위치별 대안을 모두 조합합니다.
/// 개수가 4^k 로 늘어나므로 표시와 점검용이며, 판정은 [`GeminateLattice`] 로 합니다.
pub fn geminate_variants(answer: &str) -> Vec<String> {
    GeminateLattice::new(answer).variants()
}
