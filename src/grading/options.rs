//! 채점 옵션

use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// 뜻 모드 옵션
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeaningOptions {
    /// 부분 일치 허용 (양방향 포함 관계)
    #[serde(default = "default_true")]
    pub partial: bool,
}

impl Default for MeaningOptions {
    fn default() -> Self {
        Self { partial: true }
    }
}

impl MeaningOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// 부분 일치 허용 여부 설정
    pub fn with_partial(mut self, partial: bool) -> Self {
        self.partial = partial;
        self
    }
}

/// 발음 모드 옵션
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadingOptions {
    /// 발음(ん) 받침 ㄴ/ㅁ/ㅇ 혼용 허용
    #[serde(default = "default_true", alias = "nasalFlexible")]
    pub nasal_flexible: bool,
    /// 촉음(っ) 받침 ㅅ/ㅆ 표기 허용
    #[serde(default = "default_true", alias = "geminateFlexible")]
    pub geminate_flexible: bool,
}

impl Default for ReadingOptions {
    fn default() -> Self {
        Self {
            nasal_flexible: true,
            geminate_flexible: true,
        }
    }
}

impl ReadingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// 정확히 일치해야 정답 (유연 매칭 모두 끔)
    pub fn exact() -> Self {
        Self {
            nasal_flexible: false,
            geminate_flexible: false,
        }
    }

    pub fn with_nasal_flexible(mut self, enabled: bool) -> Self {
        self.nasal_flexible = enabled;
        self
    }

    pub fn with_geminate_flexible(mut self, enabled: bool) -> Self {
        self.geminate_flexible = enabled;
        self
    }
}
