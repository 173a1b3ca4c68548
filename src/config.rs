//! 채점 설정 파일 로드 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::grading::{MeaningOptions, ReadingOptions};

/// 설정 파일 경로를 직접 지정하는 환경 변수
pub const CONFIG_ENV: &str = "KANAGRADE_CONFIG";

/// 설정 로드 에러
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 읽기 실패
    IoError(std::io::Error),
    /// JSON 파싱 실패
    ParseError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "설정 파일 읽기 오류: {}", e),
            ConfigError::ParseError(s) => write!(f, "설정 JSON 파싱 오류: {}", s),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

/// 채점 설정
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GradingConfig {
    /// 뜻 모드 옵션
    #[serde(default)]
    pub meaning: MeaningOptions,
    /// 발음 모드 옵션
    #[serde(default)]
    pub reading: ReadingOptions,
}

impl GradingConfig {
    /// JSON 문자열에서 설정 로드 (없는 필드는 기본값)
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json_str).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

/// $KANAGRADE_CONFIG 로 직접 지정한 경로 (비어 있으면 없음)
fn explicit_config_path() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
}

/// 기본 경로: ~/.config/kanagrade/config.json
fn default_config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute())
        .unwrap_or_else(std::env::temp_dir);
    home.join(".config").join("kanagrade").join("config.json")
}

/// 설정 파일 경로: $KANAGRADE_CONFIG, 없으면 ~/.config/kanagrade/config.json
pub fn config_path() -> PathBuf {
    explicit_config_path().unwrap_or_else(default_config_path)
}

/// 지정한 파일에서 설정 로드
pub fn load_config_from(path: &Path) -> Result<GradingConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    GradingConfig::from_json(&content)
}

/// 기본 경로에 파일이 없을 때만 조용히 기본값. 직접 지정한 경로는 없어도 에러
fn load_config_at(path: &Path, explicit: bool) -> Result<GradingConfig, ConfigError> {
    match load_config_from(path) {
        Err(ConfigError::IoError(e)) if !explicit && e.kind() == std::io::ErrorKind::NotFound => {
            Ok(GradingConfig::default())
        }
        result => result,
    }
}

/// 설정 파일 로드 (실패 시 경고 후 기본값)
pub fn load_config() -> GradingConfig {
    let (path, explicit) = match explicit_config_path() {
        Some(path) => (path, true),
        None => (default_config_path(), false),
    };
    match load_config_at(&path, explicit) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("설정 파일 무시 ({}): {}", path.display(), e);
            GradingConfig::default()
        }
    }
}
