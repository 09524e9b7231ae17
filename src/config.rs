use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::exchanger::{OperatingPoint, DEFAULT_SWEEP_POINTS};
use crate::selection::SelectionOptions;

/// 기본 설정 파일 이름
pub const DEFAULT_CONFIG_PATH: &str = "plate_hx.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 특성 곡선 점 수
    pub sweep_points: usize,
    /// 대화형 모드 시작 운전점
    pub defaults: OperatingPoint,
    /// 모델 선정 기본 조건
    pub selection: SelectionOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sweep_points: DEFAULT_SWEEP_POINTS,
            defaults: OperatingPoint::default(),
            selection: SelectionOptions::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        tracing::info!(path = %path.display(), "default config written");
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
