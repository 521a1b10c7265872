use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::quantity::MAX_PRECISION;
use crate::units::LengthUnit;

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드 (auto/ko/en)
    pub language: String,
    /// 입력 폼의 초기 값
    pub default_value: f64,
    /// 입력 폼의 초기 입력 단위
    pub default_from: LengthUnit,
    /// 입력 폼의 초기 변환 단위
    pub default_to: LengthUnit,
    /// 소수점 자리수. 없으면 최단 표기.
    pub precision: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            default_value: 0.0,
            default_from: LengthUnit::Foot,
            default_to: LengthUnit::Meter,
            precision: None,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Serde(e) => Some(e),
            ConfigError::Serialize(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_default_from(Path::new(DEFAULT_CONFIG_PATH))
}

/// 지정된 경로의 설정을 로드한다. 파일이 없으면 기본 설정을 저장한 뒤 반환한다.
pub fn load_or_default_from(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let mut cfg: Config = toml::from_str(&content)?;
        cfg.sanitize();
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        info!("기본 설정 파일 생성: {}", path.display());
        Ok(cfg)
    }
}

/// 로드된 설정과, 그 설정을 파일에 다시 써도 되는지 여부.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    /// 파일을 읽지 못해 기본값으로 대체했으면 false. 사용자 파일을 덮어쓰지 않기 위함.
    pub writable: bool,
}

/// 설정을 로드하되 실패하면 기본 설정으로 대체하고 저장을 막는다.
pub fn load_or_fallback(path: &Path) -> LoadedConfig {
    match load_or_default_from(path) {
        Ok(config) => LoadedConfig {
            config,
            writable: true,
        },
        Err(err) => {
            warn!(
                "{}: {err}; 기본 설정을 사용하며 파일은 덮어쓰지 않습니다",
                path.display()
            );
            LoadedConfig {
                config: Config::default(),
                writable: false,
            }
        }
    }
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// 설정을 지정된 경로에 저장한다.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn sanitize(&mut self) {
        if !self.default_value.is_finite() {
            warn!(
                "default_value {} 는 유한한 값이 아니므로 0으로 바꿉니다",
                self.default_value
            );
            self.default_value = 0.0;
        }
        if let Some(p) = self.precision.filter(|p| *p > MAX_PRECISION) {
            warn!("precision {p} 는 최대 {MAX_PRECISION} 자리로 줄입니다");
            self.precision = Some(MAX_PRECISION);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mirrors_initial_form_state() {
        let cfg = Config::default();
        assert_eq!(cfg.default_value, 0.0);
        assert_eq!(cfg.default_from, LengthUnit::Foot);
        assert_eq!(cfg.default_to, LengthUnit::Meter);
        assert_eq!(cfg.precision, None);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: Config = toml::from_str("language = \"en\"\n").expect("parse");
        assert_eq!(cfg.language, "en");
        assert_eq!(cfg.default_from, LengthUnit::Foot);
    }

    #[test]
    fn non_finite_default_value_is_reset() {
        let mut cfg: Config = toml::from_str("default_value = nan\n").expect("parse");
        cfg.sanitize();
        assert_eq!(cfg.default_value, 0.0);
    }

    #[test]
    fn oversized_precision_is_capped() {
        let mut cfg: Config = toml::from_str("precision = 70000\n").expect("parse");
        cfg.sanitize();
        assert_eq!(cfg.precision, Some(MAX_PRECISION));

        let mut cfg: Config = toml::from_str("precision = 4\n").expect("parse");
        cfg.sanitize();
        assert_eq!(cfg.precision, Some(4));
    }
}
