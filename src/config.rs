use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 기본 설정 파일 이름. 작업 디렉터리 기준.
pub const CONFIG_FILE: &str = "config.toml";

/// 막대 차트 창 설정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    /// 창 너비(px)
    pub width: f32,
    /// 창 높이(px)
    pub height: f32,
    /// 막대 위에 값 표시 여부
    pub show_values: bool,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            width: 820.0,
            height: 560.0,
            show_values: true,
        }
    }
}

/// 애플리케이션 설정을 표현한다. 계산 입력값은 담지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드(auto/en-us/ko-kr)
    pub language: String,
    /// 외부 언어팩 디렉터리
    pub language_pack_dir: Option<String>,
    /// 로그 레벨(off/error/warn/info/debug/trace)
    pub log_level: String,
    /// 계산 후 차트 창을 띄울지 여부
    pub show_plot: bool,
    pub chart: ChartSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".into(),
            language_pack_dir: None,
            log_level: "warn".into(),
            show_plot: true,
            chart: ChartSettings::default(),
        }
    }
}

/// 설정 로드 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config file I/O error: {e}"),
            ConfigError::Serde(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

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

/// config.toml이 있으면 읽고, 없으면 기본 설정을 반환한다. 파일은 만들지 않는다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new(CONFIG_FILE);
    if path.exists() {
        load_from(path)
    } else {
        Ok(Config::default())
    }
}

/// 지정한 경로의 설정 파일을 읽는다.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}

/// TOML 문자열을 설정으로 해석한다. 빠진 항목은 기본값으로 채운다.
pub fn parse(content: &str) -> Result<Config, ConfigError> {
    let cfg: Config = toml::from_str(content)?;
    Ok(cfg)
}
