//! simplelog 기반 터미널 로거 초기화.
//!
//! 로그는 항상 stderr로 보낸다. stdout에는 계산 결과만 남는다.
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// 로거 초기화 오류.
#[derive(Debug)]
pub enum LoggerError {
    /// 알 수 없는 레벨 문자열
    InvalidLevel(String),
    /// 전역 로거가 이미 설정됨
    SetLogger(log::SetLoggerError),
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoggerError::InvalidLevel(s) => write!(f, "unknown log level: {s}"),
            LoggerError::SetLogger(e) => write!(f, "logger setup failed: {e}"),
        }
    }
}

impl std::error::Error for LoggerError {}

impl From<log::SetLoggerError> for LoggerError {
    fn from(value: log::SetLoggerError) -> Self {
        LoggerError::SetLogger(value)
    }
}

/// "warn", "INFO" 같은 문자열을 레벨로 바꾼다.
pub fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
    level
        .trim()
        .parse::<LevelFilter>()
        .map_err(|_| LoggerError::InvalidLevel(level.to_string()))
}

/// 전역 로거를 설치한다. 프로세스당 한 번만 호출한다.
pub fn init_logger(level: &str) -> Result<(), LoggerError> {
    let filter = parse_level(level)?;
    let log_cfg = ConfigBuilder::new().set_time_level(LevelFilter::Off).build();
    TermLogger::init(filter, log_cfg, TerminalMode::Stderr, ColorChoice::Auto)?;
    Ok(())
}
