use log::info;
use std::io::{self, Write};

use crate::chart::{self, ChartLayout};
use crate::config::Config;
use crate::explosion::{ExplosionScenario, LbvReport};
use crate::i18n::Translator;
use crate::logging::LoggerError;
use crate::ui_cli;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 표준출력 입출력 오류
    Io(std::io::Error),
    /// 설정 로드 오류
    Config(crate::config::ConfigError),
    /// 로거 초기화 오류
    Logger(LoggerError),
    /// 차트 창 오류
    Chart(eframe::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "I/O error: {e}"),
            AppError::Config(e) => write!(f, "config error: {e}"),
            AppError::Logger(e) => write!(f, "logger error: {e}"),
            AppError::Chart(e) => write!(f, "chart window error: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<LoggerError> for AppError {
    fn from(value: LoggerError) -> Self {
        AppError::Logger(value)
    }
}

impl From<eframe::Error> for AppError {
    fn from(value: eframe::Error) -> Self {
        AppError::Chart(value)
    }
}

/// 예제 시나리오로 LBV를 계산하고, 결과를 표준출력에 인쇄한 뒤 차트를 띄운다.
pub fn run(config: &Config, tr: &Translator) -> Result<(), AppError> {
    run_with_output(&mut io::stdout(), config, tr)
}

/// [`run`]과 같지만 결과 줄을 지정한 출력으로 쓴다.
pub fn run_with_output<W: Write>(
    out: &mut W,
    config: &Config,
    tr: &Translator,
) -> Result<(), AppError> {
    let scenario = ExplosionScenario::methane_air_example();
    let report = LbvReport::compute(&scenario);
    ui_cli::write_report(out, &report, tr)?;
    out.flush()?;
    if config.show_plot {
        chart::show_chart(&report, tr, &config.chart, ChartLayout::PlotOnly)?;
    } else {
        info!("plot disabled; skipping chart window");
    }
    Ok(())
}
