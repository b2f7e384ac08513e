use clap::Parser;
use lbv_toolbox::{app, config, i18n, logging};
use std::path::PathBuf;
use std::process::ExitCode;

/// 밀폐 용기 폭발 시험 값으로 메탄-공기 층류 연소속도를 계산한다.
#[derive(Debug, Parser)]
#[command(name = "lbv_toolbox_cli", version, about)]
struct Cli {
    /// 언어 (auto/en/en-us/ko/ko-kr)
    #[arg(long, short = 'L')]
    lang: Option<String>,
    /// 결과만 인쇄하고 차트 창은 띄우지 않는다
    #[arg(long)]
    no_plot: bool,
    /// 로그 레벨 (off/error/warn/info/debug/trace)
    #[arg(long)]
    log_level: Option<String>,
    /// 설정 파일 경로 (기본: ./config.toml, 없으면 기본값)
    #[arg(long)]
    config: Option<PathBuf>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<(), app::AppError> {
    let mut cfg = match &cli.config {
        Some(path) => config::load_from(path)?,
        None => config::load_or_default()?,
    };
    if let Some(level) = cli.log_level {
        cfg.log_level = level;
    }
    if cli.no_plot {
        cfg.show_plot = false;
    }
    logging::init_logger(&cfg.log_level)?;
    log::info!("configuration loaded: {cfg:?}");

    let lang = i18n::resolve_language(
        cli.lang.as_deref().unwrap_or("auto"),
        Some(cfg.language.as_str()),
    );
    let tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    log::info!("language resolved to {lang} ({})", tr.language_code());
    app::run(&cfg, &tr)?;
    Ok(())
}
