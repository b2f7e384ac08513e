#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use lbv_toolbox::{
    chart::{self, ChartLayout},
    config,
    explosion::{ExplosionScenario, LbvReport},
    i18n, logging, ui_cli,
};
use std::env;

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/ko-kr/ko)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let app_cfg = config::load_or_default().unwrap_or_else(|e| {
        eprintln!("Config error: {e}");
        config::Config::default()
    });
    if let Err(e) = logging::init_logger(&app_cfg.log_level) {
        eprintln!("Logger error: {e}");
    }
    let lang = i18n::resolve_language(
        cli_lang.as_deref().unwrap_or("auto"),
        Some(app_cfg.language.as_str()),
    );
    let tr = i18n::Translator::new_with_pack(&lang, app_cfg.language_pack_dir.as_deref());

    let report = LbvReport::compute(&ExplosionScenario::methane_air_example());
    if let Err(e) = ui_cli::print_report(&report, &tr) {
        log::error!("failed to print report: {e}");
    }
    chart::show_chart(&report, &tr, &app_cfg.chart, ChartLayout::WithDetails)
}
