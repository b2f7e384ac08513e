//! eframe/egui_plot 기반 LBV 막대 차트 창.
//!
//! 창을 닫을 때까지 호출 스레드를 막는다. 그림 파일은 저장하지 않는다.
use eframe::{egui, App, Frame};
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoint, Text};
use image::GenericImageView;
use log::{info, warn};
use std::{fs, path::Path};

use crate::config::ChartSettings;
use crate::explosion::{format_velocity, LbvReport};
use crate::i18n::{keys, Language, Translator};

/// 막대 하나(범주 이름, 높이, 색상).
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub label: String,
    pub value: f64,
    pub color: [u8; 3],
}

/// 보고서 항목을 표시 순서대로 막대로 바꾼다.
pub fn chart_bars(report: &LbvReport, tr: &Translator) -> Vec<ChartBar> {
    report
        .entries
        .iter()
        .map(|e| ChartBar {
            label: tr.t(e.method.short_key()),
            value: e.velocity_m_per_s,
            color: e.method.color_rgb(),
        })
        .collect()
}

/// 창 구성. 입력값/결과 표를 옆에 붙일지 결정한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartLayout {
    PlotOnly,
    WithDetails,
}

pub struct LbvChartApp {
    report: LbvReport,
    tr: Translator,
    settings: ChartSettings,
    layout: ChartLayout,
    bars: Vec<ChartBar>,
}

impl LbvChartApp {
    pub fn new(
        report: LbvReport,
        tr: Translator,
        settings: ChartSettings,
        layout: ChartLayout,
    ) -> Self {
        let bars = chart_bars(&report, &tr);
        Self {
            report,
            tr,
            settings,
            layout,
            bars,
        }
    }

    fn ui_details(&self, ui: &mut egui::Ui) {
        let s = &self.report.scenario;
        ui.heading(self.tr.t(keys::GUI_SCENARIO_HEADING));
        egui::Grid::new("scenario_grid").striped(true).show(ui, |ui| {
            for (key, value) in [
                (keys::PARAM_P_MAX, s.p_max),
                (keys::PARAM_DPDT_MAX, s.dpdt_max),
                (keys::PARAM_VOLUME, s.volume),
                (keys::PARAM_P0, s.p0),
                (keys::PARAM_RHO0, s.rho0),
                (keys::PARAM_GAMMA, s.gamma),
            ] {
                ui.label(self.tr.t(key));
                ui.monospace(format!("{value}"));
                ui.end_row();
            }
        });
        ui.separator();
        ui.heading(self.tr.t(keys::GUI_RESULTS_HEADING));
        egui::Grid::new("result_grid").striped(true).show(ui, |ui| {
            ui.strong(self.tr.t(keys::GUI_COLUMN_METHOD));
            ui.strong(self.tr.t(keys::GUI_COLUMN_VALUE));
            ui.end_row();
            for e in &self.report.entries {
                ui.label(self.tr.t(e.method.label_key()));
                ui.monospace(format_velocity(e.velocity_m_per_s));
                ui.end_row();
            }
        });
    }

    fn ui_plot(&self, ui: &mut egui::Ui) {
        ui.heading(self.tr.t(keys::CHART_TITLE));
        Plot::new("lbv_bar_chart")
            .x_axis_label(self.tr.t(keys::CHART_X_LABEL))
            .y_axis_label(self.tr.t(keys::CHART_Y_LABEL))
            .show_grid([false, true])
            .legend(Legend::default())
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .include_y(0.0)
            .show(ui, |plot_ui| {
                for (i, bar) in self.bars.iter().enumerate() {
                    let x = i as f64;
                    let [r, g, b] = bar.color;
                    let color = egui::Color32::from_rgb(r, g, b);
                    let chart = BarChart::new(vec![Bar::new(x, bar.value)
                        .width(0.6)
                        .name(&bar.label)
                        .fill(color)])
                    .color(color)
                    .name(&bar.label);
                    plot_ui.bar_chart(chart);

                    let caption = if self.settings.show_values {
                        format!("{}\n{}", bar.label, format_velocity(bar.value))
                    } else {
                        bar.label.clone()
                    };
                    plot_ui.text(
                        Text::new(PlotPoint::new(x, bar.value), caption)
                            .anchor(egui::Align2::CENTER_BOTTOM),
                    );
                }
            });
    }
}

impl App for LbvChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        if self.layout == ChartLayout::WithDetails {
            egui::SidePanel::left("details")
                .resizable(true)
                .default_width(320.0)
                .show(ctx, |ui| self.ui_details(ui));
        }
        egui::CentralPanel::default().show(ctx, |ui| self.ui_plot(ui));
    }
}

/// 차트 창을 띄우고 닫힐 때까지 기다린다.
pub fn show_chart(
    report: &LbvReport,
    tr: &Translator,
    settings: &ChartSettings,
    layout: ChartLayout,
) -> Result<(), eframe::Error> {
    let mut viewport = egui::ViewportBuilder::default()
        .with_title(tr.t(keys::GUI_WINDOW_TITLE))
        .with_inner_size([settings.width, settings.height]);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let app = LbvChartApp::new(report.clone(), tr.clone(), settings.clone(), layout);
    let needs_hangul = tr.language() == Language::Ko;
    info!("opening chart window ({layout:?})");
    let result = eframe::run_native(
        &tr.t(keys::GUI_WINDOW_TITLE),
        options,
        Box::new(move |cc| {
            if needs_hangul {
                if let Err(e) = setup_fonts(&cc.egui_ctx) {
                    warn!("Font error: {e}");
                }
            }
            Box::new(app)
        }),
    );
    info!("chart window closed");
    result
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글 표시용 폰트를 찾아 우선 적용한다.
/// 1) assets/fonts/ 아래 프로젝트 폰트
/// 2) Windows 시스템 폰트(맑은 고딕/굴림)
/// 3) 흔한 Linux/macOS CJK 폰트 경로
/// 모두 실패하면 기본 폰트를 유지하고 Err를 반환한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates: Vec<std::path::PathBuf> = vec![
        "assets/fonts/malgun.ttf".into(),
        "assets/fonts/NanumGothic.ttf".into(),
    ];
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        candidates.push(fonts.join("malgun.ttf"));
        candidates.push(fonts.join("gulim.ttc"));
    }
    candidates.push("/usr/share/fonts/truetype/nanum/NanumGothic.ttf".into());
    candidates.push("/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc".into());
    candidates.push("/System/Library/Fonts/AppleSDGothicNeo.ttc".into());

    for p in candidates {
        if p.exists() {
            let bytes = fs::read(&p)
                .map_err(|e| format!("Failed to read font file ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }
    Err("Korean font not found; labels may not render.".into())
}
