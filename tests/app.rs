//! 차트 없이 실행했을 때의 콘솔 출력 회귀 테스트.
use lbv_toolbox::app::run_with_output;
use lbv_toolbox::config::Config;
use lbv_toolbox::i18n::Translator;

#[test]
fn run_without_plot_prints_heading_and_four_lines() {
    let cfg = Config {
        show_plot: false,
        ..Config::default()
    };
    let tr = Translator::new("en-us");
    let mut out = Vec::new();
    run_with_output(&mut out, &cfg, &tr).expect("run without plot");
    let text = String::from_utf8(out).expect("utf8");
    assert_eq!(
        text,
        "Laminar Burning Velocity Calculations:\n\
         Manton's Method: 0.0059 m/s\n\
         Lewis and von Elbe's Method: 0.3915 m/s\n\
         Dahoe's 2005 Method: 243.4765 m/s\n\
         Dahoe's 2013 Method: 0.2561 m/s\n"
    );
}
