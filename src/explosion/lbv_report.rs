use log::info;

use super::lbv_methods::LbvMethod;
use super::scenario::ExplosionScenario;
use crate::i18n::{keys, Translator};

/// 방법 하나의 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LbvEntry {
    pub method: LbvMethod,
    /// 층류 연소속도 [m/s]
    pub velocity_m_per_s: f64,
}

/// 한 시나리오에 대한 4가지 방법의 LBV 결과 묶음.
///
/// 항목 순서는 항상 [`LbvMethod::ALL`] 순서와 같다.
#[derive(Debug, Clone, PartialEq)]
pub struct LbvReport {
    pub scenario: ExplosionScenario,
    pub entries: Vec<LbvEntry>,
}

impl LbvReport {
    /// 네 가지 방법을 순서대로 계산한다.
    pub fn compute(scenario: &ExplosionScenario) -> Self {
        let entries = LbvMethod::ALL
            .iter()
            .map(|&method| LbvEntry {
                method,
                velocity_m_per_s: method.evaluate(scenario),
            })
            .collect();
        info!("LBV report computed for {scenario:?}");
        Self {
            scenario: *scenario,
            entries,
        }
    }

    /// 특정 방법의 결과를 찾는다.
    pub fn velocity(&self, method: LbvMethod) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.method == method)
            .map(|e| e.velocity_m_per_s)
    }

    /// 제목 줄 + 방법별 결과 줄을 반환한다.
    pub fn lines(&self, tr: &Translator) -> Vec<String> {
        let mut out = Vec::with_capacity(self.entries.len() + 1);
        out.push(tr.t(keys::REPORT_HEADING));
        out.extend(self.entries.iter().map(|e| format_entry(tr, e)));
        out
    }
}

/// 속도를 고정 소수점 4자리로 표기한다. 크기와 무관하게 지수 표기는 쓰지 않는다.
pub fn format_velocity(v: f64) -> String {
    format!("{v:.4}")
}

/// `"<방법 이름>: <값> m/s"` 형식의 결과 줄.
pub fn format_entry(tr: &Translator, entry: &LbvEntry) -> String {
    format!(
        "{}: {} m/s",
        tr.t(entry.method.label_key()),
        format_velocity(entry.velocity_m_per_s)
    )
}
