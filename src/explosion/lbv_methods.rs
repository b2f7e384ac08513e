//! 층류 연소속도(LBV) 경험식 4종.
//!
//! 모든 식은 압력, 체적, 밀도 또는 비열비의 대수 조합에 세제곱근을 취한다.
//! 입력 범위/부호 검사는 하지 않는다. 실수 세제곱근(`f64::cbrt`)을 사용하므로
//! 음수 인자는 NaN이 아니라 음수 결과가 된다.
use log::debug;

use super::scenario::ExplosionScenario;
use crate::i18n::keys;

/// 일반 기체 상수 R [J/(mol·K)]
pub const GAS_CONSTANT: f64 = 8.314;

/// Manton 방법: S_u = ∛(3·V·(dP/dt)_max / P_max²)
pub fn manton(p_max: f64, dpdt_max: f64, volume: f64) -> f64 {
    (3.0 * volume * dpdt_max / (p_max * p_max)).cbrt()
}

/// Lewis & von Elbe 방법: S_u = ∛(3·V·P_max / (P_0·ρ_0))
pub fn lewis_von_elbe(p_max: f64, p0: f64, volume: f64, rho0: f64) -> f64 {
    (3.0 * volume * p_max / (p0 * rho0)).cbrt()
}

/// Dahoe(2005) 박막 화염 방법: S_u = ∛(P_max·V·(dP/dt)_max / R)
pub fn dahoe_2005(p_max: f64, dpdt_max: f64, volume: f64) -> f64 {
    (p_max * volume * dpdt_max / GAS_CONSTANT).cbrt()
}

/// Dahoe(2013) 박막 화염 방법: S_u = ∛(3·γ·V·(P_max − P_0) / P_0)
///
/// P_max < P_0 이면 음수 속도를 그대로 반환한다.
pub fn dahoe_2013(p_max: f64, p0: f64, volume: f64, gamma: f64) -> f64 {
    (3.0 * gamma * volume * (p_max - p0) / p0).cbrt()
}

/// LBV 산정 방법 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LbvMethod {
    Manton,
    LewisVonElbe,
    Dahoe2005,
    Dahoe2013,
}

impl LbvMethod {
    /// 출력/차트 표시 순서.
    pub const ALL: [LbvMethod; 4] = [
        LbvMethod::Manton,
        LbvMethod::LewisVonElbe,
        LbvMethod::Dahoe2005,
        LbvMethod::Dahoe2013,
    ];

    /// 시나리오에서 필요한 값만 골라 해당 식을 계산한다.
    pub fn evaluate(self, s: &ExplosionScenario) -> f64 {
        let value = match self {
            LbvMethod::Manton => manton(s.p_max, s.dpdt_max, s.volume),
            LbvMethod::LewisVonElbe => lewis_von_elbe(s.p_max, s.p0, s.volume, s.rho0),
            LbvMethod::Dahoe2005 => dahoe_2005(s.p_max, s.dpdt_max, s.volume),
            LbvMethod::Dahoe2013 => dahoe_2013(s.p_max, s.p0, s.volume, s.gamma),
        };
        debug!("{self:?}: S_u = {value} m/s");
        value
    }

    /// 콘솔 결과 줄에 쓰는 방법 이름 키.
    pub fn label_key(self) -> &'static str {
        match self {
            LbvMethod::Manton => keys::METHOD_MANTON,
            LbvMethod::LewisVonElbe => keys::METHOD_LEWIS_VON_ELBE,
            LbvMethod::Dahoe2005 => keys::METHOD_DAHOE_2005,
            LbvMethod::Dahoe2013 => keys::METHOD_DAHOE_2013,
        }
    }

    /// 차트 범주(막대) 이름 키.
    pub fn short_key(self) -> &'static str {
        match self {
            LbvMethod::Manton => keys::CHART_MANTON,
            LbvMethod::LewisVonElbe => keys::CHART_LEWIS_VON_ELBE,
            LbvMethod::Dahoe2005 => keys::CHART_DAHOE_2005,
            LbvMethod::Dahoe2013 => keys::CHART_DAHOE_2013,
        }
    }

    /// 막대 색상(RGB). blue/green/orange/red 순.
    pub fn color_rgb(self) -> [u8; 3] {
        match self {
            LbvMethod::Manton => [0x00, 0x00, 0xFF],
            LbvMethod::LewisVonElbe => [0x00, 0x80, 0x00],
            LbvMethod::Dahoe2005 => [0xFF, 0xA5, 0x00],
            LbvMethod::Dahoe2013 => [0xFF, 0x00, 0x00],
        }
    }
}
