use serde::{Deserialize, Serialize};

/// 밀폐 용기 폭발 시험 한 건의 입력 값. 모두 SI 단위.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExplosionScenario {
    /// 최대 폭발 압력 P_max [Pa]
    pub p_max: f64,
    /// 최대 압력 상승 속도 (dP/dt)_max [Pa/s]
    pub dpdt_max: f64,
    /// 연소실 체적 V [m³]
    pub volume: f64,
    /// 초기 압력 P_0 [Pa]
    pub p0: f64,
    /// 초기 혼합기 밀도 ρ_0 [kg/m³]
    pub rho0: f64,
    /// 비열비 γ [-]
    pub gamma: f64,
}

impl ExplosionScenario {
    /// 메탄-공기 혼합기 예제 값. 네 가지 방법 모두 이 한 세트를 공유한다.
    pub fn methane_air_example() -> Self {
        Self {
            p_max: 1.2e5,
            dpdt_max: 5e4,
            volume: 0.02,
            p0: 1e5,
            rho0: 1.2,
            gamma: 1.4,
        }
    }
}

impl Default for ExplosionScenario {
    fn default() -> Self {
        Self::methane_air_example()
    }
}
