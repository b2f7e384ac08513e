//! LBV 식의 스케일링/부호 성질을 proptest로 확인한다.
use lbv_toolbox::explosion::{
    dahoe_2005, dahoe_2013, lewis_von_elbe, manton, ExplosionScenario, LbvMethod,
};
use proptest::prelude::*;

fn rel_close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol * b.abs().max(1e-300)
}

fn scenario() -> impl Strategy<Value = ExplosionScenario> {
    (
        1.0e5f64..1.0e6,
        1.0e3f64..1.0e7,
        1.0e-3f64..10.0,
        1.0e4f64..1.0e5,
        0.1f64..5.0,
        1.05f64..1.7,
    )
        .prop_map(|(p_max, dpdt_max, volume, p0, rho0, gamma)| ExplosionScenario {
            p_max,
            dpdt_max,
            volume,
            p0,
            rho0,
            gamma,
        })
}

proptest! {
    /// 체적을 두 배로 하면 모든 방법의 결과가 2^(1/3)배가 된다.
    #[test]
    fn doubling_volume_scales_by_cube_root_of_two(s in scenario()) {
        let factor = 2f64.cbrt();
        let doubled = ExplosionScenario { volume: 2.0 * s.volume, ..s };
        for m in LbvMethod::ALL {
            let base = m.evaluate(&s);
            let scaled = m.evaluate(&doubled);
            prop_assert!(rel_close(scaled, factor * base, 1e-12), "{:?}: {} vs {}", m, scaled, base);
        }
    }

    /// Manton: P_max 두 배 → 2^(-2/3)배, dP/dt 두 배 → 2^(1/3)배.
    #[test]
    fn manton_pressure_homogeneity(p_max in 1.0e4f64..1.0e7, dpdt in 1.0e2f64..1.0e8, v in 1.0e-3f64..10.0) {
        let base = manton(p_max, dpdt, v);
        prop_assert!(rel_close(manton(2.0 * p_max, dpdt, v), base * 2f64.powf(-2.0 / 3.0), 1e-12));
        prop_assert!(rel_close(manton(p_max, 2.0 * dpdt, v), base * 2f64.cbrt(), 1e-12));
    }

    /// Lewis & von Elbe: ρ_0 두 배 → 2^(-1/3)배.
    #[test]
    fn lewis_density_homogeneity(p_max in 1.0e4f64..1.0e7, p0 in 1.0e4f64..1.0e6, v in 1.0e-3f64..10.0, rho0 in 0.1f64..10.0) {
        let base = lewis_von_elbe(p_max, p0, v, rho0);
        prop_assert!(rel_close(lewis_von_elbe(p_max, p0, v, 2.0 * rho0), base / 2f64.cbrt(), 1e-12));
    }

    /// Dahoe 2005: 결과의 세제곱은 P_max·V·dP/dt / R 이다.
    #[test]
    fn dahoe_2005_cube_recovers_argument(p_max in 1.0e4f64..1.0e7, dpdt in 1.0e2f64..1.0e8, v in 1.0e-3f64..10.0) {
        let s = dahoe_2005(p_max, dpdt, v);
        prop_assert!(rel_close(s * s * s, p_max * v * dpdt / 8.314, 1e-12));
    }

    /// Dahoe 2013: 부호는 P_max − P_0 의 부호를 따르고 NaN이 나오지 않는다.
    #[test]
    fn dahoe_2013_sign_follows_overpressure(p_max in 1.0e3f64..1.0e6, p0 in 1.0e3f64..1.0e6, v in 1.0e-3f64..10.0, gamma in 1.05f64..1.7) {
        let s = dahoe_2013(p_max, p0, v, gamma);
        prop_assert!(!s.is_nan());
        if p_max > p0 {
            prop_assert!(s > 0.0);
        } else if p_max < p0 {
            prop_assert!(s < 0.0);
        }
        let arg = 3.0 * gamma * v * (p_max - p0) / p0;
        prop_assert!((s * s * s - arg).abs() <= 1e-12 * arg.abs().max(1e-300));
    }

    /// 같은 입력이면 항상 같은 비트 패턴.
    #[test]
    fn evaluation_is_idempotent(s in scenario()) {
        for m in LbvMethod::ALL {
            prop_assert_eq!(m.evaluate(&s).to_bits(), m.evaluate(&s).to_bits());
        }
    }
}
