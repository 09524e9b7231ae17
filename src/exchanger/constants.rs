//! 판형 열교환기 계산에 쓰는 고정 물성치와 정밀도/범위 규칙.
//!
//! 유체는 물(또는 20% 에틸렌글리콜)로 보고 온도에 따른 물성 변화는 무시한다.

/// 비열 [kJ/(kg·°C)]
pub const SPECIFIC_HEAT_KJ_PER_KG_C: f64 = 4.19;
/// 밀도 [kg/m³]
pub const DENSITY_KG_PER_M3: f64 = 1000.0;
/// 공칭 전열 용량(FK) [W/°C]. 단순화된 전열 상한식에 사용한다.
pub const NOMINAL_CAPACITY_W_PER_C: f64 = 1000.0;
/// 선정용 총괄 전열계수 K [W/(m²·K)], 물/에틸렌글리콜 20% 기준
pub const OVERALL_U_W_PER_M2K: f64 = 2500.0;

/// 정방향 계산에서 0 나눗셈을 막기 위한 최소 유량 [m³/h]
pub const FLOW_FLOOR_M3_PER_H: f64 = 0.01;
/// 역산 유량 허용 범위 [m³/h]
pub const SOLVED_FLOW_MIN_M3_PER_H: f64 = 0.1;
pub const SOLVED_FLOW_MAX_M3_PER_H: f64 = 50.0;
/// 역산 온도 허용 범위 [°C]
pub const SOLVED_TEMP_MIN_C: f64 = 0.0;
pub const SOLVED_TEMP_MAX_C: f64 = 150.0;

/// 온도 소수 자릿수
pub const TEMP_DECIMALS: i32 = 1;
/// 열량/비율 소수 자릿수
pub const POWER_DECIMALS: i32 = 2;
/// 역산 유량 소수 자릿수
pub const FLOW_DECIMALS: i32 = 2;

/// 체적유량(m³/h)을 질량유량(kg/s)으로 바꾼다.
pub fn mass_flow_kg_per_s(flow_m3_per_h: f64) -> f64 {
    flow_m3_per_h * DENSITY_KG_PER_M3 / 3600.0
}

/// 체적유량(m³/h)에 대한 열용량률 m·c [W/°C].
pub fn capacity_rate_w_per_c(flow_m3_per_h: f64) -> f64 {
    mass_flow_kg_per_s(flow_m3_per_h) * SPECIFIC_HEAT_KJ_PER_KG_C * 1000.0
}

/// 열용량률 [W/°C]에 해당하는 체적유량(m³/h).
pub fn flow_from_capacity_rate(capacity_w_per_c: f64) -> f64 {
    capacity_w_per_c / (SPECIFIC_HEAT_KJ_PER_KG_C * 1000.0) * 3600.0 / DENSITY_KG_PER_M3
}

/// 소수 `decimals` 자리로 반올림한다. 0.5는 항상 +∞ 방향으로 올린다.
///
/// `f64::round`는 음수의 0.5를 0에서 멀어지는 방향으로 보내므로 쓰지 않는다.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor + 0.5).floor() / factor
}

pub fn round_temp(value: f64) -> f64 {
    round_to(value, TEMP_DECIMALS)
}

pub fn round_power(value: f64) -> f64 {
    round_to(value, POWER_DECIMALS)
}

/// 역산 온도를 허용 범위로 자른 뒤 반올림한다. NaN은 하한으로 보낸다.
pub fn bound_temp(value: f64) -> f64 {
    if value.is_nan() {
        return SOLVED_TEMP_MIN_C;
    }
    round_temp(value.clamp(SOLVED_TEMP_MIN_C, SOLVED_TEMP_MAX_C))
}

/// 역산 유량을 허용 범위로 자른 뒤 반올림한다.
pub fn bound_flow(value: f64) -> f64 {
    if value.is_nan() {
        return SOLVED_FLOW_MIN_M3_PER_H;
    }
    round_to(
        value.clamp(SOLVED_FLOW_MIN_M3_PER_H, SOLVED_FLOW_MAX_M3_PER_H),
        FLOW_DECIMALS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_up_toward_positive_infinity() {
        assert_eq!(round_to(2.25, 1), 2.3);
        assert_eq!(round_to(-2.25, 1), -2.2);
        assert_eq!(round_to(0.125, 2), 0.13);
    }

    #[test]
    fn capacity_rate_and_flow_are_inverse() {
        let c = capacity_rate_w_per_c(5.0);
        assert!((c - 5819.444).abs() < 1e-3, "c={c}");
        assert!((flow_from_capacity_rate(c) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn bounds_clamp_before_rounding() {
        assert_eq!(bound_flow(0.0), 0.1);
        assert_eq!(bound_flow(99.0), 50.0);
        assert_eq!(bound_temp(-4.0), 0.0);
        assert_eq!(bound_temp(151.26), 150.0);
        assert_eq!(bound_temp(65.74), 65.7);
    }

    #[test]
    fn bounds_send_nan_to_lower_limit() {
        assert_eq!(bound_flow(f64::NAN), SOLVED_FLOW_MIN_M3_PER_H);
        assert_eq!(bound_temp(f64::NAN), SOLVED_TEMP_MIN_C);
        assert_eq!(bound_flow(f64::INFINITY), SOLVED_FLOW_MAX_M3_PER_H);
        assert_eq!(bound_temp(f64::NEG_INFINITY), SOLVED_TEMP_MIN_C);
    }
}
