//! 필요 전열 면적 계산과 카탈로그 모델 선정.
//!
//! F = Q / (K · Δt_lm), 대향류 기준 로그 평균 온도차를 쓴다.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::catalog::{self, CatalogModel};
use crate::exchanger::constants::OVERALL_U_W_PER_M2K;

/// 요구 압력 기본값 [bar]
pub const DEFAULT_PRESSURE_BAR: f64 = 3.0;
/// 결과 개수 기본값
pub const DEFAULT_LIMIT: usize = 10;

/// 대향류 로그 평균 온도차 [K].
///
/// 온도차가 0 이하(온도 교차)면 1을 돌려 면적이 유한하게 남도록 하고,
/// 두 온도차가 0.01 이내로 같으면 산술 평균을 쓴다.
pub fn lmtd(hot_inlet_c: f64, hot_outlet_c: f64, cold_inlet_c: f64, cold_outlet_c: f64) -> f64 {
    let dt1 = hot_inlet_c - cold_outlet_c;
    let dt2 = hot_outlet_c - cold_inlet_c;
    if dt1 <= 0.0 || dt2 <= 0.0 {
        debug!(dt1, dt2, "temperature cross, LMTD fallback 1.0");
        return 1.0;
    }
    if (dt1 - dt2).abs() < 0.01 {
        return (dt1 + dt2) / 2.0;
    }
    (dt1 - dt2) / (dt1 / dt2).ln()
}

/// 필요 전열 면적 [m²]. 계산할 수 없으면 0을 돌려준다.
pub fn required_area(
    duty_kw: f64,
    hot_inlet_c: f64,
    hot_outlet_c: f64,
    cold_inlet_c: f64,
    cold_outlet_c: f64,
) -> f64 {
    let dt = lmtd(hot_inlet_c, hot_outlet_c, cold_inlet_c, cold_outlet_c);
    if duty_kw <= 0.0 || dt <= 0.0 {
        return 0.0;
    }
    duty_kw * 1000.0 / (OVERALL_U_W_PER_M2K * dt)
}

/// 선정 조건.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionOptions {
    /// 모델이 견뎌야 하는 압력 [bar]
    pub pressure_bar: f64,
    /// 최대 결과 수
    pub limit: usize,
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self {
            pressure_bar: DEFAULT_PRESSURE_BAR,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// 선정된 모델과 면적 여유율.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Selection<'a> {
    pub model: &'a CatalogModel,
    /// (모델 면적 − 필요 면적) / 필요 면적 × 100 [%]
    pub reserve_pct: f64,
}

/// 내장 카탈로그에서 모델을 선정한다.
pub fn select_models(
    duty_kw: f64,
    hot_inlet_c: f64,
    hot_outlet_c: f64,
    cold_inlet_c: f64,
    cold_outlet_c: f64,
    options: &SelectionOptions,
) -> Vec<Selection<'static>> {
    let area = required_area(duty_kw, hot_inlet_c, hot_outlet_c, cold_inlet_c, cold_outlet_c);
    select_from(catalog::models(), area, options)
}

/// 주어진 카탈로그에서 필요 면적 이상, 요구 압력 이상인 모델을
/// 면적이 작은 순으로 골라 `limit`개까지 돌려준다.
///
/// 면적이 같은 모델은 카탈로그 순서를 유지한다.
pub fn select_from<'a>(
    models: &'a [CatalogModel],
    required_area_m2: f64,
    options: &SelectionOptions,
) -> Vec<Selection<'a>> {
    if required_area_m2 <= 0.0 {
        debug!(required_area_m2, "no positive area requirement, nothing selected");
        return Vec::new();
    }
    let mut suitable: Vec<Selection> = models
        .iter()
        .filter(|m| m.pressure_bar >= options.pressure_bar)
        .filter(|m| m.area_m2 >= required_area_m2)
        .map(|m| Selection {
            model: m,
            reserve_pct: (m.area_m2 - required_area_m2) / required_area_m2 * 100.0,
        })
        .collect();
    suitable.sort_by(|a, b| a.model.area_m2.total_cmp(&b.model.area_m2));
    suitable.truncate(options.limit);
    if suitable.is_empty() {
        debug!(
            required_area_m2,
            pressure_bar = options.pressure_bar,
            "no catalog model satisfies the requirement"
        );
    }
    trace!(count = suitable.len(), "selection done");
    suitable
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lmtd_log_branch() {
        // dt1 = 40, dt2 = 20 → 20 / ln 2
        let v = lmtd(80.0, 40.0, 20.0, 40.0);
        assert!((v - 20.0 / 2f64.ln()).abs() < 1e-12, "lmtd={v}");
    }

    #[test]
    fn lmtd_near_equal_uses_arithmetic_mean() {
        let v = lmtd(70.0, 50.005, 20.0, 40.0);
        assert!((v - 30.0025).abs() < 1e-9, "lmtd={v}");
    }

    #[test]
    fn lmtd_cross_falls_back_to_one() {
        assert_eq!(lmtd(40.0, 30.0, 20.0, 45.0), 1.0);
        assert_eq!(lmtd(70.0, 20.0, 20.0, 40.0), 1.0);
    }
}
