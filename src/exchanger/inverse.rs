//! 역산 계산 모음.
//!
//! 사용자가 한 변수를 고정하고 다른 변수를 바꿀 때, 나머지 값을 일정하게 두고
//! 미지수 하나를 되돌려 구한다. 입력 중에 계속 호출되므로 어떤 입력에도
//! 실패하지 않고, 항상 허용 범위 안의 반올림된 값을 돌려준다.
//!
//! 대응이 안 되는 요청은 다음 규칙으로 처리한다.
//! - 유량: 불가능한 목표면 최소 유량, 전열 상한에 걸려 포화되면 상한이 막 걸리는 유량
//! - 온도: 계수가 포화/특이하거나 전열이 없는 영역의 목표면 목표값 그대로
//!
//! NaN/무한대 목표는 불가능한 요청으로 본다.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::balance::{driving_capacity_w_per_c, side_capacity_w_per_c};
use super::constants::{
    bound_flow, bound_temp, flow_from_capacity_rate, NOMINAL_CAPACITY_W_PER_C,
    SOLVED_FLOW_MIN_M3_PER_H,
};
use super::operating_point::{OperatingPoint, Side, SideVar, Variable};

const SINGULAR_EPS: f64 = 1e-9;

fn infeasible_flow(reason: &'static str) -> f64 {
    debug!(reason, "infeasible flow target, returning minimum flow");
    bound_flow(SOLVED_FLOW_MIN_M3_PER_H)
}

/// 전열 상한이 막 걸리기 시작하는 가열측 유량.
fn saturation_flow() -> f64 {
    debug!("capacity ceiling saturated, returning boundary flow");
    bound_flow(flow_from_capacity_rate(NOMINAL_CAPACITY_W_PER_C / 2.0))
}

fn pass_through(target_c: f64, reason: &'static str) -> f64 {
    debug!(target_c, reason, "returning target temperature unchanged");
    bound_temp(target_c)
}

/// 열량으로부터 한쪽 유로의 유량을 구한다.
///
/// `duty = m·c·(입구 − 출구)` (저온 측은 부호 반대)를 유량에 대해 푼다.
pub fn flow_from_duty(side: Side, duty_kw: f64, inlet_c: f64, outlet_c: f64) -> f64 {
    let dt = side.sign() * (inlet_c - outlet_c);
    if !duty_kw.is_finite() {
        return infeasible_flow("non-finite duty");
    }
    if duty_kw <= 0.0 {
        return infeasible_flow("non-positive duty");
    }
    if dt <= 0.0 {
        return infeasible_flow("temperature difference in wrong direction");
    }
    bound_flow(flow_from_capacity_rate(duty_kw * 1000.0 / dt))
}

/// 열량과 출구 온도로부터 입구 온도를 구한다.
pub fn inlet_from_duty(side: Side, duty_kw: f64, outlet_c: f64, flow_m3_per_h: f64) -> f64 {
    let change = duty_kw.max(0.0) * 1000.0 / side_capacity_w_per_c(flow_m3_per_h);
    bound_temp(outlet_c + side.sign() * change)
}

/// 열량과 입구 온도로부터 출구 온도를 구한다.
pub fn outlet_from_duty(side: Side, duty_kw: f64, inlet_c: f64, flow_m3_per_h: f64) -> f64 {
    let change = duty_kw.max(0.0) * 1000.0 / side_capacity_w_per_c(flow_m3_per_h);
    bound_temp(inlet_c - side.sign() * change)
}

/// 목표 출구 온도를 만드는 같은 쪽 유량을 구한다.
///
/// 가열측은 `Tg2 = Tg1 − c·(Tg1 − Tx1)`, `c = min(C_g, FK/2) / C_g` 를 풀고,
/// 피가열측은 열량이 Gx와 무관하므로 `C_x = Q / (Tx2 − Tx1)` 로 구한다.
pub fn flow_from_outlet(side: Side, target_c: f64, point: &OperatingPoint) -> f64 {
    if !target_c.is_finite() {
        return infeasible_flow("non-finite outlet target");
    }
    let dt = point.hot_inlet_c - point.cold_inlet_c;
    if dt <= 0.0 {
        return infeasible_flow("no driving temperature difference");
    }
    match side {
        Side::Hot => {
            if target_c >= point.hot_inlet_c {
                return infeasible_flow("hot outlet at or above hot inlet");
            }
            let c = (point.hot_inlet_c - target_c) / dt;
            if c >= 1.0 {
                return saturation_flow();
            }
            bound_flow(flow_from_capacity_rate(NOMINAL_CAPACITY_W_PER_C / (2.0 * c)))
        }
        Side::Cold => {
            let rise = target_c - point.cold_inlet_c;
            if rise <= 0.0 {
                return infeasible_flow("cold outlet at or below cold inlet");
            }
            let duty_w = driving_capacity_w_per_c(point.hot_flow_m3_per_h) * dt;
            bound_flow(flow_from_capacity_rate(duty_w / rise))
        }
    }
}

/// 목표 출구 온도를 만드는 같은 쪽 입구 온도를 구한다.
///
/// 유량이 고정이면 유효 계수 `c`도 고정이므로 `T2 = T1 − c·(T1 − T_other)`가
/// 입구에 대해 선형이다.
pub fn inlet_from_outlet(side: Side, target_c: f64, point: &OperatingPoint) -> f64 {
    if !target_c.is_finite() {
        return pass_through(target_c, "non-finite outlet target");
    }
    let driving = driving_capacity_w_per_c(point.hot_flow_m3_per_h);
    match side {
        Side::Hot => {
            if target_c <= point.cold_inlet_c {
                return pass_through(target_c, "no transfer below cold inlet");
            }
            let c = driving / side_capacity_w_per_c(point.hot_flow_m3_per_h);
            if c >= 1.0 - SINGULAR_EPS {
                return pass_through(target_c, "coefficient saturated");
            }
            bound_temp((target_c - c * point.cold_inlet_c) / (1.0 - c))
        }
        Side::Cold => {
            let k = driving / side_capacity_w_per_c(point.cold_flow_m3_per_h);
            if k >= 1.0 - SINGULAR_EPS {
                return pass_through(target_c, "coefficient saturated");
            }
            // k < 1 이면 Tx2는 Tg1을 넘을 수 없다.
            if target_c >= point.hot_inlet_c {
                return pass_through(target_c, "cold outlet at or above hot inlet");
            }
            bound_temp((target_c - k * point.hot_inlet_c) / (1.0 - k))
        }
    }
}

/// 피가열측 출구 온도 목표를 만드는 가열측 유량을 구한다.
pub fn hot_flow_from_cold_outlet(target_c: f64, point: &OperatingPoint) -> f64 {
    if !target_c.is_finite() {
        return infeasible_flow("non-finite outlet target");
    }
    let dt = point.hot_inlet_c - point.cold_inlet_c;
    let rise = target_c - point.cold_inlet_c;
    if dt <= 0.0 || rise <= 0.0 {
        return infeasible_flow("cold outlet unreachable");
    }
    let required = side_capacity_w_per_c(point.cold_flow_m3_per_h) * rise / dt;
    if required >= NOMINAL_CAPACITY_W_PER_C / 2.0 {
        return saturation_flow();
    }
    bound_flow(flow_from_capacity_rate(required))
}

/// 어떤 값을 기준으로 역산하는지.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Driver {
    /// 목표 열량 [kW]
    Duty,
    /// 목표 출구 온도 [°C]
    Outlet(Side),
}

/// (미지수, 기준값) 조합 하나.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Inversion {
    FlowFromDuty(Side),
    InletFromDuty(Side),
    OutletFromDuty(Side),
    FlowFromOutlet(Side),
    InletFromOutlet(Side),
    HotFlowFromColdOutlet,
}

impl Inversion {
    pub const ALL: [Inversion; 11] = [
        Inversion::FlowFromDuty(Side::Hot),
        Inversion::FlowFromDuty(Side::Cold),
        Inversion::InletFromDuty(Side::Hot),
        Inversion::InletFromDuty(Side::Cold),
        Inversion::OutletFromDuty(Side::Hot),
        Inversion::OutletFromDuty(Side::Cold),
        Inversion::FlowFromOutlet(Side::Hot),
        Inversion::FlowFromOutlet(Side::Cold),
        Inversion::InletFromOutlet(Side::Hot),
        Inversion::InletFromOutlet(Side::Cold),
        Inversion::HotFlowFromColdOutlet,
    ];

    /// 열량 기준 역산 중 주어진 변수를 미지수로 하는 것.
    pub fn from_duty(unknown: Variable) -> Self {
        match unknown.var {
            SideVar::Inlet => Inversion::InletFromDuty(unknown.side),
            SideVar::Outlet => Inversion::OutletFromDuty(unknown.side),
            SideVar::Flow => Inversion::FlowFromDuty(unknown.side),
        }
    }

    /// 구하는 변수.
    pub fn unknown(self) -> Variable {
        match self {
            Inversion::FlowFromDuty(s) | Inversion::FlowFromOutlet(s) => {
                Variable::new(s, SideVar::Flow)
            }
            Inversion::InletFromDuty(s) | Inversion::InletFromOutlet(s) => {
                Variable::new(s, SideVar::Inlet)
            }
            Inversion::OutletFromDuty(s) => Variable::new(s, SideVar::Outlet),
            Inversion::HotFlowFromColdOutlet => Variable::HOT_FLOW,
        }
    }

    pub fn driver(self) -> Driver {
        match self {
            Inversion::FlowFromDuty(_)
            | Inversion::InletFromDuty(_)
            | Inversion::OutletFromDuty(_) => Driver::Duty,
            Inversion::FlowFromOutlet(s) | Inversion::InletFromOutlet(s) => Driver::Outlet(s),
            Inversion::HotFlowFromColdOutlet => Driver::Outlet(Side::Cold),
        }
    }

    /// `target`(열량 kW 또는 출구 온도 °C)을 만족하도록 미지수를 구한다.
    /// 미지수 자신의 현재 값은 쓰지 않는다.
    pub fn solve(self, target: f64, point: &OperatingPoint) -> f64 {
        match self {
            Inversion::FlowFromDuty(s) => {
                let (inlet, outlet, _) = point.side(s);
                flow_from_duty(s, target, inlet, outlet)
            }
            Inversion::InletFromDuty(s) => {
                let (_, outlet, flow) = point.side(s);
                inlet_from_duty(s, target, outlet, flow)
            }
            Inversion::OutletFromDuty(s) => {
                let (inlet, _, flow) = point.side(s);
                outlet_from_duty(s, target, inlet, flow)
            }
            Inversion::FlowFromOutlet(s) => flow_from_outlet(s, target, point),
            Inversion::InletFromOutlet(s) => inlet_from_outlet(s, target, point),
            Inversion::HotFlowFromColdOutlet => hot_flow_from_cold_outlet(target, point),
        }
    }

    /// 역산한 값을 미지수 자리에 넣은 운전점을 돌려준다.
    pub fn apply(self, target: f64, point: &OperatingPoint) -> OperatingPoint {
        point.with(self.unknown(), self.solve(target, point))
    }

    /// CLI 표기 (예: `gg-from-duty`, `tx1-from-tx2`).
    pub fn name(self) -> &'static str {
        match self {
            Inversion::FlowFromDuty(Side::Hot) => "gg-from-duty",
            Inversion::FlowFromDuty(Side::Cold) => "gx-from-duty",
            Inversion::InletFromDuty(Side::Hot) => "tg1-from-duty",
            Inversion::InletFromDuty(Side::Cold) => "tx1-from-duty",
            Inversion::OutletFromDuty(Side::Hot) => "tg2-from-duty",
            Inversion::OutletFromDuty(Side::Cold) => "tx2-from-duty",
            Inversion::FlowFromOutlet(Side::Hot) => "gg-from-tg2",
            Inversion::FlowFromOutlet(Side::Cold) => "gx-from-tx2",
            Inversion::InletFromOutlet(Side::Hot) => "tg1-from-tg2",
            Inversion::InletFromOutlet(Side::Cold) => "tx1-from-tx2",
            Inversion::HotFlowFromColdOutlet => "gg-from-tx2",
        }
    }
}

impl fmt::Display for Inversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 알 수 없는 역산 이름.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("알 수 없는 역산 조합: {0}")]
pub struct UnknownInversion(pub String);

impl FromStr for Inversion {
    type Err = UnknownInversion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Inversion::ALL
            .into_iter()
            .find(|inv| inv.name() == wanted)
            .ok_or(UnknownInversion(s.to_string()))
    }
}
