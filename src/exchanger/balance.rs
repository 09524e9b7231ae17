//! 정방향 열수지 계산.
//!
//! 열량은 두 상한 중 작은 값으로 정한다.
//! - 열원 상한: m_g · c · (Tg1 − Tx1)
//! - 전열 상한: FK · (Tg1 − Tx1) / 2
//!
//! 정해진 열량으로 양쪽 출구 온도를 열수지식에서 되돌려 구한다.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::constants::{
    capacity_rate_w_per_c, round_power, round_temp, FLOW_FLOOR_M3_PER_H,
    NOMINAL_CAPACITY_W_PER_C,
};
use super::operating_point::{OperatingPoint, Side};

/// 정방향 계산 입력. 네 값 모두 사용자가 직접 정한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationInput {
    /// Tg1 [°C]
    pub hot_inlet_c: f64,
    /// Gg [m³/h]
    pub hot_flow_m3_per_h: f64,
    /// Tx1 [°C]
    pub cold_inlet_c: f64,
    /// Gx [m³/h]
    pub cold_flow_m3_per_h: f64,
}

impl From<&OperatingPoint> for SimulationInput {
    fn from(p: &OperatingPoint) -> Self {
        Self {
            hot_inlet_c: p.hot_inlet_c,
            hot_flow_m3_per_h: p.hot_flow_m3_per_h,
            cold_inlet_c: p.cold_inlet_c,
            cold_flow_m3_per_h: p.cold_flow_m3_per_h,
        }
    }
}

/// 정방향 계산 결과. 모든 값은 반올림된 상태다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Tg2 [°C]
    pub hot_outlet_c: f64,
    /// Tx2 [°C]
    pub cold_outlet_c: f64,
    /// Q [kW]
    pub duty_kw: f64,
    /// Δtg = Tg1 − Tg2 [°C]
    pub hot_delta_c: f64,
    /// Δtx = Tx2 − Tx1 [°C]
    pub cold_delta_c: f64,
    /// 열원 상한 대비 실제 열량 비율
    pub reserve: f64,
}

/// 바닥값을 적용한 유량.
fn floored_flow(flow_m3_per_h: f64) -> f64 {
    if flow_m3_per_h < FLOW_FLOOR_M3_PER_H {
        debug!(flow_m3_per_h, floor = FLOW_FLOOR_M3_PER_H, "flow below floor");
        FLOW_FLOOR_M3_PER_H
    } else {
        flow_m3_per_h
    }
}

/// 열량을 결정하는 유효 열용량률 min(C_g, FK/2) [W/°C].
///
/// 열량 = 이 값 × max(0, Tg1 − Tx1) 이므로 역산에서도 같은 식을 쓴다.
pub(crate) fn driving_capacity_w_per_c(hot_flow_m3_per_h: f64) -> f64 {
    capacity_rate_w_per_c(floored_flow(hot_flow_m3_per_h)).min(NOMINAL_CAPACITY_W_PER_C / 2.0)
}

/// 바닥값을 적용한 한쪽 유로의 열용량률 [W/°C].
pub(crate) fn side_capacity_w_per_c(flow_m3_per_h: f64) -> f64 {
    capacity_rate_w_per_c(floored_flow(flow_m3_per_h))
}

/// 정방향 계산을 수행한다.
pub fn simulate(input: &SimulationInput) -> SimulationResult {
    let c_hot = side_capacity_w_per_c(input.hot_flow_m3_per_h);
    let c_cold = side_capacity_w_per_c(input.cold_flow_m3_per_h);
    let dt = (input.hot_inlet_c - input.cold_inlet_c).max(0.0);

    let source_limit_w = (c_hot * dt).max(0.0);
    let transfer_limit_w = (NOMINAL_CAPACITY_W_PER_C * dt / 2.0).max(0.0);
    let duty_w = source_limit_w.min(transfer_limit_w);

    let hot_outlet_c = round_temp(input.hot_inlet_c - duty_w / c_hot);
    let cold_outlet_c = round_temp(input.cold_inlet_c + duty_w / c_cold);
    let reserve = if source_limit_w > 0.0 {
        duty_w / source_limit_w
    } else {
        debug!(
            hot_inlet_c = input.hot_inlet_c,
            cold_inlet_c = input.cold_inlet_c,
            "no driving temperature difference, duty is zero"
        );
        0.0
    };

    let result = SimulationResult {
        hot_outlet_c,
        cold_outlet_c,
        duty_kw: round_power(duty_w / 1000.0),
        hot_delta_c: round_temp(input.hot_inlet_c - hot_outlet_c),
        cold_delta_c: round_temp(cold_outlet_c - input.cold_inlet_c),
        reserve: round_power(reserve),
    };
    trace!(?input, ?result, "simulated");
    result
}

/// 운전점의 네 자유 입력으로 계산한다.
pub fn simulate_point(point: &OperatingPoint) -> SimulationResult {
    simulate(&SimulationInput::from(point))
}

/// 한쪽 유로의 열수지로 구한 열량 [W]. 역방향 온도차는 0으로 본다.
///
/// 고온 측은 Gg·ρ·c·(Tg1 − Tg2), 저온 측은 Gx·ρ·c·(Tx2 − Tx1).
pub fn side_duty_w(side: Side, inlet_c: f64, outlet_c: f64, flow_m3_per_h: f64) -> f64 {
    capacity_rate_w_per_c(flow_m3_per_h.max(0.0)) * (side.sign() * (inlet_c - outlet_c)).max(0.0)
}

/// 운전점에서 한쪽 유로의 열수지 열량 [W].
pub fn point_side_duty_w(point: &OperatingPoint, side: Side) -> f64 {
    let (inlet, outlet, flow) = point.side(side);
    side_duty_w(side, inlet, outlet, flow)
}
