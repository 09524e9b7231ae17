//! 입력 하나를 범위 안에서 바꿔가며 Tx2와 Q의 변화를 구한다 (특성 곡선).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::balance::simulate_point;
use super::constants::round_power;
use super::operating_point::{OperatingPoint, Variable};

/// 기본 점 수
pub const DEFAULT_SWEEP_POINTS: usize = 25;

/// 가로축으로 쓸 수 있는 입력.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SweepParam {
    HotInlet,
    HotFlow,
    ColdInlet,
    ColdFlow,
}

impl SweepParam {
    /// 변화 범위 (최소, 최대).
    pub fn range(self) -> (f64, f64) {
        match self {
            SweepParam::HotInlet => (50.0, 150.0),
            SweepParam::HotFlow => (0.5, 20.0),
            SweepParam::ColdInlet => (20.0, 60.0),
            SweepParam::ColdFlow => (0.5, 20.0),
        }
    }

    pub fn variable(self) -> Variable {
        match self {
            SweepParam::HotInlet => Variable::HOT_INLET,
            SweepParam::HotFlow => Variable::HOT_FLOW,
            SweepParam::ColdInlet => Variable::COLD_INLET,
            SweepParam::ColdFlow => Variable::COLD_FLOW,
        }
    }
}

impl fmt::Display for SweepParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.variable().symbol())
    }
}

impl FromStr for SweepParam {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tg1" | "hot-inlet" => Ok(SweepParam::HotInlet),
            "gg" | "hot-flow" => Ok(SweepParam::HotFlow),
            "tx1" | "cold-inlet" => Ok(SweepParam::ColdInlet),
            "gx" | "cold-flow" => Ok(SweepParam::ColdFlow),
            other => Err(format!("지원하지 않는 변수: {other}")),
        }
    }
}

/// 곡선의 한 점.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub x: f64,
    /// Tx2 [°C]
    pub cold_outlet_c: f64,
    /// Q [kW]
    pub duty_kw: f64,
}

/// `param`을 범위 안에서 `points`개 등간격으로 바꿔 계산한다.
/// `points`가 2 미만이면 최소값 한 점만 돌려준다.
pub fn sweep(point: &OperatingPoint, param: SweepParam, points: usize) -> Vec<SweepPoint> {
    let (min, max) = param.range();
    let n = points.max(1);
    let step = if n > 1 {
        (max - min) / (n - 1) as f64
    } else {
        0.0
    };
    (0..n)
        .map(|i| {
            let x = min + i as f64 * step;
            let res = simulate_point(&point.with(param.variable(), x));
            SweepPoint {
                x: round_power(x),
                cold_outlet_c: res.cold_outlet_c,
                duty_kw: res.duty_kw,
            }
        })
        .collect()
}
