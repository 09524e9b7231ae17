use serde::{Deserialize, Serialize};

/// 열교환기의 한쪽 유로.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// 가열(고온) 측
    Hot,
    /// 피가열(저온) 측
    Cold,
}

impl Side {
    /// 반대편 유로.
    pub fn other(self) -> Self {
        match self {
            Side::Hot => Side::Cold,
            Side::Cold => Side::Hot,
        }
    }

    /// 열량 부호. 고온 측은 입구−출구, 저온 측은 출구−입구가 양의 열량이다.
    pub(crate) fn sign(self) -> f64 {
        match self {
            Side::Hot => 1.0,
            Side::Cold => -1.0,
        }
    }
}

/// 한 유로 안에서의 변수 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SideVar {
    Inlet,
    Outlet,
    Flow,
}

impl SideVar {
    /// 자유 변수 탐색 순서.
    pub const ALL: [SideVar; 3] = [SideVar::Inlet, SideVar::Outlet, SideVar::Flow];
}

/// 운전점의 여섯 변수 중 하나.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variable {
    pub side: Side,
    pub var: SideVar,
}

impl Variable {
    pub const HOT_INLET: Variable = Variable::new(Side::Hot, SideVar::Inlet);
    pub const HOT_OUTLET: Variable = Variable::new(Side::Hot, SideVar::Outlet);
    pub const HOT_FLOW: Variable = Variable::new(Side::Hot, SideVar::Flow);
    pub const COLD_INLET: Variable = Variable::new(Side::Cold, SideVar::Inlet);
    pub const COLD_OUTLET: Variable = Variable::new(Side::Cold, SideVar::Outlet);
    pub const COLD_FLOW: Variable = Variable::new(Side::Cold, SideVar::Flow);

    pub const fn new(side: Side, var: SideVar) -> Self {
        Self { side, var }
    }

    /// 표기용 기호 (Tg1, Tg2, Gg, Tx1, Tx2, Gx).
    pub fn symbol(self) -> &'static str {
        match (self.side, self.var) {
            (Side::Hot, SideVar::Inlet) => "Tg1",
            (Side::Hot, SideVar::Outlet) => "Tg2",
            (Side::Hot, SideVar::Flow) => "Gg",
            (Side::Cold, SideVar::Inlet) => "Tx1",
            (Side::Cold, SideVar::Outlet) => "Tx2",
            (Side::Cold, SideVar::Flow) => "Gx",
        }
    }

    /// 기호 문자열을 변수로 해석한다. 대소문자는 구분하지 않는다.
    pub fn from_symbol(s: &str) -> Option<Self> {
        let v = match s.to_ascii_lowercase().as_str() {
            "tg1" => Variable::HOT_INLET,
            "tg2" => Variable::HOT_OUTLET,
            "gg" => Variable::HOT_FLOW,
            "tx1" => Variable::COLD_INLET,
            "tx2" => Variable::COLD_OUTLET,
            "gx" => Variable::COLD_FLOW,
            _ => return None,
        };
        Some(v)
    }

    /// 단위 문자열.
    pub fn unit(self) -> &'static str {
        match self.var {
            SideVar::Flow => "m³/h",
            SideVar::Inlet | SideVar::Outlet => "°C",
        }
    }
}

/// 운전점: 온도는 °C, 유량은 m³/h.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperatingPoint {
    /// Tg1 가열측 입구 온도
    pub hot_inlet_c: f64,
    /// Tg2 가열측 출구 온도
    pub hot_outlet_c: f64,
    /// Tx1 피가열측 입구 온도
    pub cold_inlet_c: f64,
    /// Tx2 피가열측 출구 온도
    pub cold_outlet_c: f64,
    /// Gg 가열측 유량
    pub hot_flow_m3_per_h: f64,
    /// Gx 피가열측 유량
    pub cold_flow_m3_per_h: f64,
}

impl Default for OperatingPoint {
    fn default() -> Self {
        Self {
            hot_inlet_c: 70.0,
            hot_outlet_c: 20.0,
            cold_inlet_c: 20.0,
            cold_outlet_c: 40.0,
            hot_flow_m3_per_h: 5.0,
            cold_flow_m3_per_h: 8.0,
        }
    }
}

impl OperatingPoint {
    pub fn get(&self, v: Variable) -> f64 {
        match (v.side, v.var) {
            (Side::Hot, SideVar::Inlet) => self.hot_inlet_c,
            (Side::Hot, SideVar::Outlet) => self.hot_outlet_c,
            (Side::Hot, SideVar::Flow) => self.hot_flow_m3_per_h,
            (Side::Cold, SideVar::Inlet) => self.cold_inlet_c,
            (Side::Cold, SideVar::Outlet) => self.cold_outlet_c,
            (Side::Cold, SideVar::Flow) => self.cold_flow_m3_per_h,
        }
    }

    pub fn set(&mut self, v: Variable, value: f64) {
        let slot = match (v.side, v.var) {
            (Side::Hot, SideVar::Inlet) => &mut self.hot_inlet_c,
            (Side::Hot, SideVar::Outlet) => &mut self.hot_outlet_c,
            (Side::Hot, SideVar::Flow) => &mut self.hot_flow_m3_per_h,
            (Side::Cold, SideVar::Inlet) => &mut self.cold_inlet_c,
            (Side::Cold, SideVar::Outlet) => &mut self.cold_outlet_c,
            (Side::Cold, SideVar::Flow) => &mut self.cold_flow_m3_per_h,
        };
        *slot = value;
    }

    /// 값을 바꾼 사본을 돌려준다.
    pub fn with(mut self, v: Variable, value: f64) -> Self {
        self.set(v, value);
        self
    }

    /// 지정한 유로의 (입구, 출구, 유량).
    pub fn side(&self, side: Side) -> (f64, f64, f64) {
        (
            self.get(Variable::new(side, SideVar::Inlet)),
            self.get(Variable::new(side, SideVar::Outlet)),
            self.get(Variable::new(side, SideVar::Flow)),
        )
    }
}
