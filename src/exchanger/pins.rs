//! 고정(핀) 변수 상태와 입력 변경 전파.
//!
//! 한쪽 유로에서 최대 두 변수만 고정할 수 있다. 세 번째를 고정하면 가장 먼저
//! 고정한 변수가 풀려서 역산에 쓸 자유 변수가 항상 하나 이상 남는다.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::balance::point_side_duty_w;
use super::inverse::Inversion;
use super::operating_point::{OperatingPoint, Side, SideVar, Variable};

/// 한쪽 유로의 고정 상태. 고정한 순서대로 보관한다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidePins {
    slots: [Option<SideVar>; 2],
}

impl SidePins {
    pub fn is_pinned(&self, var: SideVar) -> bool {
        self.slots.contains(&Some(var))
    }

    /// 고정된 변수 수 (0~2).
    pub fn count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// 고정된 변수를 고정한 순서대로 돌려준다.
    pub fn pinned(&self) -> impl Iterator<Item = SideVar> + '_ {
        self.slots.iter().flatten().copied()
    }

    /// 고정 여부를 뒤집는다. 이미 둘이 고정돼 있으면 가장 오래된 것을 푼다.
    pub fn toggle(&mut self, var: SideVar) {
        if self.is_pinned(var) {
            let rest = self.pinned().find(|v| *v != var);
            self.slots = [rest, None];
            return;
        }
        match self.slots {
            [None, _] => self.slots = [Some(var), None],
            [Some(first), None] => self.slots = [Some(first), Some(var)],
            [Some(oldest), Some(newer)] => {
                debug!(?oldest, ?var, "third pin on side, releasing oldest");
                self.slots = [Some(newer), Some(var)];
            }
        }
    }

    /// 역산에 쓸 자유 변수. 입구, 출구, 유량 순으로 고정되지 않은 첫 변수.
    pub fn free(&self) -> SideVar {
        SideVar::ALL
            .into_iter()
            .find(|v| !self.is_pinned(*v))
            .unwrap_or(SideVar::Inlet)
    }
}

/// 양쪽 유로의 고정 상태.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pins {
    pub hot: SidePins,
    pub cold: SidePins,
}

impl Pins {
    pub fn side(&self, side: Side) -> &SidePins {
        match side {
            Side::Hot => &self.hot,
            Side::Cold => &self.cold,
        }
    }

    pub fn side_mut(&mut self, side: Side) -> &mut SidePins {
        match side {
            Side::Hot => &mut self.hot,
            Side::Cold => &mut self.cold,
        }
    }

    pub fn toggle(&mut self, v: Variable) {
        self.side_mut(v.side).toggle(v.var);
    }

    pub fn is_pinned(&self, v: Variable) -> bool {
        self.side(v.side).is_pinned(v.var)
    }

    /// 지정한 쪽의 자유 변수.
    pub fn free(&self, side: Side) -> Variable {
        Variable::new(side, self.side(side).free())
    }
}

/// 변수 하나를 바꾸고 반대편 자유 변수를 다시 계산한다.
///
/// 바꾼 쪽의 열수지로 열량을 구한 뒤, 반대편에서 고정되지 않은 첫 변수를
/// 같은 열량을 만족하도록 역산한다.
pub fn apply_edit(
    point: &OperatingPoint,
    pins: &Pins,
    edited: Variable,
    value: f64,
) -> OperatingPoint {
    let next = point.with(edited, value);
    let duty_kw = point_side_duty_w(&next, edited.side) / 1000.0;
    let free = pins.free(edited.side.other());
    let solved = Inversion::from_duty(free).apply(duty_kw, &next);
    debug!(
        edited = edited.symbol(),
        value,
        duty_kw,
        recomputed = free.symbol(),
        new_value = solved.get(free),
        "propagated edit"
    );
    solved
}
