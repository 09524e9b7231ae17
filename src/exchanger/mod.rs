//! 대향류 판형 열교환기 열수지 계산 모듈 모음.
//! 정방향 계산, 역산, 고정 변수 상태, 특성 곡선으로 구성한다.

pub mod balance;
pub mod constants;
pub mod inverse;
pub mod operating_point;
pub mod pins;
pub mod sweep;

pub use balance::{simulate, simulate_point, side_duty_w, SimulationInput, SimulationResult};
pub use inverse::{Driver, Inversion, UnknownInversion};
pub use operating_point::{OperatingPoint, Side, SideVar, Variable};
pub use pins::{apply_edit, Pins, SidePins};
pub use sweep::{sweep, SweepParam, SweepPoint, DEFAULT_SWEEP_POINTS};
