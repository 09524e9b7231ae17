//! 고정 변수 상태와 입력 변경 전파 테스트.
use plate_hx_toolbox::exchanger::{
    apply_edit, OperatingPoint, Pins, Side, SidePins, SideVar, Variable,
};

#[test]
fn third_pin_releases_oldest() {
    let mut pins = SidePins::default();
    pins.toggle(SideVar::Flow);
    pins.toggle(SideVar::Inlet);
    assert_eq!(pins.count(), 2);
    pins.toggle(SideVar::Outlet);
    assert_eq!(pins.count(), 2);
    assert!(!pins.is_pinned(SideVar::Flow));
    assert_eq!(
        pins.pinned().collect::<Vec<_>>(),
        vec![SideVar::Inlet, SideVar::Outlet]
    );
    assert_eq!(pins.free(), SideVar::Flow);
}

#[test]
fn toggling_pinned_variable_releases_it() {
    let mut pins = SidePins::default();
    pins.toggle(SideVar::Inlet);
    pins.toggle(SideVar::Outlet);
    pins.toggle(SideVar::Inlet);
    assert_eq!(pins.pinned().collect::<Vec<_>>(), vec![SideVar::Outlet]);
    // 남은 것이 가장 오래된 것이 된다
    pins.toggle(SideVar::Flow);
    pins.toggle(SideVar::Inlet);
    assert_eq!(
        pins.pinned().collect::<Vec<_>>(),
        vec![SideVar::Flow, SideVar::Inlet]
    );
}

#[test]
fn free_variable_follows_inlet_outlet_flow_order() {
    let mut pins = SidePins::default();
    assert_eq!(pins.free(), SideVar::Inlet);
    pins.toggle(SideVar::Inlet);
    assert_eq!(pins.free(), SideVar::Outlet);
    pins.toggle(SideVar::Outlet);
    assert_eq!(pins.free(), SideVar::Flow);
}

#[test]
fn sides_are_independent() {
    let mut pins = Pins::default();
    pins.toggle(Variable::HOT_INLET);
    pins.toggle(Variable::HOT_OUTLET);
    pins.toggle(Variable::COLD_FLOW);
    assert_eq!(pins.free(Side::Hot), Variable::HOT_FLOW);
    assert_eq!(pins.free(Side::Cold), Variable::COLD_INLET);
    assert!(pins.is_pinned(Variable::COLD_FLOW));
    assert!(!pins.is_pinned(Variable::COLD_OUTLET));
}

#[test]
fn hot_edit_recomputes_cold_inlet_by_default() {
    // Tg2 20→58: Q = 5/3.6·4190·12 W, Tx1 = 40 − 7.5
    let p = OperatingPoint::default();
    let next = apply_edit(&p, &Pins::default(), Variable::HOT_OUTLET, 58.0);
    assert_eq!(next.hot_outlet_c, 58.0);
    assert_eq!(next.cold_inlet_c, 32.5);
    assert_eq!(next.cold_outlet_c, p.cold_outlet_c);
    assert_eq!(next.cold_flow_m3_per_h, p.cold_flow_m3_per_h);
    assert_eq!(next.hot_inlet_c, p.hot_inlet_c);
}

#[test]
fn pinned_cold_inlet_moves_cold_outlet() {
    let p = OperatingPoint::default();
    let mut pins = Pins::default();
    pins.toggle(Variable::COLD_INLET);
    let next = apply_edit(&p, &pins, Variable::HOT_OUTLET, 58.0);
    assert_eq!(next.cold_inlet_c, 20.0);
    assert_eq!(next.cold_outlet_c, 27.5);
}

#[test]
fn both_cold_temperatures_pinned_moves_cold_flow() {
    let p = OperatingPoint::default();
    let mut pins = Pins::default();
    pins.toggle(Variable::COLD_INLET);
    pins.toggle(Variable::COLD_OUTLET);
    let next = apply_edit(&p, &pins, Variable::HOT_OUTLET, 58.0);
    assert_eq!(next.cold_flow_m3_per_h, 3.0);
}

#[test]
fn cold_edit_recomputes_hot_side() {
    // Gx 8→10: Q = 10/3.6·4190·20 W, Tg1 = 20 + 40
    let p = OperatingPoint::default();
    let next = apply_edit(&p, &Pins::default(), Variable::COLD_FLOW, 10.0);
    assert_eq!(next.cold_flow_m3_per_h, 10.0);
    assert_eq!(next.hot_inlet_c, 60.0);
    assert_eq!(next.hot_outlet_c, p.hot_outlet_c);
}
