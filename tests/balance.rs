//! 정방향 열수지 계산 회귀 테스트.
use plate_hx_toolbox::exchanger::{
    balance::point_side_duty_w, constants::capacity_rate_w_per_c, side_duty_w, simulate, Side,
    SimulationInput,
};

fn input(hot_inlet_c: f64, hot_flow: f64, cold_inlet_c: f64, cold_flow: f64) -> SimulationInput {
    SimulationInput {
        hot_inlet_c,
        hot_flow_m3_per_h: hot_flow,
        cold_inlet_c,
        cold_flow_m3_per_h: cold_flow,
    }
}

#[test]
fn nominal_point_is_limited_by_transfer_capacity() {
    // Tg1=70, Gg=5, Tx1=20, Gx=8
    let res = simulate(&input(70.0, 5.0, 20.0, 8.0));
    let source_w = 5.0 * 1000.0 / 3600.0 * 4.19 * 1000.0 * (70.0 - 20.0);
    let transfer_w = 1000.0 * (70.0 - 20.0) / 2.0;
    assert!(transfer_w < source_w);
    assert_eq!(res.duty_kw, 25.0);
    assert_eq!(res.hot_outlet_c, 65.7);
    assert_eq!(res.cold_outlet_c, 22.7);
    assert_eq!(res.hot_delta_c, 4.3);
    assert_eq!(res.cold_delta_c, 2.7);
    assert_eq!(res.reserve, 0.09);
}

#[test]
fn small_hot_flow_is_limited_by_source() {
    let res = simulate(&input(70.0, 0.2, 20.0, 8.0));
    // C_g = 0.2/3.6*4190 = 232.78 W/°C < FK/2, 열원 상한이 걸린다
    assert_eq!(res.duty_kw, 11.64);
    assert_eq!(res.hot_outlet_c, 20.0);
    assert_eq!(res.reserve, 1.0);
}

#[test]
fn energy_balance_holds_on_both_sides() {
    let cases = [
        (70.0, 5.0, 20.0, 8.0),
        (90.0, 1.2, 10.0, 3.0),
        (150.0, 0.3, 60.0, 20.0),
        (55.0, 12.0, 40.0, 0.7),
        (120.0, 0.45, 5.0, 1.5),
    ];
    for (tg1, gg, tx1, gx) in cases {
        let res = simulate(&input(tg1, gg, tx1, gx));
        let c_hot = capacity_rate_w_per_c(gg);
        let c_cold = capacity_rate_w_per_c(gx);
        // 출구 온도 반올림(±0.05 °C)과 열량 반올림(±0.005 kW)만큼 허용
        let hot_kw = c_hot * (tg1 - res.hot_outlet_c) / 1000.0;
        let cold_kw = c_cold * (res.cold_outlet_c - tx1) / 1000.0;
        let tol_hot = c_hot * 0.051 / 1000.0 + 0.006;
        let tol_cold = c_cold * 0.051 / 1000.0 + 0.006;
        assert!(
            (res.duty_kw - hot_kw).abs() <= tol_hot,
            "hot side {tg1} {gg} {tx1} {gx}: Q={} balance={hot_kw}",
            res.duty_kw
        );
        assert!(
            (res.duty_kw - cold_kw).abs() <= tol_cold,
            "cold side {tg1} {gg} {tx1} {gx}: Q={} balance={cold_kw}",
            res.duty_kw
        );
    }
}

#[test]
fn raising_hot_inlet_never_lowers_duty_or_cold_outlet() {
    for gg in [0.2, 1.0, 5.0] {
        let mut prev = simulate(&input(0.0, gg, 20.0, 8.0));
        for t in 1..=150 {
            let res = simulate(&input(t as f64, gg, 20.0, 8.0));
            assert!(res.duty_kw >= prev.duty_kw, "Q dropped at Tg1={t}, Gg={gg}");
            assert!(
                res.cold_outlet_c >= prev.cold_outlet_c,
                "Tx2 dropped at Tg1={t}, Gg={gg}"
            );
            prev = res;
        }
    }
}

#[test]
fn no_driving_difference_gives_zero_duty() {
    for (tg1, tx1) in [(20.0, 30.0), (40.0, 40.0)] {
        let res = simulate(&input(tg1, 5.0, tx1, 8.0));
        assert_eq!(res.duty_kw, 0.0);
        assert_eq!(res.hot_outlet_c, tg1);
        assert_eq!(res.cold_outlet_c, tx1);
        assert_eq!(res.hot_delta_c, 0.0);
        assert_eq!(res.cold_delta_c, 0.0);
        assert_eq!(res.reserve, 0.0);
    }
}

#[test]
fn zero_and_negative_flows_are_floored() {
    let res = simulate(&input(70.0, 0.0, 20.0, -3.0));
    for v in [
        res.duty_kw,
        res.hot_outlet_c,
        res.cold_outlet_c,
        res.hot_delta_c,
        res.cold_delta_c,
        res.reserve,
    ] {
        assert!(v.is_finite());
    }
    // 0.01 m³/h 바닥값에서는 열원 상한이 걸려 Tg2가 Tx1까지 내려간다
    assert_eq!(res.hot_outlet_c, 20.0);
    assert_eq!(res.reserve, 1.0);
    assert_eq!(res.duty_kw, 0.58);
}

#[test]
fn repeated_calls_are_identical() {
    let i = input(83.4, 2.7, 31.2, 6.1);
    assert_eq!(simulate(&i), simulate(&i));
}

#[test]
fn side_duty_follows_flow_direction() {
    let hot = side_duty_w(Side::Hot, 70.0, 50.0, 5.0);
    assert!((hot - 5.0 / 3.6 * 4190.0 * 20.0).abs() < 1e-6, "hot={hot}");
    let cold = side_duty_w(Side::Cold, 20.0, 40.0, 8.0);
    assert!((cold - 8.0 / 3.6 * 4190.0 * 20.0).abs() < 1e-6, "cold={cold}");
    assert_eq!(side_duty_w(Side::Cold, 40.0, 20.0, 8.0), 0.0);
    assert_eq!(side_duty_w(Side::Hot, 70.0, 50.0, -1.0), 0.0);

    let p = plate_hx_toolbox::exchanger::OperatingPoint::default();
    assert_eq!(point_side_duty_w(&p, Side::Hot), side_duty_w(Side::Hot, 70.0, 20.0, 5.0));
}
