//! 특성 곡선 테스트.
use plate_hx_toolbox::exchanger::{
    simulate_point, sweep, OperatingPoint, SweepParam, DEFAULT_SWEEP_POINTS,
};

#[test]
fn hot_inlet_sweep_covers_range() {
    let p = OperatingPoint::default();
    let rows = sweep(&p, SweepParam::HotInlet, DEFAULT_SWEEP_POINTS);
    assert_eq!(rows.len(), 25);
    assert_eq!(rows[0].x, 50.0);
    assert_eq!(rows[24].x, 150.0);
    for w in rows.windows(2) {
        assert!(w[1].duty_kw >= w[0].duty_kw);
        assert!(w[1].cold_outlet_c >= w[0].cold_outlet_c);
    }
}

#[test]
fn sweep_points_match_forward_model() {
    let p = OperatingPoint::default();
    for row in sweep(&p, SweepParam::ColdFlow, 7) {
        let res = simulate_point(&OperatingPoint {
            cold_flow_m3_per_h: row.x,
            ..p
        });
        assert_eq!(row.duty_kw, res.duty_kw, "x={}", row.x);
        assert_eq!(row.cold_outlet_c, res.cold_outlet_c, "x={}", row.x);
    }
}

#[test]
fn x_values_are_rounded() {
    let rows = sweep(&OperatingPoint::default(), SweepParam::HotFlow, 25);
    // 0.5 + 19.5/24 = 1.3125
    assert_eq!(rows[1].x, 1.31);
    assert_eq!(rows[24].x, 20.0);
}

#[test]
fn fewer_than_two_points_yields_range_minimum() {
    let p = OperatingPoint::default();
    for n in [0, 1] {
        let rows = sweep(&p, SweepParam::ColdInlet, n);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].x, 20.0);
    }
}

#[test]
fn params_parse_from_symbols() {
    assert_eq!("gg".parse::<SweepParam>().unwrap(), SweepParam::HotFlow);
    assert_eq!("Tx1".parse::<SweepParam>().unwrap(), SweepParam::ColdInlet);
    assert_eq!("cold-flow".parse::<SweepParam>().unwrap(), SweepParam::ColdFlow);
    assert!("tg2".parse::<SweepParam>().is_err());
    assert_eq!(SweepParam::HotInlet.to_string(), "Tg1");
}
