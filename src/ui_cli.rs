use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::exchanger::{
    self, apply_edit, Inversion, OperatingPoint, Pins, SimulationResult, SweepParam, SweepPoint,
    Variable,
};
use crate::selection::{self, CatalogModel, Selection};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Show,
    Edit,
    TogglePin,
    Solve,
    Select,
    Sweep,
    Exit,
}

/// 대화형 모드에서 유지하는 운전점과 고정 상태.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub point: OperatingPoint,
    pub pins: Pins,
}

impl Session {
    pub fn new(point: OperatingPoint) -> Self {
        Self {
            point,
            pins: Pins::default(),
        }
    }
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== Plate Heat Exchanger Toolbox ===");
    println!("1) 현재 운전점/결과 보기");
    println!("2) 변수 변경 (반대편 자유 변수 재계산)");
    println!("3) 변수 고정/해제");
    println!("4) 역산");
    println!("5) 모델 선정");
    println!("6) 특성 곡선");
    println!("0) 종료");
    loop {
        let sel = read_line("메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Show),
            "2" => return Ok(MenuChoice::Edit),
            "3" => return Ok(MenuChoice::TogglePin),
            "4" => return Ok(MenuChoice::Solve),
            "5" => return Ok(MenuChoice::Select),
            "6" => return Ok(MenuChoice::Sweep),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 운전점, 고정 상태, 정방향 결과를 출력한다.
pub fn handle_show(session: &Session) {
    print_point(&session.point, &session.pins);
    print_results(&exchanger::simulate_point(&session.point));
}

/// 변수 하나를 바꾸고 반대편 자유 변수를 다시 계산한다.
pub fn handle_edit(session: &mut Session) -> Result<(), AppError> {
    println!("\n-- 변수 변경 --");
    let var = read_variable()?;
    let value = read_f64(&format!("{} 값 [{}]: ", var.symbol(), var.unit()))?;
    let recomputed = session.pins.free(var.side.other());
    session.point = apply_edit(&session.point, &session.pins, var, value);
    println!(
        "{} → {} {}",
        recomputed.symbol(),
        session.point.get(recomputed),
        recomputed.unit()
    );
    print_point(&session.point, &session.pins);
    Ok(())
}

/// 변수 고정 상태를 뒤집는다.
pub fn handle_toggle_pin(session: &mut Session) -> Result<(), AppError> {
    println!("\n-- 변수 고정/해제 --");
    println!("한쪽 유로에서 최대 두 변수까지 고정됩니다. 세 번째를 고정하면 먼저 고정한 것이 풀립니다.");
    let var = read_variable()?;
    session.pins.toggle(var);
    print_point(&session.point, &session.pins);
    Ok(())
}

/// 역산 메뉴를 처리한다.
pub fn handle_solve(session: &mut Session) -> Result<(), AppError> {
    println!("\n-- 역산 --");
    for (i, inv) in Inversion::ALL.iter().enumerate() {
        println!("{:>2}) {}", i + 1, inv);
    }
    let inv = loop {
        let sel = read_line("번호 선택: ")?;
        match sel.trim().parse::<usize>() {
            Ok(n) if (1..=Inversion::ALL.len()).contains(&n) => break Inversion::ALL[n - 1],
            _ => println!("지원하지 않는 번호입니다."),
        }
    };
    let target = read_f64("목표값 (열량 kW 또는 출구 온도 °C): ")?;
    let unknown = inv.unknown();
    let value = inv.solve(target, &session.point);
    println!("{} = {} {}", unknown.symbol(), value, unknown.unit());
    let apply = read_line("운전점에 반영할까요? (y/N): ")?;
    if apply.trim().eq_ignore_ascii_case("y") {
        session.point.set(unknown, value);
    }
    Ok(())
}

/// 현재 운전점 결과로 모델을 선정한다.
pub fn handle_select(session: &Session, cfg: &Config) {
    let p = &session.point;
    let res = exchanger::simulate_point(p);
    let area = selection::required_area(
        res.duty_kw,
        p.hot_inlet_c,
        res.hot_outlet_c,
        p.cold_inlet_c,
        res.cold_outlet_c,
    );
    let picks = selection::select_models(
        res.duty_kw,
        p.hot_inlet_c,
        res.hot_outlet_c,
        p.cold_inlet_c,
        res.cold_outlet_c,
        &cfg.selection,
    );
    print_selection(res.duty_kw, area, &picks);
}

/// 특성 곡선 메뉴를 처리한다.
pub fn handle_sweep(session: &Session, cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 특성 곡선 --");
    println!("가로축: 1) Tg1  2) Gg  3) Tx1  4) Gx");
    let param = loop {
        let sel = read_line("선택: ")?;
        match sel.trim() {
            "1" => break SweepParam::HotInlet,
            "2" => break SweepParam::HotFlow,
            "3" => break SweepParam::ColdInlet,
            "4" => break SweepParam::ColdFlow,
            _ => println!("잘못된 선택입니다."),
        }
    };
    let rows = exchanger::sweep(&session.point, param, cfg.sweep_points);
    print_sweep(param, &rows);
    Ok(())
}

pub fn print_point(point: &OperatingPoint, pins: &Pins) {
    let mark = |v: Variable| if pins.is_pinned(v) { "*" } else { " " };
    println!(
        "가열측: Tg1={:>6.1}{} Tg2={:>6.1}{} Gg={:>6.2}{}",
        point.hot_inlet_c,
        mark(Variable::HOT_INLET),
        point.hot_outlet_c,
        mark(Variable::HOT_OUTLET),
        point.hot_flow_m3_per_h,
        mark(Variable::HOT_FLOW),
    );
    println!(
        "피가열측: Tx1={:>6.1}{} Tx2={:>6.1}{} Gx={:>6.2}{}",
        point.cold_inlet_c,
        mark(Variable::COLD_INLET),
        point.cold_outlet_c,
        mark(Variable::COLD_OUTLET),
        point.cold_flow_m3_per_h,
        mark(Variable::COLD_FLOW),
    );
    println!("(* = 고정)");
}

pub fn print_results(res: &SimulationResult) {
    println!("Tg2 가열측 출구 온도: {:.1} °C", res.hot_outlet_c);
    println!("Tx2 피가열측 출구 온도: {:.1} °C", res.cold_outlet_c);
    println!("Q 열량: {:.2} kW", res.duty_kw);
    println!("Δtg 가열측 온도차: {:.1} °C", res.hot_delta_c);
    println!("Δtx 피가열측 온도차: {:.1} °C", res.cold_delta_c);
    println!("여유(최대 열량 대비): {:.2}", res.reserve);
}

pub fn print_selection(duty_kw: f64, required_area_m2: f64, picks: &[Selection<'_>]) {
    println!("Q = {duty_kw:.2} kW, 필요 면적 = {required_area_m2:.3} m²");
    if picks.is_empty() {
        println!("현재 조건에 맞는 모델이 없습니다.");
        return;
    }
    println!(
        "{:<11} {:<7} {:>5} {:>9} {:>8} {:<5} {:>8}",
        "코드", "시리즈", "판 수", "면적 m²", "질량 kg", "접속", "여유 %"
    );
    for s in picks {
        println!(
            "{:<11} {:<7} {:>5} {:>9.2} {:>8.1} {:<5} {:>8.1}",
            s.model.code,
            s.model.series,
            s.model.plates,
            s.model.area_m2,
            s.model.mass_kg,
            s.model.connection,
            s.reserve_pct
        );
    }
}

pub fn print_sweep(param: SweepParam, rows: &[SweepPoint]) {
    let var = param.variable();
    println!("{:>10} {:>10} {:>10}", format!("{} {}", var.symbol(), var.unit()), "Tx2 °C", "Q kW");
    for r in rows {
        println!("{:>10.2} {:>10.1} {:>10.2}", r.x, r.cold_outlet_c, r.duty_kw);
    }
}

pub fn print_catalog<'a>(models: impl IntoIterator<Item = &'a CatalogModel>) {
    println!(
        "{:<11} {:<7} {:>5} {:>9} {:>8} {:<5} {:>6} {:>6}",
        "코드", "시리즈", "판 수", "면적 m²", "질량 kg", "접속", "PN", "Tmax"
    );
    for m in models {
        println!(
            "{:<11} {:<7} {:>5} {:>9.2} {:>8.2} {:<5} {:>6.0} {:>6.0}",
            m.code, m.series, m.plates, m.area_m2, m.mass_kg, m.connection, m.pressure_bar, m.max_temp_c
        );
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "입력이 종료되었습니다.").into());
    }
    Ok(buf)
}

fn read_f64(prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("숫자를 입력하세요."),
        }
    }
}

fn read_variable() -> Result<Variable, AppError> {
    loop {
        let s = read_line("변수 (Tg1, Tg2, Gg, Tx1, Tx2, Gx): ")?;
        match Variable::from_symbol(s.trim()) {
            Some(v) => return Ok(v),
            None => println!("알 수 없는 변수입니다."),
        }
    }
}
