use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use plate_hx_toolbox::app::{self, AppError};
use plate_hx_toolbox::config::{self, Config, DEFAULT_CONFIG_PATH};
use plate_hx_toolbox::exchanger::{self, Inversion, OperatingPoint, SimulationInput, SweepParam};
use plate_hx_toolbox::selection::{self, SelectionOptions};
use plate_hx_toolbox::ui_cli;

#[derive(Parser, Debug)]
#[command(author, version, about = "대향류 판형 열교환기 열수지 계산 및 모델 선정")]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// 생략하면 대화형 메뉴를 실행한다.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 입구 온도와 유량으로 출구 온도와 열량을 계산한다.
    Simulate {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long)]
        json: bool,
    },
    /// 목표 열량 또는 출구 온도로 변수 하나를 역산한다 (예: gg-from-duty).
    Solve {
        inversion: Inversion,
        /// 목표값: 열량 [kW] 또는 출구 온도 [°C]
        #[arg(long)]
        target: f64,
        #[command(flatten)]
        point: PointArgs,
        #[arg(long)]
        json: bool,
    },
    /// 필요 면적을 구하고 카탈로그에서 모델을 선정한다.
    Select {
        /// 열량 [kW]
        #[arg(long)]
        duty: f64,
        #[arg(long)]
        hot_inlet: f64,
        #[arg(long)]
        hot_outlet: f64,
        #[arg(long)]
        cold_inlet: f64,
        #[arg(long)]
        cold_outlet: f64,
        /// 요구 압력 [bar]
        #[arg(long)]
        pressure: Option<f64>,
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// 입력 하나를 바꿔가며 Tx2와 Q를 계산한다.
    Sweep {
        /// tg1 | gg | tx1 | gx
        param: SweepParam,
        #[arg(long)]
        points: Option<usize>,
        #[command(flatten)]
        point: PointArgs,
        #[arg(long)]
        json: bool,
    },
    /// 카탈로그를 출력한다.
    Catalog {
        /// 주문 코드로 한 모델만 출력
        #[arg(long)]
        code: Option<String>,
        /// 시리즈로 거르기
        #[arg(long)]
        series: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// 대화형 메뉴를 실행한다.
    Interactive,
}

/// 운전점 입력. 생략한 값은 설정 파일의 기본 운전점을 쓴다.
#[derive(Args, Debug)]
struct PointArgs {
    /// Tg1 [°C]
    #[arg(long)]
    hot_inlet: Option<f64>,
    /// Tg2 [°C]
    #[arg(long)]
    hot_outlet: Option<f64>,
    /// Tx1 [°C]
    #[arg(long)]
    cold_inlet: Option<f64>,
    /// Tx2 [°C]
    #[arg(long)]
    cold_outlet: Option<f64>,
    /// Gg [m³/h]
    #[arg(long)]
    hot_flow: Option<f64>,
    /// Gx [m³/h]
    #[arg(long)]
    cold_flow: Option<f64>,
}

/// 정방향 계산 입력. 출구 온도는 계산 결과이므로 받지 않는다.
#[derive(Args, Debug)]
struct InputArgs {
    /// Tg1 [°C]
    #[arg(long)]
    hot_inlet: Option<f64>,
    /// Tx1 [°C]
    #[arg(long)]
    cold_inlet: Option<f64>,
    /// Gg [m³/h]
    #[arg(long)]
    hot_flow: Option<f64>,
    /// Gx [m³/h]
    #[arg(long)]
    cold_flow: Option<f64>,
}

impl InputArgs {
    fn resolve(&self, base: &OperatingPoint) -> SimulationInput {
        SimulationInput {
            hot_inlet_c: self.hot_inlet.unwrap_or(base.hot_inlet_c),
            cold_inlet_c: self.cold_inlet.unwrap_or(base.cold_inlet_c),
            hot_flow_m3_per_h: self.hot_flow.unwrap_or(base.hot_flow_m3_per_h),
            cold_flow_m3_per_h: self.cold_flow.unwrap_or(base.cold_flow_m3_per_h),
        }
    }
}

impl PointArgs {
    fn resolve(&self, base: OperatingPoint) -> OperatingPoint {
        OperatingPoint {
            hot_inlet_c: self.hot_inlet.unwrap_or(base.hot_inlet_c),
            hot_outlet_c: self.hot_outlet.unwrap_or(base.hot_outlet_c),
            cold_inlet_c: self.cold_inlet.unwrap_or(base.cold_inlet_c),
            cold_outlet_c: self.cold_outlet.unwrap_or(base.cold_outlet_c),
            hot_flow_m3_per_h: self.hot_flow.unwrap_or(base.hot_flow_m3_per_h),
            cold_flow_m3_per_h: self.cold_flow.unwrap_or(base.cold_flow_m3_per_h),
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    let cfg = config::load_or_default(&cli.config)?;
    match cli.command {
        None | Some(Command::Interactive) => app::run(&cfg),
        Some(Command::Simulate { input, json }) => handle_simulate(&cfg, &input, json),
        Some(Command::Solve {
            inversion,
            target,
            point,
            json,
        }) => handle_solve(&cfg, inversion, target, &point, json),
        Some(Command::Select {
            duty,
            hot_inlet,
            hot_outlet,
            cold_inlet,
            cold_outlet,
            pressure,
            limit,
            json,
        }) => {
            let options = SelectionOptions {
                pressure_bar: pressure.unwrap_or(cfg.selection.pressure_bar),
                limit: limit.unwrap_or(cfg.selection.limit),
            };
            let area = selection::required_area(duty, hot_inlet, hot_outlet, cold_inlet, cold_outlet);
            let picks = selection::select_models(
                duty,
                hot_inlet,
                hot_outlet,
                cold_inlet,
                cold_outlet,
                &options,
            );
            if json {
                let out = json!({ "duty_kw": duty, "required_area_m2": area, "models": picks });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                ui_cli::print_selection(duty, area, &picks);
            }
            Ok(())
        }
        Some(Command::Sweep {
            param,
            points,
            point,
            json,
        }) => {
            let p = point.resolve(cfg.defaults);
            let rows = exchanger::sweep(&p, param, points.unwrap_or(cfg.sweep_points));
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                ui_cli::print_sweep(param, &rows);
            }
            Ok(())
        }
        Some(Command::Catalog { code, series, json }) => handle_catalog(code, series, json),
    }
}

fn handle_simulate(cfg: &Config, input: &InputArgs, json: bool) -> Result<(), AppError> {
    let input = input.resolve(&cfg.defaults);
    let res = exchanger::simulate(&input);
    if json {
        let out = json!({ "input": input, "result": res });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        ui_cli::print_results(&res);
    }
    Ok(())
}

fn handle_solve(
    cfg: &Config,
    inversion: Inversion,
    target: f64,
    point: &PointArgs,
    json: bool,
) -> Result<(), AppError> {
    let p = point.resolve(cfg.defaults);
    let unknown = inversion.unknown();
    let value = inversion.solve(target, &p);
    if json {
        let out = json!({
            "inversion": inversion.name(),
            "unknown": unknown.symbol(),
            "target": target,
            "value": value,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{} = {} {}", unknown.symbol(), value, unknown.unit());
    }
    Ok(())
}

fn handle_catalog(code: Option<String>, series: Option<String>, json: bool) -> Result<(), AppError> {
    let models: Vec<&selection::CatalogModel> = match (code, series) {
        (Some(code), _) => {
            let m = selection::find_model(&code).ok_or(AppError::UnknownModel(code))?;
            vec![m]
        }
        (None, Some(series)) => selection::catalog::series_models(&series).collect(),
        (None, None) => selection::models().iter().collect(),
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&models)?);
    } else {
        ui_cli::print_catalog(models);
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulate_rejects_outlet_arguments() {
        assert!(Cli::try_parse_from(["plate_hx", "simulate", "--hot-outlet", "50"]).is_err());
        assert!(Cli::try_parse_from(["plate_hx", "simulate", "--cold-outlet", "30"]).is_err());
    }

    #[test]
    fn simulate_fills_missing_inputs_from_defaults() {
        let cli = Cli::try_parse_from(["plate_hx", "simulate", "--hot-inlet", "90"])
            .expect("parse");
        let Some(Command::Simulate { input, .. }) = cli.command else {
            panic!("expected simulate");
        };
        let base = OperatingPoint::default();
        let resolved = input.resolve(&base);
        assert_eq!(resolved.hot_inlet_c, 90.0);
        assert_eq!(resolved.cold_flow_m3_per_h, base.cold_flow_m3_per_h);
    }
}
