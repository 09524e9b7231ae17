use crate::config::{Config, ConfigError};
use crate::ui_cli::{self, MenuChoice, Session};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 파일/콘솔 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// JSON 출력 오류
    #[error("JSON 출력 오류: {0}")]
    Json(#[from] serde_json::Error),
    /// 카탈로그에 없는 모델 코드
    #[error("카탈로그에 없는 모델: {0}")]
    UnknownModel(String),
}

/// 대화형 메뉴 루프를 실행한다.
pub fn run(config: &Config) -> Result<(), AppError> {
    let mut session = Session::new(config.defaults);
    ui_cli::handle_show(&session);
    loop {
        match ui_cli::main_menu()? {
            MenuChoice::Show => ui_cli::handle_show(&session),
            MenuChoice::Edit => ui_cli::handle_edit(&mut session)?,
            MenuChoice::TogglePin => ui_cli::handle_toggle_pin(&mut session)?,
            MenuChoice::Solve => ui_cli::handle_solve(&mut session)?,
            MenuChoice::Select => ui_cli::handle_select(&session, config),
            MenuChoice::Sweep => ui_cli::handle_sweep(&session, config)?,
            MenuChoice::Exit => {
                println!("종료합니다.");
                break;
            }
        }
    }
    Ok(())
}
