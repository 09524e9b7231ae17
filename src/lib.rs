//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 외의 화면/보고서 계층에서도 그대로 쓴다.
//!
//! 계산 함수는 모두 순수 함수이며 입력 범위 전체에서 실패하지 않는다.

pub mod app;
pub mod config;
pub mod exchanger;
pub mod selection;
pub mod ui_cli;
