//! 필요 열량과 경계 온도로 카탈로그 모델을 선정하는 모듈.

pub mod catalog;
pub mod sizing;

pub use catalog::{find_model, models, CatalogModel};
pub use sizing::{
    lmtd, required_area, select_from, select_models, Selection, SelectionOptions,
    DEFAULT_LIMIT, DEFAULT_PRESSURE_BAR,
};
