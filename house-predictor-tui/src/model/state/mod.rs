//! 页面状态模块
//!
//! 定义预测表单、设置和弹窗的状态数据结构

mod modal;
mod predictor;
mod settings;

pub use modal::{Modal, ModalState};
pub use predictor::{
    PredictorState, AREA_FOCUS, BATHROOMS_FOCUS, BEDROOMS_FOCUS, CITY_FOCUS, FLOOR_FOCUS,
    FOCUS_POSITIONS, FURNISHING_FOCUS, SUBMIT_FOCUS,
};
pub use settings::{SettingItem, SettingsState, Theme};
