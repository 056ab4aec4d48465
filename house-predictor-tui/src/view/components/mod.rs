//! 可复用视图组件

pub mod modal;
pub mod statusbar;
