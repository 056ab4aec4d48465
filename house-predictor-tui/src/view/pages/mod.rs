//! 页面视图集合

pub mod predictor;
