//! Service layer: HTTP calls against one prediction backend instance.

mod predict;

pub use predict::{PredictService, DEFAULT_BASE_URL};
