//! Typed client for the Indian house price prediction service
//!
//! 提供预测服务的类型化访问：特征表单模型、POST /predict 调用、错误分类。
//! 所有类型无 UI 依赖，可被终端界面或其他前端复用。

mod error;
mod services;
mod types;

pub use error::{PredictorError, PredictorResult};
pub use services::{PredictService, DEFAULT_BASE_URL};
pub use types::{City, FeatureForm, Furnishing, PredictRequest, Prediction, ServiceInfo};
