//! 统一错误类型定义

use serde::Serialize;
use thiserror::Error;

/// 预测客户端错误类型
///
/// 区分三类提交失败：HTTP 状态失败、后端业务失败（响应体携带 `error` 字段）、
/// 传输失败（请求未完成）。`Parse` 覆盖 2xx 但响应体不是合法 JSON 的情况。
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum PredictorError {
    /// HTTP 非 2xx 状态
    #[error("Server returned status {0}")]
    ServerStatus(u16),

    /// 后端返回的业务错误（`error` 字段原文）
    #[error("{0}")]
    Api(String),

    /// 网络/传输错误
    #[error("Network error: {0}")]
    Network(String),

    /// 响应体解析错误
    #[error("Parse error: {0}")]
    Parse(String),
}

/// 预测客户端 Result 类型别名
pub type PredictorResult<T> = std::result::Result<T, PredictorError>;
