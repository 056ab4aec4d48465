//! 应用主消息枚举

use house_predictor_client::{Prediction, PredictorResult, ServiceInfo};

use super::{FormMessage, ModalMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 预测表单相关消息
    Form(FormMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 一次预测请求有了结果（成功、业务错误或传输失败）
    SubmissionResolved(PredictorResult<Option<Prediction>>),

    /// 检查后端连通性
    CheckBackend,

    /// 后端连通性检查有了结果
    BackendChecked(PredictorResult<ServiceInfo>),

    /// 显示帮助
    ShowHelp,

    /// 显示设置
    ShowSettings,

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
