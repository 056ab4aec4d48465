//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone)]
pub enum ModalMessage {
    /// 关闭弹窗
    Close,

    /// 设置弹窗：选择上一项
    SelectPrevious,

    /// 设置弹窗：选择下一项
    SelectNext,

    /// 设置弹窗：当前项切换到上一个值（左）
    TogglePrev,

    /// 设置弹窗：当前项切换到下一个值（右）
    ToggleNext,
}
