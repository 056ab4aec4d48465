//! 弹窗状态定义

/// 弹窗类型
///
/// 两个弹窗都不携带自己的数据：
/// 帮助弹窗是纯静态内容，设置弹窗直接读写 `App::settings`。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// 帮助弹窗
    Help,
    /// 设置弹窗
    Settings,
}

/// 弹窗管理状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前激活的弹窗（None 表示没有弹窗）
    pub active: Option<Modal>,
}

impl ModalState {
    /// 创建新的弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 显示指定弹窗
    pub fn show(&mut self, modal: Modal) {
        self.active = Some(modal);
    }

    /// 关闭当前弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有弹窗打开
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.show(Modal::Help);
    }

    /// 显示设置弹窗
    pub fn show_settings(&mut self) {
        self.show(Modal::Settings);
    }
}
