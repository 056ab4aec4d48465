//! 应用主状态结构

use crate::backend::{AppConfig, PredictWorker};

use super::{ModalState, PredictorState, SettingsState};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 预测表单状态
    pub predictor: PredictorState,

    /// 设置弹窗状态
    pub settings: SettingsState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 后台预测 worker（请求经由它进出）
    pub worker: PredictWorker,
}

impl App {
    /// 创建新的应用实例
    ///
    /// 必须在 tokio 运行时内调用：会启动后台 worker 任务。
    /// 本地配置由 main.rs 在创建后通过 [`App::apply_config`] 应用。
    pub fn new() -> Self {
        Self {
            should_quit: false,
            status_message: None,
            predictor: PredictorState::new(),
            settings: SettingsState::new(),
            modal: ModalState::new(),
            worker: PredictWorker::spawn(),
        }
    }

    /// 将一份配置应用到运行中的状态（主题 + 语言）
    pub fn apply_config(&mut self, config: &AppConfig) {
        self.settings.theme = config.theme;
        self.settings.language =
            crate::i18n::Language::from_code(&config.language).unwrap_or_default();
        crate::i18n::set_language(self.settings.language);
        crate::view::theme::set_theme_index(config.theme.index());
    }

    /// 当前设置的快照（用于持久化）
    pub fn config_snapshot(&self) -> AppConfig {
        AppConfig {
            theme: self.settings.theme,
            language: self.settings.language.code().to_string(),
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
