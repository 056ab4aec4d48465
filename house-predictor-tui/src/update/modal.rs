//! 弹窗消息处理

use crate::backend::{ConfigService, LocalConfigService};
use crate::message::ModalMessage;
use crate::model::state::SettingItem;
use crate::model::{App, Modal};

/// 根据当前弹窗类型分发弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    match app.modal.active {
        Some(Modal::Help) => handle_help(app, msg),
        Some(Modal::Settings) => handle_settings(app, msg),
        None => {}
    }
}

/// 帮助弹窗只响应关闭
fn handle_help(app: &mut App, msg: ModalMessage) {
    if matches!(msg, ModalMessage::Close) {
        app.modal.close();
    }
}

/// 设置弹窗：上下选择设置项，左右切换取值
fn handle_settings(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close => {
            app.modal.close();
            persist_settings(app);
        }

        ModalMessage::SelectPrevious => {
            app.settings.select_previous();
        }

        ModalMessage::SelectNext => {
            app.settings.select_next();
        }

        ModalMessage::TogglePrev => {
            app.settings.toggle_prev();
            sync_theme(app);
        }

        ModalMessage::ToggleNext => {
            app.settings.toggle_next();
            sync_theme(app);
        }
    }
}

/// 同步主题到 view 层（定义索引值 0=Dark, 1=Light）
fn sync_theme(app: &App) {
    if app.settings.current_item() == Some(SettingItem::Theme) {
        crate::view::theme::set_theme_index(app.settings.theme.index());
    }
}

/// 关闭设置弹窗时把当前选择写入配置文件
fn persist_settings(app: &App) {
    if let Err(err) = LocalConfigService.save(&app.config_snapshot()) {
        log::warn!("[Config] Failed to save config: {err}");
    }
}

// ==================== modal update tests ====================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::state::Theme;

    #[tokio::test]
    async fn test_help_modal_ignores_everything_but_close() {
        let mut app = App::new();
        app.modal.show_help();

        update(&mut app, ModalMessage::SelectNext);
        update(&mut app, ModalMessage::ToggleNext);
        assert_eq!(app.modal.active, Some(Modal::Help));
        assert_eq!(app.settings.selected_index, 0);

        update(&mut app, ModalMessage::Close);
        assert!(!app.modal.is_open());
    }

    #[tokio::test]
    async fn test_settings_selection_wraps() {
        let mut app = App::new();
        app.modal.show_settings();

        update(&mut app, ModalMessage::SelectPrevious);
        assert_eq!(app.settings.selected_index, app.settings.item_count() - 1);

        update(&mut app, ModalMessage::SelectNext);
        assert_eq!(app.settings.selected_index, 0);
    }

    #[tokio::test]
    async fn test_theme_toggle_flips_between_two_values() {
        let mut app = App::new();
        app.modal.show_settings();
        assert_eq!(app.settings.theme, Theme::Dark);

        update(&mut app, ModalMessage::ToggleNext);
        assert_eq!(app.settings.theme, Theme::Light);

        update(&mut app, ModalMessage::TogglePrev);
        assert_eq!(app.settings.theme, Theme::Dark);
    }

    #[tokio::test]
    async fn test_messages_without_open_modal_are_ignored() {
        let mut app = App::new();
        update(&mut app, ModalMessage::ToggleNext);
        assert_eq!(app.settings.theme, Theme::Dark);
        assert!(!app.modal.is_open());
    }
}
