//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, FormMessage, ModalMessage};
use crate::model::App;




/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}




/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),      // 键盘事件
        Event::Resize(_, _) => AppMessage::Noop,                                  // 终端窗口大小改变，自动重绘
        _ => AppMessage::Noop,
    }
}




/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::SETTINGS.matches(&key) {
        return AppMessage::ShowSettings;
    }

    if DefaultKeymap::CHECK_BACKEND.matches(&key) {
        return AppMessage::CheckBackend;
    }

    // 单页面应用：没有上一级页面可退，Esc 直接退出
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::Quit;
    }

    // 其余按键交给表单
    handle_form_keys(key, app)
}

/// 处理表单的按键
fn handle_form_keys(key: KeyEvent, app: &App) -> AppMessage {
    match key.code {
        // Tab / ↓: 下一个字段
        KeyCode::Tab | KeyCode::Down => AppMessage::Form(FormMessage::NextField),

        // Shift+Tab / ↑: 上一个字段
        KeyCode::BackTab | KeyCode::Up => AppMessage::Form(FormMessage::PrevField),

        // ← →: 切换选项（仅当焦点在城市或装修程度字段时）
        KeyCode::Left => {
            if app.predictor.focus_on_selector() {
                AppMessage::Form(FormMessage::PrevOption)
            } else {
                AppMessage::Noop
            }
        }
        KeyCode::Right => {
            if app.predictor.focus_on_selector() {
                AppMessage::Form(FormMessage::NextOption)
            } else {
                AppMessage::Noop
            }
        }

        // Enter: 提交表单（浏览器表单的习惯：任意字段上回车都提交）
        KeyCode::Enter => AppMessage::Form(FormMessage::Submit),

        // Backspace: 删除字符
        KeyCode::Backspace => AppMessage::Form(FormMessage::Backspace),

        // Delete: 清空当前输入框
        KeyCode::Delete => AppMessage::Form(FormMessage::Clear),

        // 字符输入（仅当焦点在文本输入框时）
        KeyCode::Char(ch) if key.modifiers.is_empty() && app.predictor.focus_on_text_field() => {
            AppMessage::Form(FormMessage::Input(ch))
        }

        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    use crate::model::state::Modal;

    // Ctrl+C 任何时候都直接退出；Esc 关闭弹窗
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            return AppMessage::Quit;
        }
        (KeyModifiers::NONE, KeyCode::Esc) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        _ => {}
    }

    // 根据弹窗类型处理按键
    let Some(modal) = app.modal.active else {
        return AppMessage::Noop;
    };

    match modal {
        Modal::Help => {
            // 帮助弹窗只响应关闭按键
            match key.code {
                KeyCode::Enter | KeyCode::Esc => AppMessage::Modal(ModalMessage::Close),
                _ => AppMessage::Noop,
            }
        }
        Modal::Settings => handle_settings_keys(key),
    }
}

/// 处理设置弹窗的按键
fn handle_settings_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上一个设置项
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Modal(ModalMessage::SelectPrevious)
        }
        // ↓ 或 j: 下一个设置项
        KeyCode::Down | KeyCode::Char('j') => {
            AppMessage::Modal(ModalMessage::SelectNext)
        }
        // ←: 切换到上一个值
        KeyCode::Left => {
            AppMessage::Modal(ModalMessage::TogglePrev)
        }
        // →: 切换到下一个值
        KeyCode::Right => {
            AppMessage::Modal(ModalMessage::ToggleNext)
        }
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::state::{CITY_FOCUS, Modal};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    // ==================== 按键分发测试 ====================

    #[tokio::test]
    async fn test_release_events_are_ignored() {
        let app = App::new();
        let key = KeyEvent::new_with_kind(
            KeyCode::Char('1'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );

        let msg = handle_event(Event::Key(key), &app);
        assert!(matches!(msg, AppMessage::Noop));
    }

    #[tokio::test]
    async fn test_esc_quits_when_no_modal_is_open() {
        let app = App::new();

        let msg = handle_event(Event::Key(press(KeyCode::Esc)), &app);
        assert!(matches!(msg, AppMessage::Quit));
    }

    #[tokio::test]
    async fn test_esc_closes_an_open_modal_instead_of_quitting() {
        let mut app = App::new();
        app.modal.show(Modal::Help);

        let msg = handle_event(Event::Key(press(KeyCode::Esc)), &app);
        assert!(matches!(msg, AppMessage::Modal(ModalMessage::Close)));
    }

    #[tokio::test]
    async fn test_arrow_keys_cycle_options_only_on_selector_fields() {
        let mut app = App::new();

        // 焦点在文本输入框上时 ← → 不做任何事
        let msg = handle_event(Event::Key(press(KeyCode::Left)), &app);
        assert!(matches!(msg, AppMessage::Noop));

        app.predictor.focus = CITY_FOCUS;
        let msg = handle_event(Event::Key(press(KeyCode::Left)), &app);
        assert!(matches!(msg, AppMessage::Form(FormMessage::PrevOption)));
        let msg = handle_event(Event::Key(press(KeyCode::Right)), &app);
        assert!(matches!(msg, AppMessage::Form(FormMessage::NextOption)));
    }

    #[tokio::test]
    async fn test_characters_reach_the_form_only_on_text_fields() {
        let mut app = App::new();

        let msg = handle_event(Event::Key(press(KeyCode::Char('7'))), &app);
        assert!(matches!(msg, AppMessage::Form(FormMessage::Input('7'))));

        app.predictor.focus = CITY_FOCUS;
        let msg = handle_event(Event::Key(press(KeyCode::Char('7'))), &app);
        assert!(matches!(msg, AppMessage::Noop));
    }

    #[tokio::test]
    async fn test_enter_submits_from_any_field() {
        let mut app = App::new();

        let msg = handle_event(Event::Key(press(KeyCode::Enter)), &app);
        assert!(matches!(msg, AppMessage::Form(FormMessage::Submit)));

        app.predictor.focus = CITY_FOCUS;
        let msg = handle_event(Event::Key(press(KeyCode::Enter)), &app);
        assert!(matches!(msg, AppMessage::Form(FormMessage::Submit)));
    }

    #[tokio::test]
    async fn test_settings_modal_uses_vim_style_selection_keys() {
        let mut app = App::new();
        app.modal.show(Modal::Settings);

        let msg = handle_event(Event::Key(press(KeyCode::Char('j'))), &app);
        assert!(matches!(msg, AppMessage::Modal(ModalMessage::SelectNext)));
        let msg = handle_event(Event::Key(press(KeyCode::Char('k'))), &app);
        assert!(matches!(msg, AppMessage::Modal(ModalMessage::SelectPrevious)));
    }
}
