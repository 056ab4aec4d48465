//! 快捷键配置
//!
//! 定义可配置的快捷键映射（未来可支持用户自定义）

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
///
/// 普通字符键不能作为全局快捷键：数字输入框会把它们当作输入，
/// 所以全局动作一律挂在 Alt / Ctrl 组合键上。
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::alt(KeyCode::Char('h'));
    pub const SETTINGS: KeyBinding = KeyBinding::alt(KeyCode::Char('s'));
    pub const CHECK_BACKEND: KeyBinding = KeyBinding::alt(KeyCode::Char('b'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);
}

// ==================== keymap tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    #[test]
    fn test_matches_requires_exact_modifiers() {
        let plain_h = KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE);
        let alt_h = KeyEvent::new(KeyCode::Char('h'), KeyModifiers::ALT);

        assert!(DefaultKeymap::HELP.matches(&alt_h));
        assert!(!DefaultKeymap::HELP.matches(&plain_h));
    }

    #[test]
    fn test_force_quit_is_ctrl_c() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let plain_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);

        assert!(DefaultKeymap::FORCE_QUIT.matches(&ctrl_c));
        assert!(!DefaultKeymap::FORCE_QUIT.matches(&plain_c));
    }
}
