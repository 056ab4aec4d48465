//! 主题和样式定义

use ratatui::style::{Color, Modifier, Style};
use std::sync::atomic::{AtomicU8, Ordering};

// 默认为 0 (Dark)，相应地，1 为 Light
static CURRENT_THEME: AtomicU8 = AtomicU8::new(0);

/// 设置主题（通过索引值）
/// 定义索引值 0 = Dark, 1 = Light
/// 这个函数接受 u8 而不是 Theme 类型
pub fn set_theme_index(index: u8) {
    CURRENT_THEME.store(index, Ordering::SeqCst);
}

/// 获取当前主题的颜色方案
pub fn colors() -> ThemeColors {
    match CURRENT_THEME.load(Ordering::SeqCst) {
        0 => ThemeColors::dark(),
        _ => ThemeColors::light(),
    }
}


/// 主题颜色
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selected_fg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub muted: Color,
}

impl ThemeColors {
    /// 深色主题
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(30, 30, 30),
            fg: Color::Rgb(212, 212, 212),
            border: Color::Rgb(62, 62, 62),
            border_focused: Color::Rgb(52, 152, 219),
            highlight: Color::Rgb(52, 152, 219),
            selected_fg: Color::White,
            success: Color::Rgb(46, 204, 113),
            warning: Color::Rgb(241, 196, 15),
            error: Color::Rgb(231, 76, 60),
            muted: Color::Rgb(128, 128, 128),
        }
    }

    /// 浅色主题
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(250, 250, 250),
            fg: Color::Rgb(44, 62, 80),
            border: Color::Rgb(189, 195, 199),
            border_focused: Color::Rgb(52, 152, 219),
            highlight: Color::Rgb(52, 152, 219),
            selected_fg: Color::Black,
            success: Color::Rgb(39, 174, 96),
            warning: Color::Rgb(176, 136, 0),
            error: Color::Rgb(192, 57, 43),
            muted: Color::Rgb(127, 140, 141),
        }
    }
}

/// 常用样式
pub struct Styles;

impl Styles {
    /// 状态栏样式
    pub fn statusbar() -> Style {
        Style::default()
            .bg(Color::Rgb(52, 152, 219))
            .fg(Color::White)
    }

    /// 快捷键提示样式
    pub fn hint_key() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明样式
    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(180, 180, 180))
    }
}
