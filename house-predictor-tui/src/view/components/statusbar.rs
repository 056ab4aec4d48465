//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::state::Modal;
use crate::model::App;
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前弹窗和焦点生成快捷键提示
    let hints = get_hints(app);

    // 构建状态栏内容
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let content = Line::from(spans);
    let paragraph = Paragraph::new(content).style(Styles::statusbar());

    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = t();
    let mut hints = Vec::new();

    match app.modal.active {
        Some(Modal::Help) => {
            hints.push((texts.hints.keys.esc, texts.hints.actions.close));
        }
        Some(Modal::Settings) => {
            hints.push((texts.hints.keys.arrows_ud, texts.hints.actions.select_item));
            hints.push((texts.hints.keys.arrows_lr, texts.hints.actions.change_value));
            hints.push((texts.hints.keys.esc, texts.hints.actions.close));
        }
        None => {
            hints.push((texts.hints.keys.navigate, texts.hints.actions.navigate));
            // 只有焦点在选择器上时 ←→ 才有作用
            if app.predictor.focus_on_selector() {
                hints.push((texts.hints.keys.arrows_lr, texts.hints.actions.change_option));
            }
            hints.push((texts.hints.keys.enter, texts.hints.actions.submit));
            hints.push((texts.hints.keys.alt_h, texts.hints.actions.help));
            hints.push((texts.hints.keys.alt_s, texts.hints.actions.settings));
            hints.push((texts.hints.keys.alt_b, texts.hints.actions.check_backend));
            hints.push((texts.hints.keys.esc, texts.hints.actions.quit));
        }
    }

    hints
}
