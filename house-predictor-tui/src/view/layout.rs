//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;

use super::components;
use super::pages;
use super::theme::colors;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    let c = colors();

    // 整屏先铺一层主题背景色，浅色主题才看得出来
    frame.render_widget(
        Block::default().style(Style::default().bg(c.bg).fg(c.fg)),
        size,
    );

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    let title_area = main_layout[0];
    let content_area = main_layout[1];
    let status_area = main_layout[2];

    // 渲染标题栏
    render_title_bar(frame, title_area);

    // 渲染表单页面
    render_page_content(app, frame, content_area);

    // 渲染状态栏
    components::statusbar::render(app, frame, status_area);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let title = Paragraph::new(format!(" {} v0.1.0", texts.common.app_name))
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 渲染主内容区
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    // 弹窗打开时表单失去焦点，边框退回普通色
    let border_style = if app.modal.is_open() {
        Style::default().fg(c.border)
    } else {
        Style::default().fg(c.border_focused)
    };

    let block = Block::default()
        .title(format!(" {} ", texts.form.title))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    pages::predictor::render(app, frame, inner_area);
}
