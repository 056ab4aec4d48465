//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::state::{Modal, Theme};
use crate::model::App;
use crate::view::theme::colors;

/// 设置项的标签宽度（用于对齐，基于显示宽度）
const LABEL_WIDTH: usize = 14;
/// 值区域的宽度（包含 ◀ ▶ 符号）
const VALUE_WIDTH: usize = 20;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Help => render_help(frame),
        Modal::Settings => render_settings(app, frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let texts = t();
    let area = centered_rect(55, 18, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.help.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let inner = Rect::new(area.x + 2, area.y + 1, area.width - 4, area.height - 2);

    let lines = vec![
        Line::styled(
            texts.help.section_form,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        help_row(texts.hints.keys.navigate, texts.help.navigate),
        help_row(texts.hints.keys.arrows_lr, texts.help.change_option),
        help_row("0-9 .", texts.help.input_digits),
        help_row(texts.hints.keys.enter, texts.help.submit),
        Line::from(""),
        Line::styled(
            texts.help.section_global,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        help_row(texts.hints.keys.alt_h, texts.help.help),
        help_row(texts.hints.keys.alt_s, texts.help.settings),
        help_row(texts.hints.keys.alt_b, texts.help.check_backend),
        help_row(texts.hints.keys.esc, texts.help.quit),
        help_row(texts.hints.keys.ctrl_c, texts.help.force_quit),
        Line::from(""),
        Line::styled(texts.help.close_hint, Style::default().fg(Color::DarkGray)),
    ];

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);
}

/// 渲染一行 "按键 说明"
fn help_row(key: &'static str, desc: &'static str) -> Line<'static> {
    // 按键列按显示宽度对齐
    let padding = 8usize.saturating_sub(key.width());
    Line::from(vec![
        Span::styled(format!("  {key}"), Style::default().fg(Color::Yellow)),
        Span::raw(format!("{:width$}  ", "", width = padding)),
        Span::styled(desc, Style::default().fg(Color::White)),
    ])
}

/// 渲染设置弹窗
fn render_settings(app: &App, frame: &mut Frame) {
    let texts = t();
    let settings = &app.settings;

    let area = centered_rect(50, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.settings.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let inner = Rect::new(area.x + 2, area.y + 1, area.width - 4, area.height - 2);

    let mut lines = vec![Line::from("")];

    // === 主题设置 ===
    let theme_value = match settings.theme {
        Theme::Dark => texts.settings.theme_dark,
        Theme::Light => texts.settings.theme_light,
    };
    lines.push(render_setting_row(
        texts.settings.theme,
        theme_value,
        settings.selected_index == 0,
    ));

    // === 语言设置 ===
    let lang_value = settings.language.display_name();
    lines.push(render_setting_row(
        texts.settings.language,
        lang_value,
        settings.selected_index == 1,
    ));

    lines.push(Line::from(""));

    // 操作提示
    lines.push(Line::from(vec![
        Span::styled(
            format!("  {}", texts.hints.keys.arrows_ud),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            format!(" {} | ", texts.hints.actions.select_item),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(texts.hints.keys.arrows_lr, Style::default().fg(Color::Yellow)),
        Span::styled(
            format!(" {} | ", texts.hints.actions.change_value),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(texts.hints.keys.esc, Style::default().fg(Color::Yellow)),
        Span::styled(
            format!(" {}", texts.hints.actions.close),
            Style::default().fg(Color::DarkGray),
        ),
    ]));

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);
}

/// 渲染单行设置项
fn render_setting_row<'a>(label: &'a str, value: &'a str, is_selected: bool) -> Line<'a> {
    let c = colors();
    let prefix = if is_selected { "▶ " } else { "  " };

    let label_style = if is_selected {
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };

    let value_style = if is_selected {
        Style::default()
            .fg(c.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.highlight)
    };

    // 使用 unicode-width 计算显示宽度
    let label_display = label.to_string();
    let label_width = label.width();
    let label_padding = LABEL_WIDTH.saturating_sub(label_width);

    // 计算值的填充（居中显示在 ◀ ▶ 之间）
    let value_display = value.to_string();
    let value_width = value.width();
    let available_space = VALUE_WIDTH.saturating_sub(4); // 减去 "◀ " 和 " ▶" 的空间
    let left_padding = available_space.saturating_sub(value_width) / 2;
    let right_padding = available_space
        .saturating_sub(value_width)
        .saturating_sub(left_padding);

    if is_selected {
        // 选中时显示 ◀ value ▶
        Line::from(vec![
            Span::styled(prefix, label_style),
            Span::styled(format!("  {label_display}"), label_style),
            Span::styled(
                format!("{:width$}", "", width = label_padding),
                Style::default(),
            ),
            Span::styled(": ", Style::default().fg(c.muted)),
            Span::styled("◀ ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{:>width$}", "", width = left_padding),
                Style::default(),
            ),
            Span::styled(value_display, value_style),
            Span::styled(
                format!("{:width$}", "", width = right_padding),
                Style::default(),
            ),
            Span::styled(" ▶", Style::default().fg(Color::Yellow)),
        ])
    } else {
        // 未选中时只显示值，但保持对齐
        Line::from(vec![
            Span::styled(prefix, label_style),
            Span::styled(format!("  {label_display}"), label_style),
            Span::styled(
                format!("{:width$}", "", width = label_padding),
                Style::default(),
            ),
            Span::styled(": ", Style::default().fg(c.muted)),
            Span::styled("  ", Style::default()), // 占位符，与 "◀ " 对齐
            Span::styled(
                format!("{:>width$}", "", width = left_padding),
                Style::default(),
            ),
            Span::styled(value_display, value_style),
            Span::styled(
                format!("{:width$}", "", width = right_padding),
                Style::default(),
            ),
            Span::styled("  ", Style::default()), // 占位符，与 " ▶" 对齐
        ])
    }
}
