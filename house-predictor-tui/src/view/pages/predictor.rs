//! 预测表单页面视图

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use house_predictor_client::Prediction;

use crate::i18n::t;
use crate::model::state::{
    AREA_FOCUS, BATHROOMS_FOCUS, BEDROOMS_FOCUS, CITY_FOCUS, FLOOR_FOCUS, FURNISHING_FOCUS,
    SUBMIT_FOCUS,
};
use crate::model::App;
use crate::view::theme::colors;

/// 渲染预测表单页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let predictor = &app.predictor;

    let mut lines = vec![Line::from("")];

    // === 数值输入框 ===
    push_text_field(
        &mut lines,
        texts.form.area,
        &predictor.area,
        predictor.focus == AREA_FOCUS,
    );
    push_text_field(
        &mut lines,
        texts.form.bedrooms,
        &predictor.bedrooms,
        predictor.focus == BEDROOMS_FOCUS,
    );
    push_text_field(
        &mut lines,
        texts.form.bathrooms,
        &predictor.bathrooms,
        predictor.focus == BATHROOMS_FOCUS,
    );
    push_text_field(
        &mut lines,
        texts.form.floor,
        &predictor.floor,
        predictor.focus == FLOOR_FOCUS,
    );

    // === 选择器 ===
    // 城市和装修程度的选项名是协议值，不参与翻译
    push_selector(
        &mut lines,
        texts.form.city,
        predictor.city().map(|city| city.name()),
        texts.form.city_placeholder,
        predictor.focus == CITY_FOCUS,
    );
    push_selector(
        &mut lines,
        texts.form.furnishing,
        predictor.furnishing().map(|furnishing| furnishing.name()),
        texts.form.furnishing_placeholder,
        predictor.focus == FURNISHING_FOCUS,
    );

    // === 提交按钮 ===
    lines.push(Line::from(""));
    lines.push(submit_row(texts.form.submit, predictor.focus == SUBMIT_FOCUS));
    lines.push(Line::from(""));

    // === 结果 / 错误 ===
    // 刚落地的结果优先于"预测中"：并发提交时先回的响应照常展示
    let c = colors();
    if let Some(ref prediction) = predictor.result {
        lines.push(price_line(texts.messages.predicted_price, prediction));
        if let Some(ref note) = prediction.note {
            lines.push(Line::styled(
                format!("  {note}"),
                Style::default().fg(c.muted),
            ));
        }
    } else if let Some(ref error) = predictor.error {
        lines.push(Line::styled(
            format!("  ⚠ {error}"),
            Style::default().fg(c.error),
        ));
    } else if predictor.is_submitting() {
        lines.push(Line::styled(
            format!("  {}", texts.messages.predicting),
            Style::default().fg(c.warning),
        ));
    }

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, area);
}

/// 渲染一个数值输入字段（标签行 + 值行）
fn push_text_field(lines: &mut Vec<Line<'static>>, label: &'static str, value: &str, focused: bool) {
    let texts = t();
    let c = colors();

    let label_style = if focused {
        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.fg)
    };
    lines.push(Line::styled(format!("  {label}"), label_style));

    let value_display = if value.is_empty() && !focused {
        format!("    {}", texts.form.numeric_placeholder)
    } else if focused {
        format!("    {value}▎")
    } else {
        format!("    {value}")
    };
    let value_style = if value.is_empty() && !focused {
        Style::default().fg(c.muted)
    } else if focused {
        Style::default().fg(c.highlight)
    } else {
        Style::default().fg(c.fg)
    };
    lines.push(Line::styled(value_display, value_style));
}

/// 渲染一个选项字段（标签行 + ◀ 值 ▶ 行）
fn push_selector(
    lines: &mut Vec<Line<'static>>,
    label: &'static str,
    selected: Option<&'static str>,
    placeholder: &'static str,
    focused: bool,
) {
    let c = colors();

    let label_style = if focused {
        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.fg)
    };
    lines.push(Line::styled(format!("  {label}"), label_style));

    let display = selected.unwrap_or(placeholder);
    let value_display = format!(
        "    {} {} {}",
        if focused { "◀" } else { " " },
        display,
        if focused { "▶" } else { " " },
    );
    let value_style = if selected.is_none() && !focused {
        Style::default().fg(c.muted)
    } else if focused {
        Style::default().fg(c.highlight)
    } else {
        Style::default().fg(c.fg)
    };
    lines.push(Line::styled(value_display, value_style));
}

/// 渲染提交按钮行
fn submit_row(label: &'static str, focused: bool) -> Line<'static> {
    let c = colors();
    let style = if focused {
        Style::default()
            .bg(c.highlight)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.highlight)
    };
    Line::from(vec![Span::raw("  "), Span::styled(format!("[ {label} ]"), style)])
}

/// 渲染预测结果行
fn price_line(prefix: &'static str, prediction: &Prediction) -> Line<'static> {
    let c = colors();
    // 后端不标单位或标 INR 时展示卢比符号，其他单位原样跟在数字后面
    let amount = match prediction.unit.as_deref() {
        None | Some("INR") => format!("₹ {}", prediction.predicted_price),
        Some(unit) => format!("{} {}", prediction.predicted_price, unit),
    };
    Line::from(vec![
        Span::styled(
            format!("  {prefix} "),
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        ),
        Span::styled(amount, Style::default().fg(c.success).add_modifier(Modifier::BOLD)),
    ])
}
