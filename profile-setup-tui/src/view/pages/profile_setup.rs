//! 资料设置页视图

use profile_setup_core::{FormField, ProfileFormState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染资料设置页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let form = &app.form;

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 问候语 + 副标题
            Constraint::Length(2), // 完成度
            Constraint::Length(3), // 头像
            Constraint::Length(4), // 姓名
            Constraint::Length(4), // 年龄
            Constraint::Length(4), // 认证卡片
            Constraint::Min(0),    // 留白
            Constraint::Length(3), // Continue 按钮
        ])
        .split(area);

    render_header(form, frame, layout[0]);
    render_progress(form, frame, layout[1]);
    render_avatar(frame, layout[2]);
    render_input(form, FormField::Name, frame, layout[3]);
    render_input(form, FormField::Age, frame, layout[4]);
    render_verification_card(form, frame, layout[5]);
    render_continue_button(form, frame, layout[7]);
}

/// 问候语和副标题
fn render_header(form: &ProfileFormState, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let header = Paragraph::new(vec![
        Line::styled(form.greeting(), Styles::title()),
        Line::styled(texts.setup.subtitle, Style::default().fg(c.muted)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(header, area);
}

/// 完成度进度条
fn render_progress(form: &ProfileFormState, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let progress = form.completion_progress();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            texts.setup.progress_label,
            Style::default().fg(c.muted),
        )),
        rows[0],
    );

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(c.accent).bg(c.input_bg))
        .ratio(progress.fraction())
        .label(progress.to_string());
    frame.render_widget(gauge, rows[1]);
}

/// 头像占位
fn render_avatar(frame: &mut Frame, area: Rect) {
    let style = Style::default().fg(colors().muted);
    let avatar = Paragraph::new(vec![
        Line::styled("╭───╮", style),
        Line::styled("│ ● │", style),
        Line::styled("╰───╯", style),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(avatar, area);
}

/// 输入框：标签 + 带边框的文本
fn render_input(form: &ProfileFormState, field: FormField, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let (label, placeholder) = match field {
        FormField::Name => (texts.setup.name_label, texts.setup.name_placeholder),
        FormField::Age => (texts.setup.age_label, texts.setup.age_placeholder),
    };
    let value = form.text(field);
    let focused = form.focused_field().is(field);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(3)])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            label,
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        )),
        rows[0],
    );

    let display = if value.is_empty() && !focused {
        placeholder.to_string()
    } else if focused {
        format!("{value}▎")
    } else {
        value.to_string()
    };

    let text_style = if value.is_empty() && !focused {
        Style::default().fg(c.muted)
    } else {
        Style::default().fg(c.fg)
    };

    let border_style = if focused {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.border)
    };

    let input = Paragraph::new(Span::styled(display, text_style)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(c.input_bg)),
    );
    frame.render_widget(input, rows[1]);
}

/// 认证卡片：标题 + 状态，右侧为按钮
fn render_verification_card(form: &ProfileFormState, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border))
        .style(Style::default().bg(c.input_bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (status, status_color, button) = if form.is_verified() {
        (texts.setup.verified, c.success, texts.setup.revoke_button)
    } else {
        (texts.setup.not_verified, c.error, texts.setup.verify_button)
    };

    // 按钮靠右：用显示宽度补齐中间的空白
    let title = texts.setup.verification_title;
    let button_label = format!("[ {button} ]");
    let gap = usize::from(inner.width)
        .saturating_sub(title.width())
        .saturating_sub(button_label.width())
        .max(1);

    let card = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(title, Style::default().fg(c.fg).add_modifier(Modifier::BOLD)),
            Span::raw(" ".repeat(gap)),
            Span::styled(
                button_label,
                Style::default().fg(c.accent).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::styled(status, Style::default().fg(status_color)),
    ]);
    frame.render_widget(card, inner);
}

/// Continue 按钮，未达到门槛时置灰
fn render_continue_button(form: &ProfileFormState, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let style = if form.continue_enabled() {
        Style::default().fg(c.selected_fg).bg(c.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted).add_modifier(Modifier::DIM)
    };

    let button = Paragraph::new(texts.setup.continue_button)
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    frame.render_widget(button, area);
}
