//! 资料详情页视图

use profile_setup_core::ProfileSnapshot;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::view::theme::{colors, Styles};

/// 渲染资料详情页
///
/// 只读取跳转时生成的快照，与当前表单状态无关。
pub fn render(snapshot: &ProfileSnapshot, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let mut lines = vec![
        Line::from(""),
        Line::styled(texts.details.heading, Styles::title()),
        Line::from(""),
        Line::styled(
            format!("{}{}", texts.details.name_prefix, snapshot.display_name()),
            Style::default().fg(c.fg),
        ),
        Line::from(""),
    ];

    match snapshot.age() {
        Some(age) => lines.push(Line::styled(
            format!("{}{age}", texts.details.age_prefix),
            Style::default().fg(c.fg),
        )),
        None => lines.push(Line::styled(
            texts.details.age_not_provided,
            Style::default().fg(c.muted),
        )),
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
