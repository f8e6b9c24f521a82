//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Page};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前页面和焦点生成快捷键提示
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
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;
    let mut hints = Vec::new();

    match &app.current_page {
        Page::ProfileSetup => {
            if app.form.focused_field().is_some() {
                hints.push((keys.tab_arrows, actions.next_field));
                hints.push((keys.enter, actions.submit));
                hints.push((keys.esc, actions.done));
                hints.push(("Alt+v", actions.verify));
                if app.form.continue_enabled() {
                    hints.push(("Alt+c", actions.continue_));
                }
            } else {
                hints.push((keys.tab_arrows, actions.edit));
                hints.push(("v", actions.verify));
                if app.form.continue_enabled() {
                    hints.push((keys.enter, actions.continue_));
                }
            }
        }
        Page::ProfileDetails(_) => {
            hints.push((keys.esc, texts.common.back));
        }
    }

    // Quit
    hints.push(("Alt+q", texts.common.quit));

    hints
}

#[cfg(test)]
mod tests {
    use profile_setup_core::{FormField, ProfileSnapshot};

    use super::*;

    fn keys(app: &App) -> Vec<&'static str> {
        get_hints(app).into_iter().map(|(key, _)| key).collect()
    }

    #[test]
    fn focused_field_hides_continue_below_threshold() {
        let mut app = App::default();
        app.form.focus(FormField::Name);
        app.form.set_name("Ann");

        let keys = keys(&app);
        assert!(keys.contains(&"Alt+v"));
        assert!(!keys.contains(&"Alt+c"));
        assert_eq!(keys.last(), Some(&"Alt+q"));
    }

    #[test]
    fn focused_field_offers_continue_when_enabled() {
        let mut app = App::default();
        app.form.set_name("Ann");
        app.form.set_age_text("30");
        app.form.focus(FormField::Age);

        assert!(keys(&app).contains(&"Alt+c"));
    }

    #[test]
    fn unfocused_form_offers_enter_only_when_enabled() {
        let mut app = App::default();
        let enter = t().hints.keys.enter;
        assert!(!keys(&app).contains(&enter));

        app.form.set_name("Ann");
        app.form.toggle_verified();
        assert!(keys(&app).contains(&enter));
    }

    #[test]
    fn details_page_offers_back_and_quit() {
        let app = App {
            current_page: Page::ProfileDetails(ProfileSnapshot::new("Ann", None)),
            ..App::default()
        };
        let hints = get_hints(&app);
        assert_eq!(hints.len(), 2);
        assert_eq!(hints[0], (t().hints.keys.esc, t().common.back));
    }
}
