//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use profile_setup_core::{FormField, ProfileFormState};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, FormMessage};
use crate::model::{App, Page};

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
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        _ => AppMessage::Noop, // 终端窗口大小改变等，下一轮自动重绘
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    match &app.current_page {
        Page::ProfileSetup => handle_setup_keys(key, &app.form),
        Page::ProfileDetails(_) => handle_details_keys(key),
    }
}

/// 处理资料设置页的按键
fn handle_setup_keys(key: KeyEvent, form: &ProfileFormState) -> AppMessage {
    if DefaultKeymap::TOGGLE_VERIFIED.matches(&key) {
        return AppMessage::Form(FormMessage::ToggleVerified);
    }
    if DefaultKeymap::CONTINUE.matches(&key) {
        return AppMessage::Form(FormMessage::Continue);
    }

    match form.focused_field().field() {
        Some(field) => handle_field_keys(key, field, form.text(field)),
        None => handle_unfocused_keys(key),
    }
}

/// 处理输入框获得焦点时的按键
fn handle_field_keys(key: KeyEvent, field: FormField, current: &str) -> AppMessage {
    match key.code {
        // Esc: 收起键盘（工具栏上的 Done）
        KeyCode::Esc => AppMessage::Form(FormMessage::ClearFocus),

        // Enter: 在当前字段提交
        KeyCode::Enter => AppMessage::Form(FormMessage::Submit(field)),

        // Tab / ↓: 下一个字段
        KeyCode::Tab | KeyCode::Down => AppMessage::Form(FormMessage::FocusNext),

        // Shift+Tab / ↑: 上一个字段
        KeyCode::BackTab | KeyCode::Up => AppMessage::Form(FormMessage::FocusPrevious),

        // Backspace: 删除最后一个字符
        KeyCode::Backspace => {
            if current.is_empty() {
                AppMessage::Noop
            } else {
                let mut value = current.to_string();
                value.pop();
                AppMessage::Form(FormMessage::TextChanged(field, value))
            }
        }

        // 字符输入（年龄框只接受数字，相当于数字键盘）
        KeyCode::Char(ch)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            if field.is_numeric() && !ch.is_ascii_digit() {
                AppMessage::Noop
            } else {
                let mut value = current.to_string();
                value.push(ch);
                AppMessage::Form(FormMessage::TextChanged(field, value))
            }
        }

        _ => AppMessage::Noop,
    }
}

/// 处理没有输入框获得焦点时的按键
fn handle_unfocused_keys(key: KeyEvent) -> AppMessage {
    if !key.modifiers.is_empty() && key.modifiers != KeyModifiers::SHIFT {
        return AppMessage::Noop;
    }

    match key.code {
        // Tab / ↓: 从姓名框开始
        KeyCode::Tab | KeyCode::Down => AppMessage::Form(FormMessage::FocusNext),

        // Shift+Tab / ↑: 从年龄框开始
        KeyCode::BackTab | KeyCode::Up => AppMessage::Form(FormMessage::FocusPrevious),

        // n / a: 直接跳到对应字段
        KeyCode::Char('n') => AppMessage::Form(FormMessage::Focus(FormField::Name)),
        KeyCode::Char('a') => AppMessage::Form(FormMessage::Focus(FormField::Age)),

        // v: 认证按钮
        KeyCode::Char('v') => AppMessage::Form(FormMessage::ToggleVerified),

        // Enter / c: Continue 按钮
        KeyCode::Enter | KeyCode::Char('c') => AppMessage::Form(FormMessage::Continue),

        // q / Esc: 退出
        KeyCode::Char('q') | KeyCode::Esc => AppMessage::Quit,

        _ => AppMessage::Noop,
    }
}

/// 处理资料详情页的按键
fn handle_details_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // Esc / Backspace / b: 返回表单页
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => AppMessage::GoBack,

        // q: 退出
        KeyCode::Char('q') => AppMessage::Quit,

        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use profile_setup_core::ProfileSnapshot;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn press_with(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn app_with_focus(field: FormField, text: &str) -> App {
        let mut app = App::default();
        app.form.set_text(field, text);
        app.form.focus(field);
        app
    }

    #[test]
    fn typing_in_name_appends() {
        let app = app_with_focus(FormField::Name, "An");
        assert_eq!(
            handle_event(press(KeyCode::Char('n')), &app),
            AppMessage::Form(FormMessage::TextChanged(FormField::Name, "Ann".to_string()))
        );
    }

    #[test]
    fn shifted_letters_are_text() {
        let app = app_with_focus(FormField::Name, "");
        assert_eq!(
            handle_event(press_with(KeyCode::Char('A'), KeyModifiers::SHIFT), &app),
            AppMessage::Form(FormMessage::TextChanged(FormField::Name, "A".to_string()))
        );
    }

    #[test]
    fn age_field_only_takes_digits() {
        let app = app_with_focus(FormField::Age, "3");
        assert_eq!(handle_event(press(KeyCode::Char('x')), &app), AppMessage::Noop);
        assert_eq!(
            handle_event(press(KeyCode::Char('0')), &app),
            AppMessage::Form(FormMessage::TextChanged(FormField::Age, "30".to_string()))
        );
    }

    #[test]
    fn backspace_removes_last_char() {
        let app = app_with_focus(FormField::Name, "Anné");
        assert_eq!(
            handle_event(press(KeyCode::Backspace), &app),
            AppMessage::Form(FormMessage::TextChanged(FormField::Name, "Ann".to_string()))
        );

        let empty = app_with_focus(FormField::Name, "");
        assert_eq!(handle_event(press(KeyCode::Backspace), &empty), AppMessage::Noop);
    }

    #[test]
    fn enter_submits_focused_field() {
        let app = app_with_focus(FormField::Age, "30");
        assert_eq!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::Form(FormMessage::Submit(FormField::Age))
        );
    }

    #[test]
    fn esc_in_field_clears_focus() {
        let app = app_with_focus(FormField::Name, "Ann");
        assert_eq!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::Form(FormMessage::ClearFocus)
        );
    }

    #[test]
    fn unfocused_shortcuts() {
        let app = App::default();
        assert_eq!(
            handle_event(press(KeyCode::Char('v')), &app),
            AppMessage::Form(FormMessage::ToggleVerified)
        );
        assert_eq!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::Form(FormMessage::Continue)
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('a')), &app),
            AppMessage::Form(FormMessage::Focus(FormField::Age))
        );
        assert_eq!(handle_event(press(KeyCode::Char('q')), &app), AppMessage::Quit);
    }

    #[test]
    fn plain_v_while_typing_is_text() {
        let app = app_with_focus(FormField::Name, "");
        assert_eq!(
            handle_event(press(KeyCode::Char('v')), &app),
            AppMessage::Form(FormMessage::TextChanged(FormField::Name, "v".to_string()))
        );
        assert_eq!(
            handle_event(press_with(KeyCode::Char('v'), KeyModifiers::ALT), &app),
            AppMessage::Form(FormMessage::ToggleVerified)
        );
    }

    #[test]
    fn ctrl_c_always_quits() {
        let app = app_with_focus(FormField::Name, "Ann");
        assert_eq!(
            handle_event(press_with(KeyCode::Char('c'), KeyModifiers::CONTROL), &app),
            AppMessage::Quit
        );
    }

    #[test]
    fn details_page_goes_back() {
        let mut app = App::default();
        app.current_page = Page::ProfileDetails(ProfileSnapshot::new("Ann", Some(30)));
        assert_eq!(handle_event(press(KeyCode::Esc), &app), AppMessage::GoBack);
        // 详情页不响应表单快捷键
        assert_eq!(
            handle_event(press_with(KeyCode::Char('v'), KeyModifiers::ALT), &app),
            AppMessage::Noop
        );
    }

    #[test]
    fn release_events_are_ignored() {
        let app = App::default();
        let mut key = KeyEvent::new(KeyCode::Char('v'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(handle_event(Event::Key(key), &app), AppMessage::Noop);
    }
}
