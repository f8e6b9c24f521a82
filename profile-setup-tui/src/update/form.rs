//! 表单更新逻辑

use profile_setup_core::{CoreError, FormField, HapticStyle};

use crate::i18n::t;
use crate::message::FormMessage;
use crate::model::{App, Page};

/// 处理表单消息
pub fn update(app: &mut App, msg: FormMessage) {
    match msg {
        FormMessage::TextChanged(field, value) => {
            app.form.set_text(field, value);
            app.clear_status(); // 编辑后旧的提示不再适用
        }

        FormMessage::Focus(field) => {
            app.form.focus(field);
        }

        FormMessage::FocusNext => cycle_focus(app, true),

        FormMessage::FocusPrevious => cycle_focus(app, false),

        FormMessage::ClearFocus => {
            app.form.clear_focus();
        }

        FormMessage::Submit(field) => {
            app.form.submit(field);
        }

        FormMessage::ToggleVerified => {
            app.feedback.impact(HapticStyle::Light);
            app.form.toggle_verified();
            app.clear_status();
        }

        FormMessage::Continue => handle_continue(app),
    }
}

/// 按显示顺序循环切换焦点，没有焦点时从首个（或末个）字段开始
fn cycle_focus(app: &mut App, forward: bool) {
    let fields = FormField::all();
    let last = fields.len() - 1;
    let current = app
        .form
        .focused_field()
        .field()
        .and_then(|field| fields.iter().position(|&f| f == field));

    let index = match (current, forward) {
        (None, true) => 0,
        (None, false) => last,
        (Some(i), true) => (i + 1) % fields.len(),
        (Some(0), false) => last,
        (Some(i), false) => i - 1,
    };
    app.form.focus(fields[index]);
}

/// 处理 Continue：门槛以下由 core 拒绝，状态不变
fn handle_continue(app: &mut App) {
    // 按钮在门槛以下是禁用的，不产生反馈
    if app.form.continue_enabled() {
        app.feedback.impact(HapticStyle::Medium);
    }

    match app.form.request_continue() {
        Ok(snapshot) => {
            app.form.clear_focus();
            app.current_page = Page::ProfileDetails(snapshot);
            app.clear_status();
        }
        Err(e) => {
            if e.is_expected() {
                log::warn!("Continue rejected: {e}");
            } else {
                log::error!("Continue failed: {e}");
            }
            let texts = t();
            let message = match e {
                CoreError::NotEligible { progress, required } => {
                    format!("{} ({progress}% / {required}%)", texts.status_bar.not_eligible)
                }
                CoreError::AlreadyNavigated => texts.status_bar.already_navigated.to_string(),
                other => other.to_string(),
            };
            app.set_status(message);
        }
    }
}
