//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod form;               // 表单子消息处理
//!
//!         pub fn update(app: &mut App , msg: AppMessage) {...}
//!
//!             使用 match 进行穷举，其中每个 Message 变体都对应一个状态变更。
//!             表单子消息委托给 form.rs 处理。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 表单更新（form.rs）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     主要处理的消息：
//!         - TextChanged(field, value)     调用 set_name / set_age_text
//!         - Focus / FocusNext / ...       焦点状态机
//!         - Submit(field)                 submit_from_name / submit_from_age
//!         - ToggleVerified                轻触反馈 + toggle_verified
//!         - Continue                      中等反馈 + request_continue
//!                                             Ok  → 切换到详情页
//!                                             Err → 状态栏提示，表单不变
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod form;

use crate::message::AppMessage;
use crate::model::{App, Page};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Form(form_msg) => {
            // 表单消息只在表单页生效
            if !app.current_page.is_detail_page() {
                form::update(app, form_msg);
            }
        }

        AppMessage::GoBack => {
            // 如果在详情页，返回表单页，快照随页面一起丢弃
            if app.current_page.is_detail_page() {
                app.form.return_to_editing();
                app.current_page = Page::ProfileSetup;
                app.clear_status();
            }
        }

        AppMessage::Noop => {}
    }
}
