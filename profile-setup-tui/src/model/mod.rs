//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 表单字段、焦点和跳转门槛都由 profile-setup-core 的 ProfileFormState 持有，
//! 这里只在其外面包一层页面路由和状态栏。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod page;           // 页面路由状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,                  // 退出标志
//!             pub current_page: Page,                 // 当前页面
//!             pub form: ProfileFormState,             // 表单状态（来自 core）
//!             pub status_message: Option<String>,     // 状态栏消息（可选）
//!             pub feedback: Box<dyn FeedbackSink>,    // 触觉反馈（终端下写日志）
//!         }
//!
//!     使用：
//!         - 在 main.rs 中创建：let mut app = model::App::new(feedback);
//!         - 在 update/mod.rs 中修改：app.form.set_name(...);
//!         - 在 view/layout.rs 中读取：pub fn render(app: &App, ...)
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、页面状态（Page）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/page.rs 中定义页面枚举：
//!         - ProfileSetup                      表单页
//!         - ProfileDetails(ProfileSnapshot)   携带快照的详情页
//!
//!     数据流：
//!         表单页按 Enter（无焦点）→ request_continue()
//!             ↓ Ok(snapshot)
//!         current_page = Page::ProfileDetails(snapshot)
//!             ↓ Esc
//!         return_to_editing()，回到表单页
//!
//!     快照归详情页所有，之后再编辑表单不会影响它。
//!

mod app;
mod page;

pub use app::App;
pub use page::Page;
