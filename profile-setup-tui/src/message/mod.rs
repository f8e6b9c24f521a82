//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁
//! 所有的用户操作和状态变更都通过 Message 来表达。
//! 相当于将形形色色的 Events 翻译成 Update 能够看懂的 Messages
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;
//!         mod form;
//!
//!         pub use app::AppMessage;
//!         pub use form::FormMessage;
//!
//!
//!     在 app::AppMessage 中进行主消息的枚举：
//!
//!         pub enum AppMessage {
//!             Quit,                       // 退出应用
//!             Form(FormMessage),          // 表单子消息，与主消息分离
//!             GoBack,                     // 返回上一页
//!             Noop,                       // 无操作，用于代替 Option::None
//!         }
//!
//!     form.rs 专门处理表单页的子消息：
//!         TextChanged(field, value)       // 文本变更
//!         Focus(field) / FocusNext / FocusPrevious / ClearFocus
//!         Submit(field)                   // 在字段上按 Enter
//!         ToggleVerified                  // 认证按钮
//!         Continue                        // Continue 按钮
//!
//!
//! 最后，Event 将从 Message 处获取的消息传入 Update 层进行处理。
//!     —— 去往 src/update/mod.rs 吧
//!

mod app;
mod form;

pub use app::AppMessage;
pub use form::FormMessage;
