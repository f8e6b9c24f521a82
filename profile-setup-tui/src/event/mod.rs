//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘等输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event , poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用
//!
//!         · handle_event    事件分发
//!
//!             当接收到键盘事件时，转入 handle_key_event()
//!             判断：
//!                 - 全局快捷键（Ctrl+C、Alt+q），就地处理；
//!                 - 位于详情页，调用 handle_details_keys 处理
//!                 - 位于表单页且有输入框获得焦点，调用 handle_field_keys 处理
//!                 - 位于表单页且没有焦点，调用 handle_unfocused_keys 处理
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 输入框键盘处理
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         常用键盘映射：
//!             Esc         → FormMessage::ClearFocus        （键盘工具栏 Done）
//!             Tab / ↓     → FormMessage::FocusNext
//!             Shift+Tab   → FormMessage::FocusPrevious
//!             Enter       → FormMessage::Submit(field)     （姓名 → 年龄 → 收起）
//!             字符输入     → FormMessage::TextChanged(field, 新文本)
//!             Backspace   → FormMessage::TextChanged(field, 删除末尾字符后的文本)
//!             Alt+v       → FormMessage::ToggleVerified
//!             Alt+c       → FormMessage::Continue
//!
//!     年龄框模拟数字键盘，非数字字符直接忽略；
//!     但 core 并不假设年龄文本一定是数字，解析失败时视为未提供。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
