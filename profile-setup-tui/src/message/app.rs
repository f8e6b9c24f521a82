//! 应用主消息枚举

use super::FormMessage;

/// 应用主消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 表单相关消息
    Form(FormMessage),

    /// 返回上一页
    GoBack,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
