//! 表单消息
//!
//! 每个变体对应一种输入事件：文本变更、焦点变更、提交、认证切换、Continue

use profile_setup_core::FormField;

/// 表单消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    // ========== 文本输入 ==========
    /// 字段文本变更（携带变更后的完整文本）
    TextChanged(FormField, String),

    // ========== 焦点 ==========
    /// 让指定字段获得焦点
    Focus(FormField),
    /// 焦点移到下一个字段
    FocusNext,
    /// 焦点移到上一个字段
    FocusPrevious,
    /// 清除焦点（收起键盘）
    ClearFocus,

    // ========== 动作 ==========
    /// 在指定字段上提交
    Submit(FormField),
    /// 切换认证状态
    ToggleVerified,
    /// 请求跳转到详情页
    Continue,
}
