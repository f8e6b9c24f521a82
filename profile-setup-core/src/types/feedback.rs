//! 触觉反馈类型

/// 冲击反馈强度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticStyle {
    /// 轻触（切换认证状态）
    Light,
    /// 中等（点击 Continue）
    Medium,
}
