//! 触觉反馈 Trait 定义

use crate::types::HapticStyle;

/// 触觉/动画反馈接收端
///
/// 发出即忘：没有返回值，也不会影响表单状态。
/// 平台层实现此 trait，非交互环境可以使用 [`NoopFeedback`]。
pub trait FeedbackSink {
    /// 触发一次冲击反馈
    fn impact(&self, style: HapticStyle);
}

/// 不做任何事的反馈实现
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFeedback;

impl FeedbackSink for NoopFeedback {
    fn impact(&self, _style: HapticStyle) {}
}

impl<T: FeedbackSink + ?Sized> FeedbackSink for Box<T> {
    fn impact(&self, style: HapticStyle) {
        (**self).impact(style);
    }
}
