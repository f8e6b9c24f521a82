//! 测试辅助模块
//!
//! 提供记录型反馈实现和便捷的表单工厂方法。
//! 下游 crate 通过 `test-utils` feature 在测试中使用。

use std::cell::RefCell;
use std::rc::Rc;

use crate::form::ProfileFormState;
use crate::traits::FeedbackSink;
use crate::types::HapticStyle;

// ===== RecordingFeedback =====

/// 记录每一次反馈调用
///
/// 克隆体共享同一份记录，可以把一个克隆交给被测对象，另一个留给断言。
#[derive(Debug, Clone, Default)]
pub struct RecordingFeedback {
    impacts: Rc<RefCell<Vec<HapticStyle>>>,
}

impl RecordingFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn impacts(&self) -> Vec<HapticStyle> {
        self.impacts.borrow().clone()
    }
}

impl FeedbackSink for RecordingFeedback {
    fn impact(&self, style: HapticStyle) {
        self.impacts.borrow_mut().push(style);
    }
}

// ===== 工厂方法 =====

/// 创建已填写的表单
pub fn filled_form(name: &str, age_text: &str, is_verified: bool) -> ProfileFormState {
    let mut form = ProfileFormState::new();
    form.set_name(name);
    form.set_age_text(age_text);
    if is_verified {
        form.toggle_verified();
    }
    form
}
