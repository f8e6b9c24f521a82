//! 应用主状态结构

use profile_setup_core::{FeedbackSink, NoopFeedback, ProfileFormState};

use super::Page;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前页面
    pub current_page: Page,

    /// 资料表单状态
    pub form: ProfileFormState,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 触觉反馈接收端
    pub feedback: Box<dyn FeedbackSink>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(feedback: Box<dyn FeedbackSink>) -> Self {
        Self {
            should_quit: false,
            current_page: Page::ProfileSetup,
            form: ProfileFormState::new(),
            status_message: None,
            feedback,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Box::new(NoopFeedback))
    }
}
