//! 导航阶段定义

/// 导航状态机的阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationPhase {
    /// 正在编辑表单
    #[default]
    Editing,
    /// 已提交 Continue，详情页持有快照
    Navigated,
}

impl NavigationPhase {
    /// 是否已完成跳转
    #[must_use]
    pub fn is_navigated(self) -> bool {
        matches!(self, NavigationPhase::Navigated)
    }
}
