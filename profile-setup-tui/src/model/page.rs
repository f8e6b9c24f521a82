//! 页面状态定义

use profile_setup_core::ProfileSnapshot;

use crate::i18n::t;

/// 页面枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Page {
    /// 资料设置（表单页）
    #[default]
    ProfileSetup,
    /// 资料详情（持有跳转时生成的快照）
    ProfileDetails(ProfileSnapshot),
}

impl Page {
    /// 获取页面标题
    pub fn title(&self) -> &'static str {
        let texts = t();
        match self {
            Page::ProfileSetup => texts.setup.title,
            Page::ProfileDetails(_) => texts.details.title,
        }
    }

    /// 是否是详情页面（需要返回按钮）
    pub fn is_detail_page(&self) -> bool {
        matches!(self, Page::ProfileDetails(_))
    }
}
