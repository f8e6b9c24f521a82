//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **页面内容归对应页面**：如 `setup.*`, `details.*`
//! 3. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 4. **键盘提示归 `hints.*`**：按键名称和操作提示

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 资料设置页文本
    pub setup: SetupTexts,
    /// 资料详情页文本
    pub details: DetailsTexts,
    /// 状态栏文本
    pub status_bar: StatusBarTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub quit: &'static str,
    pub back: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本
pub struct HintTexts {
    /// 按键名称
    pub keys: KeyNames,
    /// 动作词
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab_arrows: &'static str, // "Tab/↑↓"
}

/// 动作词
pub struct ActionTexts {
    pub next_field: &'static str, // "下一项" / "Next field"
    pub submit: &'static str,     // "提交" / "Submit"
    pub done: &'static str,       // "完成" / "Done"
    pub edit: &'static str,       // "编辑" / "Edit"
    pub verify: &'static str,     // "认证" / "Verify"
    pub continue_: &'static str,  // "继续" / "Continue"
}

// ============================================================================
// 页面文本
// ============================================================================

/// 资料设置页文本
pub struct SetupTexts {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub progress_label: &'static str,
    pub name_label: &'static str,
    pub name_placeholder: &'static str,
    pub age_label: &'static str,
    pub age_placeholder: &'static str,
    pub verification_title: &'static str,
    pub verified: &'static str,
    pub not_verified: &'static str,
    pub verify_button: &'static str,
    pub revoke_button: &'static str,
    pub continue_button: &'static str,
}

/// 资料详情页文本
pub struct DetailsTexts {
    pub title: &'static str,
    pub heading: &'static str,
    pub name_prefix: &'static str,
    pub age_prefix: &'static str,
    pub age_not_provided: &'static str,
}

/// 状态栏文本
pub struct StatusBarTexts {
    pub not_eligible: &'static str,
    pub already_navigated: &'static str,
}
