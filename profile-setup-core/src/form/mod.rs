//! 资料表单状态机
//!
//! `ProfileFormState` 是表单字段的唯一持有者，负责：
//! - 字段修改（姓名、年龄文本、认证状态）
//! - 焦点状态机：None / Name / Age
//! - 导航状态机：Editing → Navigated，由完成度门槛控制
//!
//! 所有操作都是同步且确定的：要么生效，要么是被拒绝的空操作。

mod derived;

pub use derived::{completion_progress, greeting, parsed_age};

use crate::error::{CoreError, CoreResult};
use crate::types::{CompletionProgress, FocusedField, FormField, NavigationPhase, ProfileSnapshot};

/// 资料表单状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileFormState {
    name: String,
    age_text: String,
    is_verified: bool,
    focused_field: FocusedField,
    navigation_requested: bool,
}

impl ProfileFormState {
    /// 创建空表单
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========== 字段修改 ==========

    /// 替换姓名
    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    /// 替换年龄文本，不做校验
    pub fn set_age_text(&mut self, value: impl Into<String>) {
        self.age_text = value.into();
    }

    /// 按字段替换文本
    pub fn set_text(&mut self, field: FormField, value: impl Into<String>) {
        match field {
            FormField::Name => self.set_name(value),
            FormField::Age => self.set_age_text(value),
        }
    }

    /// 切换认证状态
    pub fn toggle_verified(&mut self) {
        self.is_verified = !self.is_verified;
        log::debug!("verification toggled to {}", self.is_verified);
    }

    // ========== 焦点状态机 ==========

    /// 让指定字段获得焦点
    pub fn focus(&mut self, field: FormField) {
        self.focused_field = field.into();
    }

    /// 清除焦点
    pub fn clear_focus(&mut self) {
        self.focused_field = FocusedField::None;
    }

    /// 在姓名框提交：Name → Age，其他状态不变
    pub fn submit_from_name(&mut self) {
        if self.focused_field == FocusedField::Name {
            self.focused_field = FocusedField::Age;
        }
    }

    /// 在年龄框提交：Age → None，其他状态不变
    pub fn submit_from_age(&mut self) {
        if self.focused_field == FocusedField::Age {
            self.focused_field = FocusedField::None;
        }
    }

    /// 按字段提交
    pub fn submit(&mut self, field: FormField) {
        match field {
            FormField::Name => self.submit_from_name(),
            FormField::Age => self.submit_from_age(),
        }
    }

    // ========== 导航状态机 ==========

    /// 请求跳转到详情页
    ///
    /// 完成度达到门槛时提交跳转并返回快照；否则返回 `NotEligible`，状态保持不变。
    pub fn request_continue(&mut self) -> CoreResult<ProfileSnapshot> {
        if self.navigation_phase().is_navigated() {
            return Err(CoreError::AlreadyNavigated);
        }

        let progress = self.completion_progress();
        if !progress.meets_continue_threshold() {
            return Err(CoreError::NotEligible {
                progress: progress.points(),
                required: CompletionProgress::CONTINUE_THRESHOLD,
            });
        }

        self.navigation_requested = true;
        let snapshot = ProfileSnapshot::new(self.name.clone(), self.parsed_age());
        log::info!(
            "continue committed at {progress} (age {})",
            if snapshot.age().is_some() { "provided" } else { "not provided" }
        );
        Ok(snapshot)
    }

    /// 从详情页返回，重新进入编辑阶段
    ///
    /// 已经生成的快照不受影响，再次跳转会生成新的快照。
    pub fn return_to_editing(&mut self) {
        self.navigation_requested = false;
    }

    // ========== 只读访问 ==========

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age_text(&self) -> &str {
        &self.age_text
    }

    /// 按字段读取文本
    pub fn text(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Age => &self.age_text,
        }
    }

    pub fn is_verified(&self) -> bool {
        self.is_verified
    }

    pub fn focused_field(&self) -> FocusedField {
        self.focused_field
    }

    pub fn navigation_requested(&self) -> bool {
        self.navigation_requested
    }

    /// 当前导航阶段
    pub fn navigation_phase(&self) -> NavigationPhase {
        if self.navigation_requested {
            NavigationPhase::Navigated
        } else {
            NavigationPhase::Editing
        }
    }

    /// 问候语
    pub fn greeting(&self) -> String {
        greeting(&self.name)
    }

    /// 解析后的年龄
    pub fn parsed_age(&self) -> Option<i64> {
        parsed_age(&self.age_text)
    }

    /// 资料完成度
    pub fn completion_progress(&self) -> CompletionProgress {
        completion_progress(&self.name, &self.age_text, self.is_verified)
    }

    /// Continue 按钮是否可用
    pub fn continue_enabled(&self) -> bool {
        self.completion_progress().meets_continue_threshold()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::filled_form;

    #[test]
    fn new_form_is_empty() {
        let form = ProfileFormState::new();
        assert_eq!(form.name(), "");
        assert_eq!(form.age_text(), "");
        assert!(!form.is_verified());
        assert_eq!(form.focused_field(), FocusedField::None);
        assert_eq!(form.navigation_phase(), NavigationPhase::Editing);
        assert_eq!(form.greeting(), "Welcome!!");
    }

    #[test]
    fn set_age_text_accepts_non_numeric() {
        let mut form = ProfileFormState::new();
        form.set_age_text("abc");
        assert_eq!(form.age_text(), "abc");
        assert_eq!(form.parsed_age(), None);
        assert_eq!(form.completion_progress().points(), 33);
    }

    #[test]
    fn toggle_verified_twice_restores_state() {
        let mut form = ProfileFormState::new();
        form.toggle_verified();
        assert!(form.is_verified());
        form.toggle_verified();
        assert!(!form.is_verified());
    }

    #[test]
    fn submit_from_name_without_focus_is_noop() {
        let mut form = ProfileFormState::new();
        form.submit_from_name();
        assert_eq!(form.focused_field(), FocusedField::None);
    }

    #[test]
    fn submit_from_name_moves_to_age() {
        let mut form = ProfileFormState::new();
        form.focus(FormField::Name);
        form.submit_from_name();
        assert_eq!(form.focused_field(), FocusedField::Age);
    }

    #[test]
    fn submit_from_age_clears_focus() {
        let mut form = ProfileFormState::new();
        form.focus(FormField::Age);
        form.submit_from_age();
        assert_eq!(form.focused_field(), FocusedField::None);
    }

    #[test]
    fn submit_from_age_ignored_when_name_focused() {
        let mut form = ProfileFormState::new();
        form.focus(FormField::Name);
        form.submit_from_age();
        assert_eq!(form.focused_field(), FocusedField::Name);
    }

    #[test]
    fn focus_does_not_touch_fields() {
        let mut form = filled_form("Ann", "30", true);
        let before = form.clone();
        form.focus(FormField::Age);
        form.clear_focus();
        assert_eq!(form, before);
    }

    #[test]
    fn continue_rejected_below_threshold() {
        let mut form = filled_form("Ann", "", true);
        // 0.67 ≥ 0.66，认证可以替代年龄
        assert!(form.request_continue().is_ok());

        let mut form = filled_form("Ann", "", false);
        let before = form.clone();
        let err = form.request_continue().unwrap_err();
        assert_eq!(
            err,
            CoreError::NotEligible {
                progress: 33,
                required: 66
            }
        );
        assert_eq!(form, before);
    }

    #[test]
    fn continue_produces_snapshot() {
        let mut form = filled_form("Ann", "30", false);
        let snapshot = form.request_continue().unwrap();
        assert_eq!(snapshot, ProfileSnapshot::new("Ann", Some(30)));
        assert!(form.navigation_requested());
        assert_eq!(form.navigation_phase(), NavigationPhase::Navigated);
    }

    #[test]
    fn continue_twice_is_rejected() {
        let mut form = filled_form("Ann", "30", false);
        form.request_continue().unwrap();
        assert_eq!(form.request_continue(), Err(CoreError::AlreadyNavigated));
    }

    #[test]
    fn return_to_editing_allows_new_snapshot() {
        let mut form = filled_form("Ann", "30", false);
        let first = form.request_continue().unwrap();

        form.return_to_editing();
        form.set_name("Bob");
        let second = form.request_continue().unwrap();

        assert_eq!(first.name(), "Ann");
        assert_eq!(second.name(), "Bob");
    }

    #[test]
    fn snapshot_keeps_unparsable_age_as_absent() {
        let mut form = filled_form("Ann", "thirty", false);
        let snapshot = form.request_continue().unwrap();
        assert_eq!(snapshot.age(), None);
    }

    #[test]
    fn text_accessors_follow_field() {
        let mut form = ProfileFormState::new();
        form.set_text(FormField::Name, "Ann");
        form.set_text(FormField::Age, "30");
        assert_eq!(form.text(FormField::Name), "Ann");
        assert_eq!(form.text(FormField::Age), "30");
    }
}
