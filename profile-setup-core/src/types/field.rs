//! 表单字段与焦点类型定义

use serde::{Deserialize, Serialize};

/// 可输入的表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    /// 姓名输入框
    Name,
    /// 年龄输入框（仅数字键盘）
    Age,
}

impl FormField {
    /// 按显示顺序列出所有字段
    pub fn all() -> &'static [FormField] {
        &[FormField::Name, FormField::Age]
    }

    /// 输入面是否只接受数字
    #[must_use]
    pub fn is_numeric(self) -> bool {
        matches!(self, FormField::Age)
    }
}

/// 当前获得焦点的字段（同一时刻至多一个）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FocusedField {
    /// 没有字段获得焦点（键盘收起）
    #[default]
    None,
    /// 姓名输入框
    Name,
    /// 年龄输入框
    Age,
}

impl FocusedField {
    /// 获取对应的表单字段
    #[must_use]
    pub fn field(self) -> Option<FormField> {
        match self {
            FocusedField::None => None,
            FocusedField::Name => Some(FormField::Name),
            FocusedField::Age => Some(FormField::Age),
        }
    }

    /// 是否有字段获得焦点
    #[must_use]
    pub fn is_some(self) -> bool {
        !matches!(self, FocusedField::None)
    }

    /// 是否是指定字段获得焦点
    #[must_use]
    pub fn is(self, field: FormField) -> bool {
        self.field() == Some(field)
    }
}

impl From<FormField> for FocusedField {
    fn from(field: FormField) -> Self {
        match field {
            FormField::Name => FocusedField::Name,
            FormField::Age => FocusedField::Age,
        }
    }
}
