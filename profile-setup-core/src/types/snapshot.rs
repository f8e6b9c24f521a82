//! 资料快照类型定义

use serde::{Deserialize, Serialize};

/// 跳转到详情页时生成的资料快照
///
/// 在 Continue 成功的瞬间由当时的姓名和解析后的年龄构造，之后不可变，
/// 表单的后续编辑不会影响已经生成的快照。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSnapshot {
    name: String,
    age: Option<i64>,
}

impl ProfileSnapshot {
    /// 创建新的快照
    #[must_use]
    pub fn new(name: impl Into<String>, age: Option<i64>) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// 原始姓名（可能为空）
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 解析后的年龄
    #[must_use]
    pub fn age(&self) -> Option<i64> {
        self.age
    }

    /// 详情页展示用的姓名，空姓名显示为 "N/A"
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "N/A"
        } else {
            &self.name
        }
    }
}
