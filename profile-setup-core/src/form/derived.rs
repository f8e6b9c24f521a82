//! 派生值计算
//!
//! 全部是纯函数，每次读取时重新计算，不做缓存。

use crate::types::CompletionProgress;

/// 问候语：空姓名显示 "Welcome!!"，否则显示 "Welcome, {name}"
#[must_use]
pub fn greeting(name: &str) -> String {
    if name.is_empty() {
        "Welcome!!".to_string()
    } else {
        format!("Welcome, {name}")
    }
}

/// 将年龄文本解析为整数，无法解析时返回 `None`
///
/// 允许前导符号（不检查非负），不接受首尾空白，超出 `i64` 范围视为无法解析。
#[must_use]
pub fn parsed_age(age_text: &str) -> Option<i64> {
    age_text.parse::<i64>().ok()
}

/// 资料完成度，只取决于三个条件，与年龄文本能否解析无关
#[must_use]
pub fn completion_progress(name: &str, age_text: &str, is_verified: bool) -> CompletionProgress {
    CompletionProgress::from_predicates(!name.is_empty(), !age_text.is_empty(), is_verified)
}
