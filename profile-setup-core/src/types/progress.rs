//! 资料完成度类型
//!
//! 完成度以整数百分点保存，门槛比较因此是精确的整数比较，
//! 需要 [0, 1] 区间的小数时再通过 `fraction()` 换算。

use std::fmt;

/// 资料完成度（0–100 百分点）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CompletionProgress(u8);

impl CompletionProgress {
    /// 填写姓名贡献的百分点
    pub const NAME_WEIGHT: u8 = 33;
    /// 填写年龄贡献的百分点
    pub const AGE_WEIGHT: u8 = 33;
    /// 完成认证贡献的百分点
    pub const VERIFIED_WEIGHT: u8 = 34;
    /// 允许 Continue 的最低百分点
    pub const CONTINUE_THRESHOLD: u8 = 66;

    /// 空资料
    pub const EMPTY: Self = Self(0);
    /// 全部完成
    pub const COMPLETE: Self = Self(100);

    /// 根据三个布尔条件计算完成度
    #[must_use]
    pub fn from_predicates(has_name: bool, has_age: bool, is_verified: bool) -> Self {
        let mut points = 0u8;
        if has_name {
            points += Self::NAME_WEIGHT;
        }
        if has_age {
            points += Self::AGE_WEIGHT;
        }
        if is_verified {
            points += Self::VERIFIED_WEIGHT;
        }
        Self(points.min(100))
    }

    /// 百分点数值
    #[must_use]
    pub fn points(self) -> u8 {
        self.0
    }

    /// [0, 1] 区间的小数形式，供进度条使用
    #[must_use]
    pub fn fraction(self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// 是否达到 Continue 门槛
    #[must_use]
    pub fn meets_continue_threshold(self) -> bool {
        self.0 >= Self::CONTINUE_THRESHOLD
    }
}

impl fmt::Display for CompletionProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
