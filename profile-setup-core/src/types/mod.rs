//! 类型定义模块

mod feedback;
mod field;
mod navigation;
mod progress;
mod snapshot;

pub use feedback::HapticStyle;
pub use field::{FocusedField, FormField};
pub use navigation::NavigationPhase;
pub use progress::CompletionProgress;
pub use snapshot::ProfileSnapshot;
