//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，不修改任何状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主布局：标题栏 + 页面 + 状态栏
//!         mod components;     // 通用组件（状态栏）
//!         mod pages;          // 各页面（资料设置、资料详情）
//!         pub mod theme;      // 主题和样式
//!
//!     每一轮主循环都会调用 render() 整屏重绘，
//!     派生值（问候语、完成度、Continue 是否可用）都在渲染时从 form 现算。
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
