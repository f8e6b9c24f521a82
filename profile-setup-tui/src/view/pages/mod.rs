//! 页面视图

pub mod profile_details;
pub mod profile_setup;
