//!
//! src/backend/mod.rs
//! Backend 层：平台服务
//!
//! Backend 层与 UI 完全解耦，提供表单状态机之外的平台能力。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置服务（JSON 文件）
//!         mod feedback;           // 终端反馈（日志 / 响铃）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、配置服务（ConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/config_service.rs 中定义：
//!
//!         AppConfig { theme, language, log_level, terminal_bell }
//!
//!         LocalConfigService 读写 ~/.config/profile-setup-tui/config.json
//!             - 文件不存在：返回默认配置
//!             - 字段缺失：该字段使用默认值
//!             - 文件损坏：返回 SerializationError
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、终端反馈（TerminalFeedback）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     实现 profile-setup-core 的 FeedbackSink trait：
//!         - Light   切换认证状态时触发
//!         - Medium  点击 Continue 时触发（可选响铃）
//!

mod config_service;
mod feedback;

pub use config_service::{get_config_dir, AppConfig, ConfigService, LocalConfigService};
pub use feedback::TerminalFeedback;
