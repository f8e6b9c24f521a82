//! 日志初始化
//!
//! stdout 被终端 UI 占用，日志写入配置目录下的文件。
//! 各模块使用 `log` 宏，记录经 tracing-log 桥接到 tracing-subscriber。

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日志文件名
const LOG_FILE: &str = "profile-setup.log";

/// 初始化日志
///
/// 优先使用 `RUST_LOG`，否则使用配置中的级别。
pub fn init_logging(dir: &Path, default_level: &str) -> Result<()> {
    fs::create_dir_all(dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .with(filter)
        .try_init()?;

    Ok(())
}
