//! Profile Setup TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)，表单状态机来自 profile-setup-core
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与反馈 (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     LocalConfigService::load()  // 读取配置（主题、语言、日志级别）
//!     init_logging()              // 日志写入配置目录，stdout 留给终端 UI，失败不致命
//!     save_if_missing()           // 首次运行写出默认配置，失败不致命
//!     init_terminal()             // 初始化终端
//!     model::App::new()           // 创建 APP 实例
//!     app::run()                  // 运行 app.rs 主循环
//!     restore_terminal()          // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod event;
mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;

use backend::{get_config_dir, ConfigService, LocalConfigService, TerminalFeedback};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 加载配置
    let config_service = LocalConfigService::new();
    let config = config_service.load()?;

    // 2. 初始化日志，失败时不写日志文件继续运行
    if let Err(e) = init_logging(&get_config_dir(), &config.log_level) {
        eprintln!("warning: file logging disabled: {e:#}");
    }
    log::info!("Starting Profile Setup TUI");

    // 首次运行时写出默认配置，目录不可写时沿用内存中的配置
    config_service.save_if_missing(&config);

    // 3. 应用主题和语言
    view::theme::set_theme(config.theme);
    i18n::set_language(config.language());
    log::info!(
        "theme {:?}, language {}",
        config.theme,
        i18n::current_language().display_name()
    );

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 创建应用实例
    let mut app = model::App::new(Box::new(TerminalFeedback::new(config.terminal_bell)));

    // 6. 运行主循环
    let result = app::run(&mut terminal, &mut app);

    // 7. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        log::error!("Exited with error: {e:#}");
    } else {
        log::info!("Exited normally");
    }

    // 8. 返回结果
    result
}
