//! 配置服务
//!
//! 使用 JSON 文件存储应用配置，文件不存在时使用默认配置。

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use profile_setup_core::CoreError;
use serde::{Deserialize, Serialize};

use crate::i18n::Language;
use crate::view::theme::Theme;

/// 配置文件名
const CONFIG_FILE: &str = "config.json";

/// 获取配置目录路径
pub fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("profile-setup-tui")
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// 界面主题
    pub theme: Theme,
    /// 界面语言代码（BCP 47）
    pub language: String,
    /// 未设置 RUST_LOG 时使用的日志级别
    pub log_level: String,
    /// 点击 Continue 时是否响铃
    pub terminal_bell: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            language: Language::EnUs.code().to_string(),
            log_level: "info".to_string(),
            terminal_bell: false,
        }
    }
}

impl AppConfig {
    /// 解析语言代码，未知代码回退到默认语言
    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_else(|| {
            log::warn!("Unknown language code {:?}, falling back to en-US", self.language);
            Language::default()
        })
    }
}

/// 配置服务 trait
pub trait ConfigService {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地配置服务
pub struct LocalConfigService {
    dir: PathBuf,
}

impl LocalConfigService {
    /// 使用默认配置目录
    pub fn new() -> Self {
        Self::with_dir(get_config_dir())
    }

    /// 使用指定目录
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// 配置文件路径
    pub fn config_path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE)
    }

    /// 首次运行时写出默认配置
    ///
    /// 配置文件是可选的，写入失败只记录警告。返回是否写出了文件。
    pub fn save_if_missing(&self, config: &AppConfig) -> bool {
        if self.config_path().exists() {
            return false;
        }

        match self.save(config) {
            Ok(()) => {
                log::info!("Wrote default config to {}", self.config_path().display());
                true
            }
            Err(e) => {
                log::warn!("Failed to write default config, continuing without it: {e:#}");
                false
            }
        }
    }

    /// 确保配置目录存在
    fn ensure_dir(dir: &Path) -> Result<(), CoreError> {
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| CoreError::StorageError(e.to_string()))?;
        }
        Ok(())
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        let path = self.config_path();

        if !path.exists() {
            return Ok(AppConfig::default());
        }

        let content =
            fs::read_to_string(&path).map_err(|e| CoreError::StorageError(e.to_string()))?;

        let config: AppConfig = serde_json::from_str(&content)
            .map_err(|e| CoreError::SerializationError(format!("{}: {e}", path.display())))?;

        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        Self::ensure_dir(&self.dir)?;

        let content = serde_json::to_string_pretty(config)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;

        fs::write(self.config_path(), content)
            .map_err(|e| CoreError::StorageError(e.to_string()))?;

        Ok(())
    }
}
