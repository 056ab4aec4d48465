//! 配置服务

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::state::Theme;

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub theme: Theme,
    pub language: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            language: "en-US".to_string(),
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地配置服务
///
/// 存储位置：~/.config/house-predictor/config.json
pub struct LocalConfigService;

impl LocalConfigService {
    fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Cannot locate the user config directory")?;
        Ok(dir.join("house-predictor").join("config.json"))
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        let path = Self::config_path()?;
        // 首次启动没有配置文件，直接用默认值
        if !path.exists() {
            return Ok(AppConfig::default());
        }
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&raw)
            .with_context(|| format!("Malformed config file {}", path.display()))?;
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }
        let raw = serde_json::to_string_pretty(config)?;
        fs::write(&path, raw)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }
}
