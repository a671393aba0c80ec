use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// 主题存储配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeStoreConfig {
    /// SQLite 连接串
    pub database_url: String,
    /// 主题表名
    pub table_name: String,
}

impl Default for ThemeStoreConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite://./themes.db?mode=rwc".to_string(),
            table_name: "themes".to_string(),
        }
    }
}

impl ThemeStoreConfig {
    /// 默认配置，叠加环境变量覆盖
    pub fn new() -> Self {
        let mut config = Self::default();
        config.load_from_env();
        config
    }

    /// 从环境变量覆盖配置
    pub fn load_from_env(&mut self) {
        if let Ok(url) = env::var("THEME_VAULT_DB_URL") {
            self.database_url = url;
        }
        if let Ok(table) = env::var("THEME_VAULT_TABLE") {
            self.table_name = table;
        }
    }

    /// 从 TOML 配置文件加载
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("failed to read config file {}", path.as_ref().display()))?;
        toml::from_str(&content).context("invalid theme store config")
    }
}
