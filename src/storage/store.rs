use anyhow::Result;
use std::collections::HashMap;
use tracing::{debug, info};

use super::providers::sqlite::SqliteThemeProvider;
use super::providers::ThemeProvider;
use crate::config::ThemeStoreConfig;
use crate::defaults::DEFAULT_THEMES;
use crate::models::theme::{NewTheme, Theme};

/// 主题存储
///
/// 在持久化提供商之上维护一个 id → 主题的内存索引。索引只是持久表的缓存，
/// 不是事实来源：`get_themes` 会用全量拉取整体重建索引，点操作
/// （add/update/remove）增量修补索引。两次全量拉取之间若有外部直接改表，
/// 索引可能过期——对本地单用户工具这是接受的限制。
pub struct ThemeStore {
    provider: Box<dyn ThemeProvider>,
    cache: HashMap<String, Theme>,
}

impl ThemeStore {
    /// 按配置打开 SQLite 存储；首次建表时播种默认主题
    pub async fn open(config: &ThemeStoreConfig) -> Result<Self> {
        let (provider, created) =
            SqliteThemeProvider::initialize(&config.database_url, config.table_name.clone())
                .await?;

        let mut store = Self::with_provider(Box::new(provider));
        if created {
            store.reset_themes().await?;
            info!("Seeded default themes on first run");
        }

        Ok(store)
    }

    /// 用任意提供商组装存储（组合根与测试入口）
    pub fn with_provider(provider: Box<dyn ThemeProvider>) -> Self {
        Self {
            provider,
            cache: HashMap::new(),
        }
    }

    /// 全量拉取并整体重建内存索引
    pub async fn get_themes(&mut self) -> Result<Vec<Theme>> {
        let themes = self.provider.list_themes().await?;
        self.cache = themes
            .iter()
            .map(|theme| (theme.id.clone(), theme.clone()))
            .collect();
        Ok(themes)
    }

    /// 单条读取直接走存储，绕过缓存以避免过期
    pub async fn get_theme(&self, id: &str) -> Result<Option<Theme>> {
        self.provider.get_theme(id).await
    }

    /// 仅查内存索引；距上次 `get_themes` 之后的外部改动可能看不到
    pub fn exists_id(&self, id: &str) -> bool {
        self.cache.contains_key(id)
    }

    /// 创建主题并修补索引，返回带新 id 的完整主题
    pub async fn add_theme(&mut self, theme: NewTheme) -> Result<Theme> {
        let id = self.provider.create_theme(&theme).await?;
        let theme = theme.with_id(id);
        self.cache.insert(theme.id.clone(), theme.clone());
        Ok(theme)
    }

    /// 覆写主题并修补索引；调用方需已确认该 id 存在
    pub async fn update_theme(&mut self, theme: Theme) -> Result<Theme> {
        self.provider.update_theme(&theme).await?;
        self.cache.insert(theme.id.clone(), theme.clone());
        Ok(theme)
    }

    /// 删除主题并修补索引
    pub async fn remove_theme(&mut self, id: &str) -> Result<()> {
        self.provider.delete_theme(id).await?;
        self.cache.remove(id);
        Ok(())
    }

    /// 清空后按固定顺序重新播种默认主题，每个主题都拿到新生成的 id
    pub async fn reset_themes(&mut self) -> Result<()> {
        self.clear().await?;

        for theme in DEFAULT_THEMES.iter() {
            self.add_theme(theme.clone()).await?;
        }

        debug!("Reset store to {} default themes", DEFAULT_THEMES.len());
        Ok(())
    }

    /// 清空持久表与索引，不重新播种
    pub async fn clear(&mut self) -> Result<()> {
        self.provider.clear_themes().await?;
        self.cache.clear();
        Ok(())
    }
}
