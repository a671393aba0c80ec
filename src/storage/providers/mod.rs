use anyhow::Result;
use async_trait::async_trait;

use crate::models::theme::{NewTheme, Theme};

pub mod sqlite;

/// 主题持久化提供商 trait
///
/// 实现方负责单表的持久化 CRUD。所有方法都假定初始化已经完成，
/// 存储不可达属于不可恢复错误，直接向上传播。
#[async_trait]
pub trait ThemeProvider: Send + Sync {
    /// 分配新 id 并插入一行，返回分配的 id
    async fn create_theme(&mut self, theme: &NewTheme) -> Result<String>;

    /// 按 `theme.id` 覆盖整行；id 不存在时为 no-op
    async fn update_theme(&mut self, theme: &Theme) -> Result<()>;

    /// 删除指定行；不存在时为 no-op
    async fn delete_theme(&mut self, id: &str) -> Result<()>;

    /// 返回匹配的主题，缺失时返回 None 而不是错误
    async fn get_theme(&self, id: &str) -> Result<Option<Theme>>;

    /// 按存储顺序返回全部主题（不保证排序）
    async fn list_themes(&self) -> Result<Vec<Theme>>;

    /// 清空整张表
    async fn clear_themes(&mut self) -> Result<()>;
}
