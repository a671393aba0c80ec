use anyhow::{Context, Result};
use async_trait::async_trait;
use rand::distributions::Alphanumeric;
use rand::Rng;
use sqlx::sqlite::{SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use std::time::Instant;
use tracing::{debug, info};

use super::ThemeProvider;
use crate::models::theme::{ButtonColors, ButtonOverrides, NewTheme, PrimaryColors, Theme};

/// 主题 id 长度；字符集为 [0-9A-Za-z]，62^12 的空间对本地单用户表足够
const THEME_ID_LEN: usize = 12;

/// 生成随机的短 base62 主题 id
fn generate_theme_id() -> String {
    let mut rng = rand::thread_rng();
    (0..THEME_ID_LEN)
        .map(|_| rng.sample(Alphanumeric) as char)
        .collect()
}

/// SQLite 主题存储提供商
pub struct SqliteThemeProvider {
    pool: SqlitePool,
    table_name: String,
}

impl SqliteThemeProvider {
    /// 打开数据库并确保主题表存在
    ///
    /// 返回值的布尔位表示本次调用是否执行了首次建表，
    /// 调用方据此区分全新安装与已有数据。
    pub async fn initialize(
        database_url: &str,
        table_name: impl Into<String>,
    ) -> Result<(Self, bool)> {
        let table_name = table_name.into();

        // 单用户工具：单连接即可，也让内存库在测试里行为可预期
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(database_url)
            .await
            .with_context(|| format!("failed to open theme database at {}", database_url))?;

        let provider = Self { pool, table_name };
        let created = provider.setup_table().await?;

        Ok((provider, created))
    }

    /// 建表（缺失时），返回是否执行了建表
    async fn setup_table(&self) -> Result<bool> {
        let exists: Option<(String,)> =
            sqlx::query_as("SELECT name FROM sqlite_master WHERE type='table' AND name = ?")
                .bind(&self.table_name)
                .fetch_optional(&self.pool)
                .await?;

        if exists.is_some() {
            debug!("Theme table '{}' already present", self.table_name);
            return Ok(false);
        }

        let create_table_sql = format!(
            r#"
            CREATE TABLE {} (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                description TEXT NOT NULL,
                author TEXT NOT NULL,
                primary_dark TEXT NOT NULL,
                primary_light TEXT NOT NULL,
                primary_subtle TEXT NOT NULL,
                button_primary_bg TEXT,
                button_primary_text TEXT,
                button_secondary_bg TEXT,
                button_secondary_text TEXT,
                button_tertiary_bg TEXT,
                button_tertiary_text TEXT
            )
            "#,
            self.table_name
        );

        sqlx::query(&create_table_sql).execute(&self.pool).await?;

        info!("Theme table '{}' created", self.table_name);
        Ok(true)
    }

    /// 从行数据还原主题实体
    ///
    /// 按钮列为 NULL 时还原为缺省而不是空字符串；三类按钮都缺省时
    /// 整个 `button` 为缺省。
    fn theme_from_row(row: &SqliteRow) -> Result<Theme> {
        let variant = |bg: &str, text: &str| -> Result<Option<ButtonColors>> {
            let bg: Option<String> = row.try_get(bg)?;
            let text: Option<String> = row.try_get(text)?;
            Ok(bg.zip(text).map(|(bg, text)| ButtonColors { bg, text }))
        };

        let button = ButtonOverrides {
            primary: variant("button_primary_bg", "button_primary_text")?,
            secondary: variant("button_secondary_bg", "button_secondary_text")?,
            tertiary: variant("button_tertiary_bg", "button_tertiary_text")?,
        };

        Ok(Theme {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            author: row.try_get("author")?,
            primary: PrimaryColors {
                dark: row.try_get("primary_dark")?,
                light: row.try_get("primary_light")?,
                subtle: row.try_get("primary_subtle")?,
            },
            button: if button.is_empty() { None } else { Some(button) },
        })
    }

    fn button_column(button: &Option<ButtonOverrides>, pick: fn(&ButtonOverrides) -> &Option<ButtonColors>, text: bool) -> Option<String> {
        button
            .as_ref()
            .and_then(|b| pick(b).as_ref())
            .map(|c| if text { c.text.clone() } else { c.bg.clone() })
    }

    /// 按钮列的绑定值，顺序与表定义一致
    fn button_columns(button: &Option<ButtonOverrides>) -> [Option<String>; 6] {
        [
            Self::button_column(button, |b| &b.primary, false),
            Self::button_column(button, |b| &b.primary, true),
            Self::button_column(button, |b| &b.secondary, false),
            Self::button_column(button, |b| &b.secondary, true),
            Self::button_column(button, |b| &b.tertiary, false),
            Self::button_column(button, |b| &b.tertiary, true),
        ]
    }
}

#[async_trait]
impl ThemeProvider for SqliteThemeProvider {
    async fn create_theme(&mut self, theme: &NewTheme) -> Result<String> {
        let start = Instant::now();
        let id = generate_theme_id();

        let insert_sql = format!(
            r#"
            INSERT INTO {} (
                id, name, description, author,
                primary_dark, primary_light, primary_subtle,
                button_primary_bg, button_primary_text,
                button_secondary_bg, button_secondary_text,
                button_tertiary_bg, button_tertiary_text
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
            self.table_name
        );

        let mut query = sqlx::query(&insert_sql)
            .bind(&id)
            .bind(&theme.name)
            .bind(&theme.description)
            .bind(&theme.author)
            .bind(&theme.primary.dark)
            .bind(&theme.primary.light)
            .bind(&theme.primary.subtle);
        for column in Self::button_columns(&theme.button) {
            query = query.bind(column);
        }
        query.execute(&self.pool).await?;

        debug!("Created theme {} in {:?}", id, start.elapsed());
        Ok(id)
    }

    async fn update_theme(&mut self, theme: &Theme) -> Result<()> {
        let start = Instant::now();

        let update_sql = format!(
            r#"
            UPDATE {} SET
                name = ?, description = ?, author = ?,
                primary_dark = ?, primary_light = ?, primary_subtle = ?,
                button_primary_bg = ?, button_primary_text = ?,
                button_secondary_bg = ?, button_secondary_text = ?,
                button_tertiary_bg = ?, button_tertiary_text = ?
            WHERE id = ?
            "#,
            self.table_name
        );

        let mut query = sqlx::query(&update_sql)
            .bind(&theme.name)
            .bind(&theme.description)
            .bind(&theme.author)
            .bind(&theme.primary.dark)
            .bind(&theme.primary.light)
            .bind(&theme.primary.subtle);
        for column in Self::button_columns(&theme.button) {
            query = query.bind(column);
        }
        let result = query.bind(&theme.id).execute(&self.pool).await?;

        // id 不存在时 rows_affected 为 0，按约定不视为错误
        debug!(
            "Updated theme {} ({} rows) in {:?}",
            theme.id,
            result.rows_affected(),
            start.elapsed()
        );
        Ok(())
    }

    async fn delete_theme(&mut self, id: &str) -> Result<()> {
        let start = Instant::now();

        let delete_sql = format!("DELETE FROM {} WHERE id = ?", self.table_name);
        sqlx::query(&delete_sql).bind(id).execute(&self.pool).await?;

        debug!("Deleted theme {} in {:?}", id, start.elapsed());
        Ok(())
    }

    async fn get_theme(&self, id: &str) -> Result<Option<Theme>> {
        let select_sql = format!("SELECT * FROM {} WHERE id = ?", self.table_name);

        let row = sqlx::query(&select_sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(Self::theme_from_row(&row)?)),
            None => {
                debug!("Theme {} not found", id);
                Ok(None)
            }
        }
    }

    async fn list_themes(&self) -> Result<Vec<Theme>> {
        let start = Instant::now();

        let select_sql = format!("SELECT * FROM {}", self.table_name);
        let rows = sqlx::query(&select_sql).fetch_all(&self.pool).await?;

        let mut themes = Vec::with_capacity(rows.len());
        for row in &rows {
            themes.push(Self::theme_from_row(row)?);
        }

        debug!("Fetched {} themes in {:?}", themes.len(), start.elapsed());
        Ok(themes)
    }

    async fn clear_themes(&mut self) -> Result<()> {
        let clear_sql = format!("DELETE FROM {}", self.table_name);
        sqlx::query(&clear_sql).execute(&self.pool).await?;

        debug!("Cleared theme table '{}'", self.table_name);
        Ok(())
    }
}
