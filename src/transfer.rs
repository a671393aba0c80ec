use anyhow::{Context, Result};
use std::path::Path;

use crate::models::theme::{NewTheme, Theme};

/// 将主题序列化为可分享的 JSON 文档（id 被剥离）
pub fn export_theme(theme: &Theme) -> Result<String> {
    serde_json::to_string_pretty(&theme.without_id()).context("failed to serialize theme")
}

/// 解析分享的 JSON 文档
///
/// 文档里偶然带上的 `id` 一律丢弃，不予信任；重新入库时由存储层分配新 id。
pub fn import_theme(document: &str) -> Result<NewTheme> {
    serde_json::from_str(document).context("invalid theme document")
}

/// 把主题导出到文件
pub async fn export_theme_to_file(theme: &Theme, path: impl AsRef<Path>) -> Result<()> {
    let document = export_theme(theme)?;
    tokio::fs::write(path.as_ref(), document)
        .await
        .with_context(|| format!("failed to write theme file {}", path.as_ref().display()))
}

/// 从文件导入主题
pub async fn import_theme_from_file(path: impl AsRef<Path>) -> Result<NewTheme> {
    let document = tokio::fs::read_to_string(path.as_ref())
        .await
        .with_context(|| format!("failed to read theme file {}", path.as_ref().display()))?;
    import_theme(&document)
}
