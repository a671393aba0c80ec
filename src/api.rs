use anyhow::Result;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::theme::{NewTheme, Theme, ThemePatch};
use crate::storage::ThemeStore;
use crate::validation::{validate_theme, ValidationError};

/// API 层的预期失败：引用不存在的主题或字段校验不通过
///
/// 这两类失败总是转换成 [`ApiResult::Error`]，不会作为 `Err` 穿过 API 边界；
/// 存储不可用等运行时故障则通过外层 `anyhow::Result` 向上传播。
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Theme {0} not found")]
    NotFound(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// 统一的请求结果，成功携带值，失败携带用户可读的错误信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ApiResult<T> {
    Ok { value: T },
    Error { error: String },
}

impl<T> ApiResult<T> {
    pub fn ok(value: T) -> Self {
        ApiResult::Ok { value }
    }

    pub fn error(err: impl std::fmt::Display) -> Self {
        ApiResult::Error {
            error: err.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ApiResult::Error { .. })
    }

    /// 成功时取出值
    pub fn into_value(self) -> Option<T> {
        match self {
            ApiResult::Ok { value } => Some(value),
            ApiResult::Error { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ApiResult::Ok { .. } => None,
            ApiResult::Error { error } => Some(error),
        }
    }
}

/// 返回全部主题
pub async fn get_themes(store: &mut ThemeStore) -> Result<ApiResult<Vec<Theme>>> {
    Ok(ApiResult::ok(store.get_themes().await?))
}

/// 返回单个主题，缺失时报 not found
pub async fn get_theme(store: &ThemeStore, theme_id: &str) -> Result<ApiResult<Theme>> {
    match store.get_theme(theme_id).await? {
        Some(theme) => Ok(ApiResult::ok(theme)),
        None => Ok(ApiResult::error(ApiError::NotFound(theme_id.to_string()))),
    }
}

/// 校验并创建主题，成功后返回刷新过的完整列表
///
/// 校验失败在任何存储调用之前返回，坏输入不会碰到存储层。
pub async fn add_theme(store: &mut ThemeStore, new_theme: NewTheme) -> Result<ApiResult<Vec<Theme>>> {
    if let Err(err) = validate_theme(&new_theme) {
        return Ok(ApiResult::error(ApiError::Validation(err)));
    }

    let theme = store.add_theme(new_theme).await?;
    debug!("Added theme {}", theme.id);

    Ok(ApiResult::ok(store.get_themes().await?))
}

/// 将补丁合并到已有主题上，校验合并结果后持久化，返回完整列表
pub async fn update_theme(
    store: &mut ThemeStore,
    theme_id: &str,
    patch: ThemePatch,
) -> Result<ApiResult<Vec<Theme>>> {
    let existing = match store.get_theme(theme_id).await? {
        Some(theme) => theme,
        None => return Ok(ApiResult::error(ApiError::NotFound(theme_id.to_string()))),
    };

    let merged = existing.merged_with(&patch);
    if let Err(err) = validate_theme(&merged.without_id()) {
        return Ok(ApiResult::error(ApiError::Validation(err)));
    }

    store.update_theme(merged).await?;
    debug!("Updated theme {}", theme_id);

    Ok(ApiResult::ok(store.get_themes().await?))
}

/// 确认存在后删除主题，返回完整列表
pub async fn remove_theme(store: &mut ThemeStore, theme_id: &str) -> Result<ApiResult<Vec<Theme>>> {
    if store.get_theme(theme_id).await?.is_none() {
        return Ok(ApiResult::error(ApiError::NotFound(theme_id.to_string())));
    }

    store.remove_theme(theme_id).await?;
    debug!("Removed theme {}", theme_id);

    Ok(ApiResult::ok(store.get_themes().await?))
}

/// 重置为默认主题集合，返回完整列表
pub async fn reset_themes(store: &mut ThemeStore) -> Result<ApiResult<Vec<Theme>>> {
    store.reset_themes().await?;
    get_themes(store).await
}
