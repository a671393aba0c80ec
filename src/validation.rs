use thiserror::Error;

use crate::models::theme::NewTheme;

/// 字段校验上限
pub const MAX_NAME_LEN: usize = 50;
pub const MAX_AUTHOR_LEN: usize = 50;
pub const MAX_DESCRIPTION_LEN: usize = 300;

/// 主题字段校验错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Theme name is required")]
    NameRequired,

    #[error("Theme author is required")]
    AuthorRequired,

    #[error("Theme description is required")]
    DescriptionRequired,

    #[error("Theme author is too long")]
    AuthorTooLong,

    #[error("Theme name is too long")]
    NameTooLong,

    #[error("Theme description is too long")]
    DescriptionTooLong,
}

/// 校验候选主题的字段，按固定顺序检查并在第一个失败处短路
///
/// 长度按 Unicode 标量值计数。`primary`/`button` 的内容不在此处校验，
/// 类型边界已经保证了它们的结构。
pub fn validate_theme(theme: &NewTheme) -> Result<(), ValidationError> {
    if theme.name.is_empty() {
        return Err(ValidationError::NameRequired);
    }

    if theme.author.is_empty() {
        return Err(ValidationError::AuthorRequired);
    }

    if theme.description.is_empty() {
        return Err(ValidationError::DescriptionRequired);
    }

    if theme.author.chars().count() > MAX_AUTHOR_LEN {
        return Err(ValidationError::AuthorTooLong);
    }

    if theme.name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::NameTooLong);
    }

    if theme.description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::DescriptionTooLong);
    }

    Ok(())
}
