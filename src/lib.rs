// Core modules
pub mod api;
pub mod config;
pub mod defaults;
pub mod logging;
pub mod models;
pub mod storage;
pub mod transfer;
pub mod validation;

pub use api::ApiResult;
pub use config::ThemeStoreConfig;
pub use models::theme::{NewTheme, Theme, ThemePatch};
pub use storage::ThemeStore;
