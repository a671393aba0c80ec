pub mod providers;
pub mod store;

pub use providers::sqlite::SqliteThemeProvider;
pub use providers::ThemeProvider;
pub use store::ThemeStore;
