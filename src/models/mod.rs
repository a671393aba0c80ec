pub mod theme;

pub use theme::{ButtonColors, ButtonOverrides, NewTheme, PrimaryColors, Theme, ThemePatch};
