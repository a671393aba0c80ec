use once_cell::sync::Lazy;

use crate::models::theme::{NewTheme, PrimaryColors};

fn seed(name: &str, description: &str, author: &str, colors: [&str; 3]) -> NewTheme {
    NewTheme {
        name: name.to_string(),
        description: description.to_string(),
        author: author.to_string(),
        primary: PrimaryColors {
            dark: colors[0].to_string(),
            light: colors[1].to_string(),
            subtle: colors[2].to_string(),
        },
        button: None,
    }
}

/// 内置的默认主题，按固定顺序，仅用于首次启动与重置时的播种
pub static DEFAULT_THEMES: Lazy<Vec<NewTheme>> = Lazy::new(|| {
    vec![
        seed(
            "Default",
            "The standard dark theme",
            "theme-vault",
            ["#25272d", "#353942", "#2f323a"],
        ),
        seed(
            "Dark Gray",
            "For hackers who like their themes as dark as their intentions",
            "bebiks",
            ["#262626", "#3a3a3a", "#303030"],
        ),
        seed(
            "Even Darker",
            "So dark, you might lose your mouse cursor",
            "bebiks",
            ["#000000", "#121111", "#151414"],
        ),
        seed(
            "Coffee Stain",
            "A dark theme inspired by your favorite brew",
            "bebiks",
            ["#2e241f", "#4d3e32", "#3a3027"],
        ),
        seed(
            "Ocean Blue",
            "For when you want your screen to look like a fish tank",
            "bebiks",
            ["#1a2b3c", "#3a5a7a", "#2c4a6a"],
        ),
        seed(
            "Forest Green",
            "Perfect for pretending you're outside while testing indoors",
            "bebiks",
            ["#1e3a23", "#3c7a4d", "#2c5a3d"],
        ),
        seed(
            "Sunset Orange",
            "A proxy, but make it pumpkin spice",
            "bebiks",
            ["#3a2a1a", "#7a5a3a", "#5a4a2a"],
        ),
        seed(
            "Lavender",
            "For researchers who want their tools to smell like a fancy soap shop",
            "bebiks",
            ["#2a1a3a", "#5a3a7a", "#4a2a5a"],
        ),
    ]
});
