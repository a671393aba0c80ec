use tempfile::TempDir;

use theme_vault::api;
use theme_vault::defaults::DEFAULT_THEMES;
use theme_vault::models::theme::{ButtonColors, ButtonOverrides, NewTheme, PrimaryColors, ThemePatch};
use theme_vault::transfer;
use theme_vault::{ThemeStore, ThemeStoreConfig};

fn file_config(dir: &TempDir) -> ThemeStoreConfig {
    ThemeStoreConfig {
        database_url: format!(
            "sqlite://{}?mode=rwc",
            dir.path().join("themes.db").display()
        ),
        table_name: "themes".to_string(),
    }
}

fn dracula() -> NewTheme {
    NewTheme {
        name: "Dracula".to_string(),
        description: "d".to_string(),
        author: "x".to_string(),
        primary: PrimaryColors {
            dark: "#111".to_string(),
            light: "#222".to_string(),
            subtle: "#333".to_string(),
        },
        button: None,
    }
}

#[tokio::test]
async fn first_open_seeds_defaults_and_reopen_keeps_data() {
    let dir = TempDir::new().unwrap();
    let config = file_config(&dir);

    let mut store = ThemeStore::open(&config).await.unwrap();
    let themes = api::get_themes(&mut store).await.unwrap().into_value().unwrap();
    assert_eq!(themes.len(), DEFAULT_THEMES.len());
    let seeded_ids: Vec<String> = themes.iter().map(|t| t.id.clone()).collect();

    let custom = api::add_theme(&mut store, dracula())
        .await
        .unwrap()
        .into_value()
        .unwrap();
    assert_eq!(custom.len(), DEFAULT_THEMES.len() + 1);
    drop(store);

    // A second open must not reseed: same ids, custom theme still present
    let mut store = ThemeStore::open(&config).await.unwrap();
    let themes = api::get_themes(&mut store).await.unwrap().into_value().unwrap();
    assert_eq!(themes.len(), DEFAULT_THEMES.len() + 1);
    for id in &seeded_ids {
        assert!(themes.iter().any(|t| &t.id == id));
    }
    assert!(themes.iter().any(|t| t.name == "Dracula"));
}

#[tokio::test]
async fn add_get_update_remove_lifecycle() {
    let dir = TempDir::new().unwrap();
    let mut store = ThemeStore::open(&file_config(&dir)).await.unwrap();

    let themes = api::add_theme(&mut store, dracula())
        .await
        .unwrap()
        .into_value()
        .unwrap();
    let id = themes
        .iter()
        .find(|t| t.name == "Dracula")
        .unwrap()
        .id
        .clone();

    let fetched = api::get_theme(&store, &id).await.unwrap().into_value().unwrap();
    assert_eq!(fetched.without_id(), dracula());

    let patch = ThemePatch {
        description: Some("the darkest theme".to_string()),
        button: Some(ButtonOverrides {
            primary: Some(ButtonColors {
                bg: "#444".to_string(),
                text: "#555".to_string(),
            }),
            ..Default::default()
        }),
        ..Default::default()
    };
    let themes = api::update_theme(&mut store, &id, patch)
        .await
        .unwrap()
        .into_value()
        .unwrap();
    let updated = themes.iter().find(|t| t.id == id).unwrap();
    assert_eq!(updated.description, "the darkest theme");
    assert_eq!(updated.name, "Dracula");
    assert_eq!(updated.button.as_ref().unwrap().primary.as_ref().unwrap().bg, "#444");

    let themes = api::remove_theme(&mut store, &id)
        .await
        .unwrap()
        .into_value()
        .unwrap();
    assert!(themes.iter().all(|t| t.id != id));

    let result = api::get_theme(&store, &id).await.unwrap();
    assert_eq!(
        result.error_message(),
        Some(format!("Theme {} not found", id).as_str())
    );
}

#[tokio::test]
async fn reset_discards_edits_and_restores_the_default_set() {
    let dir = TempDir::new().unwrap();
    let mut store = ThemeStore::open(&file_config(&dir)).await.unwrap();

    let themes = api::add_theme(&mut store, dracula())
        .await
        .unwrap()
        .into_value()
        .unwrap();
    let custom_id = themes
        .iter()
        .find(|t| t.name == "Dracula")
        .unwrap()
        .id
        .clone();

    let themes = api::reset_themes(&mut store).await.unwrap().into_value().unwrap();
    assert_eq!(themes.len(), DEFAULT_THEMES.len());
    assert!(themes.iter().all(|t| t.id != custom_id));
    for (theme, seed) in themes.iter().zip(DEFAULT_THEMES.iter()) {
        assert_eq!(&theme.without_id(), seed);
    }

    assert!(api::get_theme(&store, &custom_id).await.unwrap().is_error());
}

#[tokio::test]
async fn exported_theme_imports_as_a_new_theme() {
    let dir = TempDir::new().unwrap();
    let mut store = ThemeStore::open(&file_config(&dir)).await.unwrap();

    let themes = api::add_theme(&mut store, dracula())
        .await
        .unwrap()
        .into_value()
        .unwrap();
    let original = themes.iter().find(|t| t.name == "Dracula").unwrap().clone();

    let path = dir.path().join("dracula.json");
    transfer::export_theme_to_file(&original, &path).await.unwrap();

    let imported = transfer::import_theme_from_file(&path).await.unwrap();
    let themes = api::add_theme(&mut store, imported)
        .await
        .unwrap()
        .into_value()
        .unwrap();

    let copies: Vec<_> = themes.iter().filter(|t| t.name == "Dracula").collect();
    assert_eq!(copies.len(), 2);
    let copy = copies.iter().find(|t| t.id != original.id).unwrap();
    assert_ne!(copy.id, original.id);
    assert_eq!(copy.without_id(), original.without_id());
}

#[tokio::test]
async fn invalid_input_is_reported_without_failing_the_call() {
    let dir = TempDir::new().unwrap();
    let mut store = ThemeStore::open(&file_config(&dir)).await.unwrap();

    let mut theme = dracula();
    theme.author = "a".repeat(51);

    let result = api::add_theme(&mut store, theme).await.unwrap();
    assert_eq!(result.error_message(), Some("Theme author is too long"));

    // Nothing was stored
    let themes = api::get_themes(&mut store).await.unwrap().into_value().unwrap();
    assert_eq!(themes.len(), DEFAULT_THEMES.len());
}
