use serde::{Deserialize, Serialize};

/// 主题的主色配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryColors {
    pub dark: String,
    pub light: String,
    pub subtle: String,
}

/// 按钮的背景色与文字色
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonColors {
    pub bg: String,
    pub text: String,
}

/// 按钮颜色覆盖（每一类都是可选的）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<ButtonColors>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<ButtonColors>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tertiary: Option<ButtonColors>,
}

impl ButtonOverrides {
    /// 是否没有任何覆盖项
    pub fn is_empty(&self) -> bool {
        self.primary.is_none() && self.secondary.is_none() && self.tertiary.is_none()
    }
}

/// 主题实体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub id: String,
    pub name: String,
    pub description: String,
    pub author: String,
    pub primary: PrimaryColors,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button: Option<ButtonOverrides>,
}

/// 尚未持久化的主题（没有 id，由存储层分配）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTheme {
    pub name: String,
    pub description: String,
    pub author: String,
    pub primary: PrimaryColors,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button: Option<ButtonOverrides>,
}

impl NewTheme {
    /// 附加存储层分配的 id，得到完整主题
    pub fn with_id(self, id: impl Into<String>) -> Theme {
        Theme {
            id: id.into(),
            name: self.name,
            description: self.description,
            author: self.author,
            primary: self.primary,
            button: self.button,
        }
    }
}

impl Theme {
    /// 去掉 id 的副本，用于校验与导出
    pub fn without_id(&self) -> NewTheme {
        NewTheme {
            name: self.name.clone(),
            description: self.description.clone(),
            author: self.author.clone(),
            primary: self.primary.clone(),
            button: self.button.clone(),
        }
    }

    /// 将补丁合并到当前主题上，返回合并结果
    ///
    /// 顶层字段是浅合并：补丁中缺失的字段保留原值。`button` 在变体层级合并：
    /// 补丁只带 `button.primary` 时，已有的 `secondary`/`tertiary` 保留，
    /// 被补丁覆盖的变体整对（bg/text）替换。
    pub fn merged_with(&self, patch: &ThemePatch) -> Theme {
        let button = match (&self.button, &patch.button) {
            (existing, None) => existing.clone(),
            (None, Some(patched)) => Some(patched.clone()),
            (Some(existing), Some(patched)) => Some(ButtonOverrides {
                primary: patched.primary.clone().or_else(|| existing.primary.clone()),
                secondary: patched
                    .secondary
                    .clone()
                    .or_else(|| existing.secondary.clone()),
                tertiary: patched
                    .tertiary
                    .clone()
                    .or_else(|| existing.tertiary.clone()),
            }),
        };

        Theme {
            id: self.id.clone(),
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            description: patch
                .description
                .clone()
                .unwrap_or_else(|| self.description.clone()),
            author: patch.author.clone().unwrap_or_else(|| self.author.clone()),
            primary: patch.primary.clone().unwrap_or_else(|| self.primary.clone()),
            button,
        }
    }
}

/// 部分更新补丁：所有字段均可缺省，缺省即保留原值
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<PrimaryColors>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button: Option<ButtonOverrides>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_theme() -> Theme {
        Theme {
            id: "abc123".to_string(),
            name: "Dracula".to_string(),
            description: "d".to_string(),
            author: "x".to_string(),
            primary: PrimaryColors {
                dark: "#111".to_string(),
                light: "#222".to_string(),
                subtle: "#333".to_string(),
            },
            button: Some(ButtonOverrides {
                primary: Some(ButtonColors {
                    bg: "#aaa".to_string(),
                    text: "#bbb".to_string(),
                }),
                secondary: Some(ButtonColors {
                    bg: "#ccc".to_string(),
                    text: "#ddd".to_string(),
                }),
                tertiary: None,
            }),
        }
    }

    #[test]
    fn merge_retains_fields_missing_from_patch() {
        let theme = sample_theme();
        let patch = ThemePatch {
            name: Some("Nosferatu".to_string()),
            ..Default::default()
        };

        let merged = theme.merged_with(&patch);
        assert_eq!(merged.id, theme.id);
        assert_eq!(merged.name, "Nosferatu");
        assert_eq!(merged.description, theme.description);
        assert_eq!(merged.author, theme.author);
        assert_eq!(merged.primary, theme.primary);
        assert_eq!(merged.button, theme.button);
    }

    #[test]
    fn merge_patches_button_variant_without_dropping_others() {
        let theme = sample_theme();
        let patch = ThemePatch {
            button: Some(ButtonOverrides {
                primary: Some(ButtonColors {
                    bg: "#eee".to_string(),
                    text: "#fff".to_string(),
                }),
                ..Default::default()
            }),
            ..Default::default()
        };

        let merged = theme.merged_with(&patch);
        let button = merged.button.unwrap();
        // Patched variant replaced as a whole pair
        assert_eq!(button.primary.unwrap().bg, "#eee");
        // Untouched variants survive the merge
        assert_eq!(button.secondary.unwrap().bg, "#ccc");
        assert!(button.tertiary.is_none());
    }

    #[test]
    fn merge_is_idempotent() {
        let theme = sample_theme();
        let patch = ThemePatch {
            author: Some("y".to_string()),
            button: Some(ButtonOverrides {
                tertiary: Some(ButtonColors {
                    bg: "#123".to_string(),
                    text: "#456".to_string(),
                }),
                ..Default::default()
            }),
            ..Default::default()
        };

        let once = theme.merged_with(&patch);
        let twice = once.merged_with(&patch);
        assert_eq!(once, twice);
    }

    #[test]
    fn absent_button_is_skipped_in_json() {
        let theme = Theme {
            button: None,
            ..sample_theme()
        };
        let json = serde_json::to_value(&theme).unwrap();
        assert!(json.get("button").is_none());
    }
}
