use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ThemeSpec {
    pub id: String,
    pub display_name: String,
    pub background: Option<String>,
    pub title: Option<String>,
    pub badge: Option<String>,
    pub meta_text: Option<String>,
    pub user_prefix: Option<String>,
    pub user_text: Option<String>,
    pub assistant_prefix: Option<String>,
    pub assistant_text: Option<String>,
    pub streaming_indicator: Option<String>,
    pub pane_border: Option<String>,
    pub input_border: Option<String>,
    pub input_title: Option<String>,
    pub input_text: Option<String>,
    pub input_cursor_modifiers: Option<String>,
    pub hint: Option<String>,
    pub drawer_border: Option<String>,
    pub drawer_selected: Option<String>,
    pub drawer_value: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BuiltinThemesConfig {
    themes: Vec<ThemeSpec>,
}

const CONFIG_CONTENT: &str = include_str!("../builtin_themes.toml");

/// Themes bundled into the binary. Empty only if the bundled file is malformed,
/// in which case callers fall back to palette themes.
pub fn load_builtin_themes() -> Vec<ThemeSpec> {
    toml::from_str::<BuiltinThemesConfig>(CONFIG_CONTENT)
        .map(|config| config.themes)
        .unwrap_or_default()
}

pub fn find_builtin_theme(id: &str) -> Option<ThemeSpec> {
    load_builtin_themes()
        .into_iter()
        .find(|t| t.id.eq_ignore_ascii_case(id))
}
