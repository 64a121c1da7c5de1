use crate::core::config::Config;
use crate::ui::builtin_themes::{load_builtin_themes, ThemeSpec};

/// One line per theme, with `*` on the configured one.
pub fn theme_listing(themes: &[ThemeSpec], current: Option<&str>) -> String {
    let current_id_for_mark = current.unwrap_or("dark");
    let current_display = current.unwrap_or("(default: dark)");

    let mut out = String::from("Available themes:\n\nBuilt-in:\n");
    for t in themes {
        let mark = if t.id.eq_ignore_ascii_case(current_id_for_mark) {
            "*"
        } else {
            " "
        };
        out.push_str(&format!("  {} {} - {}\n", mark, t.id, t.display_name));
    }
    out.push_str(&format!("\nCurrent: {}\n", current_display));
    out
}

pub fn list_themes(config: &Config) {
    print!(
        "{}",
        theme_listing(&load_builtin_themes(), config.theme.as_deref())
    );
}
