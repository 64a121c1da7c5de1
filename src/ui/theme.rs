use crate::ui::builtin_themes::{find_builtin_theme, ThemeSpec};
use crate::utils::color::{parse_color, quantize_color, quantize_style, ColorDepth};
use ratatui::style::{Color, Modifier, Style};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Theme {
    pub id: String,
    pub display_name: String,
    // Overall background color to paint the full frame
    pub background_color: Color,

    // Header
    pub title_style: Style,
    pub badge_style: Style,

    // Transcript
    pub meta_style: Style,
    pub user_prefix_style: Style,
    pub user_text_style: Style,
    pub assistant_prefix_style: Style,
    pub assistant_text_style: Style,
    pub streaming_indicator_style: Style,

    // Chrome
    pub pane_border_style: Style,
    pub input_border_style: Style,
    pub input_title_style: Style,
    pub input_text_style: Style,
    pub input_cursor_style: Style,
    pub hint_style: Style,

    // Settings drawer
    pub drawer_border_style: Style,
    pub drawer_selected_style: Style,
    pub drawer_value_style: Style,
}

impl Theme {
    pub fn dark_default() -> Self {
        if let Some(spec) = find_builtin_theme("dark") {
            return Self::from_spec(&spec);
        }
        Theme {
            id: "dark".to_string(),
            display_name: "Dark".to_string(),
            background_color: Color::Black,
            title_style: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            badge_style: Style::default().fg(Color::LightMagenta),
            meta_style: Style::default().fg(Color::DarkGray),
            user_prefix_style: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            user_text_style: Style::default().fg(Color::Cyan),
            assistant_prefix_style: Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
            assistant_text_style: Style::default().fg(Color::White),
            streaming_indicator_style: Style::default().fg(Color::LightMagenta),
            pane_border_style: Style::default().fg(Color::DarkGray),
            input_border_style: Style::default().fg(Color::Gray),
            input_title_style: Style::default().fg(Color::Gray),
            input_text_style: Style::default().fg(Color::White),
            input_cursor_style: Style::default().add_modifier(Modifier::REVERSED),
            hint_style: Style::default().fg(Color::DarkGray),
            drawer_border_style: Style::default().fg(Color::LightMagenta),
            drawer_selected_style: Style::default().add_modifier(Modifier::BOLD),
            drawer_value_style: Style::default().fg(Color::LightMagenta),
        }
    }

    pub fn light() -> Self {
        if let Some(spec) = find_builtin_theme("light") {
            return Self::from_spec(&spec);
        }
        Theme {
            id: "light".to_string(),
            display_name: "Light".to_string(),
            background_color: Color::White,
            title_style: Style::default().fg(Color::Black).add_modifier(Modifier::BOLD),
            badge_style: Style::default().fg(Color::Magenta),
            meta_style: Style::default().fg(Color::Gray),
            user_prefix_style: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            user_text_style: Style::default().fg(Color::Blue),
            assistant_prefix_style: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            assistant_text_style: Style::default().fg(Color::Black),
            streaming_indicator_style: Style::default().fg(Color::Magenta),
            pane_border_style: Style::default().fg(Color::Gray),
            input_border_style: Style::default().fg(Color::Black),
            input_title_style: Style::default().fg(Color::DarkGray),
            input_text_style: Style::default().fg(Color::Black),
            input_cursor_style: Style::default().add_modifier(Modifier::REVERSED),
            hint_style: Style::default().fg(Color::Gray),
            drawer_border_style: Style::default().fg(Color::Magenta),
            drawer_selected_style: Style::default().add_modifier(Modifier::BOLD),
            drawer_value_style: Style::default().fg(Color::Magenta),
        }
    }

    /// Unknown names fall back to the dark theme.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" | "default" => Self::dark_default(),
            "light" => Self::light(),
            other => {
                warn!(theme = other, "unknown theme; using dark");
                Self::dark_default()
            }
        }
    }

    pub fn is_light(&self) -> bool {
        self.id == "light"
    }

    /// The other of the two bundled themes.
    pub fn toggled(&self) -> Self {
        if self.is_light() {
            Self::dark_default()
        } else {
            Self::light()
        }
    }

    /// Reduce every color to what the terminal can show.
    pub fn quantized(mut self, depth: ColorDepth) -> Self {
        self.background_color = quantize_color(self.background_color, depth);
        for style in [
            &mut self.title_style,
            &mut self.badge_style,
            &mut self.meta_style,
            &mut self.user_prefix_style,
            &mut self.user_text_style,
            &mut self.assistant_prefix_style,
            &mut self.assistant_text_style,
            &mut self.streaming_indicator_style,
            &mut self.pane_border_style,
            &mut self.input_border_style,
            &mut self.input_title_style,
            &mut self.input_text_style,
            &mut self.input_cursor_style,
            &mut self.hint_style,
            &mut self.drawer_border_style,
            &mut self.drawer_selected_style,
            &mut self.drawer_value_style,
        ] {
            *style = quantize_style(*style, depth);
        }
        self
    }

    pub fn from_spec(spec: &ThemeSpec) -> Self {
        fn parse_modifier(tok: &str) -> Option<Modifier> {
            match tok.to_ascii_lowercase().as_str() {
                "bold" => Some(Modifier::BOLD),
                "reversed" => Some(Modifier::REVERSED),
                "italic" => Some(Modifier::ITALIC),
                "dim" => Some(Modifier::DIM),
                _ => None,
            }
        }

        // Comma-separated tokens: a color sets the foreground, the rest are modifiers.
        fn parse_style(s: &Option<String>) -> Style {
            let mut style = Style::default();
            if let Some(spec) = s {
                for tok in spec.split(',').map(str::trim).filter(|t| !t.is_empty()) {
                    if let Some(color) = parse_color(tok) {
                        style = style.fg(color);
                    } else if let Some(modifier) = parse_modifier(tok) {
                        style = style.add_modifier(modifier);
                    }
                }
            }
            style
        }

        let background_color = spec
            .background
            .as_deref()
            .and_then(parse_color)
            .unwrap_or(Color::Black);

        Theme {
            id: spec.id.clone(),
            display_name: spec.display_name.clone(),
            background_color,
            title_style: parse_style(&spec.title),
            badge_style: parse_style(&spec.badge),
            meta_style: parse_style(&spec.meta_text),
            user_prefix_style: parse_style(&spec.user_prefix),
            user_text_style: parse_style(&spec.user_text),
            assistant_prefix_style: parse_style(&spec.assistant_prefix),
            assistant_text_style: parse_style(&spec.assistant_text),
            streaming_indicator_style: parse_style(&spec.streaming_indicator),
            pane_border_style: parse_style(&spec.pane_border),
            input_border_style: parse_style(&spec.input_border),
            input_title_style: parse_style(&spec.input_title),
            input_text_style: parse_style(&spec.input_text),
            input_cursor_style: parse_style(&spec.input_cursor_modifiers),
            hint_style: parse_style(&spec.hint),
            drawer_border_style: parse_style(&spec.drawer_border),
            drawer_selected_style: parse_style(&spec.drawer_selected),
            drawer_value_style: parse_style(&spec.drawer_value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_dark_uses_spec_colors() {
        let theme = Theme::dark_default();
        assert_eq!(theme.id, "dark");
        assert_eq!(theme.background_color, Color::Rgb(0x0f, 0x11, 0x17));
        assert!(theme.title_style.add_modifier.contains(Modifier::BOLD));
        assert!(theme.hint_style.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn unknown_name_falls_back_to_dark() {
        assert_eq!(Theme::from_name("solarized").id, "dark");
        assert_eq!(Theme::from_name(" LIGHT ").id, "light");
    }

    #[test]
    fn toggle_switches_between_dark_and_light() {
        let dark = Theme::dark_default();
        let light = dark.toggled();
        assert!(light.is_light());
        assert!(!light.toggled().is_light());
    }

    #[test]
    fn cursor_modifiers_parse_without_color() {
        let theme = Theme::light();
        assert!(theme
            .input_cursor_style
            .add_modifier
            .contains(Modifier::REVERSED));
        assert_eq!(theme.input_cursor_style.fg, None);
    }

    #[test]
    fn quantized_theme_drops_rgb_on_ansi_terminals() {
        let theme = Theme::dark_default().quantized(ColorDepth::X16);
        assert!(!matches!(theme.background_color, Color::Rgb(..)));
        assert!(!matches!(theme.user_text_style.fg, Some(Color::Rgb(..))));
    }
}
