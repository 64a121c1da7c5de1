use std::time::Instant;

use tui_textarea::TextArea;

use crate::core::settings::SettingField;
use crate::ui::theme::Theme;
use crate::utils::color::ColorDepth;

/// Settings drawer state while it is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsDrawer {
    pub selected: SettingField,
}

impl Default for SettingsDrawer {
    fn default() -> Self {
        Self {
            selected: SettingField::Temperature,
        }
    }
}

/// Size of the transcript area from the last layout pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranscriptViewport {
    pub width: u16,
    pub height: u16,
}

pub struct UiState {
    pub theme: Theme,
    pub color_depth: ColorDepth,
    pub textarea: TextArea<'static>,
    /// First transcript line shown when not following the bottom.
    pub scroll_offset: u16,
    pub auto_scroll: bool,
    pub transcript_viewport: TranscriptViewport,
    pub drawer: Option<SettingsDrawer>,
    pub activity_started: Instant,
    pub exit_requested: bool,
}

impl UiState {
    pub fn new(theme: Theme, color_depth: ColorDepth) -> Self {
        let mut state = Self {
            theme: theme.quantized(color_depth),
            color_depth,
            textarea: TextArea::default(),
            scroll_offset: 0,
            auto_scroll: true,
            transcript_viewport: TranscriptViewport::default(),
            drawer: None,
            activity_started: Instant::now(),
            exit_requested: false,
        };
        state.configure_textarea();
        state
    }

    pub(crate) fn configure_textarea(&mut self) {
        let textarea_style = self
            .theme
            .input_text_style
            .patch(ratatui::style::Style::default().bg(self.theme.background_color));
        self.textarea.set_style(textarea_style);
        self.textarea.set_cursor_style(self.theme.input_cursor_style);
        self.textarea
            .set_cursor_line_style(ratatui::style::Style::default());
    }

    pub fn input_text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    pub fn is_input_empty(&self) -> bool {
        self.textarea.lines().iter().all(|line| line.is_empty())
    }

    pub fn clear_input(&mut self) {
        self.textarea = TextArea::default();
        self.configure_textarea();
    }

    pub fn insert_newline(&mut self) {
        self.textarea.insert_newline();
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme.quantized(self.color_depth);
        self.configure_textarea();
    }

    pub fn toggle_theme(&mut self) {
        let next = self.theme.toggled();
        self.set_theme(next);
    }

    pub fn is_drawer_open(&self) -> bool {
        self.drawer.is_some()
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer = match self.drawer {
            Some(_) => None,
            None => Some(SettingsDrawer::default()),
        };
    }

    pub fn close_drawer(&mut self) {
        self.drawer = None;
    }

    pub fn select_next_setting(&mut self) {
        if let Some(drawer) = self.drawer.as_mut() {
            drawer.selected = drawer.selected.next();
        }
    }

    pub fn select_previous_setting(&mut self) {
        if let Some(drawer) = self.drawer.as_mut() {
            drawer.selected = drawer.selected.previous();
        }
    }

    pub fn selected_setting(&self) -> Option<SettingField> {
        self.drawer.map(|d| d.selected)
    }

    /// Effective first visible line given the current maximum offset.
    pub fn effective_scroll(&self, max_offset: u16) -> u16 {
        if self.auto_scroll {
            max_offset
        } else {
            self.scroll_offset.min(max_offset)
        }
    }

    /// Scrolls by `delta` lines (negative is up). Reaching the bottom resumes following.
    pub fn scroll_by(&mut self, delta: i32, max_offset: u16) {
        let current = self.effective_scroll(max_offset) as i32;
        let next = (current + delta).clamp(0, max_offset as i32) as u16;
        self.scroll_offset = next;
        self.auto_scroll = next >= max_offset;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.auto_scroll = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> UiState {
        UiState::new(Theme::dark_default(), ColorDepth::Truecolor)
    }

    #[test]
    fn newline_keeps_multiline_input() {
        let mut ui = state();
        ui.textarea.insert_str("first");
        ui.insert_newline();
        ui.textarea.insert_str("second");
        assert_eq!(ui.input_text(), "first\nsecond");
        assert!(!ui.is_input_empty());

        ui.clear_input();
        assert!(ui.is_input_empty());
        assert_eq!(ui.input_text(), "");
    }

    #[test]
    fn drawer_navigation_only_when_open() {
        let mut ui = state();
        ui.select_next_setting();
        assert_eq!(ui.selected_setting(), None);

        ui.toggle_drawer();
        assert_eq!(ui.selected_setting(), Some(SettingField::Temperature));
        ui.select_previous_setting();
        assert_eq!(ui.selected_setting(), Some(SettingField::ClearHistory));

        ui.close_drawer();
        assert!(!ui.is_drawer_open());
    }

    #[test]
    fn scrolling_up_leaves_follow_mode_and_bottom_resumes_it() {
        let mut ui = state();
        assert_eq!(ui.effective_scroll(20), 20);

        ui.scroll_by(-5, 20);
        assert!(!ui.auto_scroll);
        assert_eq!(ui.effective_scroll(20), 15);

        ui.scroll_by(-100, 20);
        assert_eq!(ui.effective_scroll(20), 0);

        ui.scroll_by(100, 20);
        assert!(ui.auto_scroll);
    }

    #[test]
    fn theme_toggle_round_trips() {
        let mut ui = state();
        ui.toggle_theme();
        assert_eq!(ui.theme.id, "light");
        ui.toggle_theme();
        assert_eq!(ui.theme.id, "dark");
    }
}
