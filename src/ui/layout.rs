use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::core::constants::INDICATOR_SPACE;

/// Most input rows shown before the text area scrolls.
pub const MAX_INPUT_ROWS: u16 = 5;

/// Screen regions for one frame of the chat view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatLayout {
    pub header: Rect,
    /// Bordered visualizer pane.
    pub visualizer: Rect,
    /// Drawable area inside the pane borders.
    pub visualizer_canvas: Rect,
    pub transcript: Rect,
    pub input: Rect,
    pub hint: Rect,
}

impl ChatLayout {
    /// Splits `area` top to bottom. The visualizer keeps `pane_height` rows
    /// (plus borders) unless the transcript would be squeezed below one row.
    pub fn compute(area: Rect, pane_height: u16, input_lines: usize) -> Self {
        let input_rows = (input_lines as u16).clamp(1, MAX_INPUT_ROWS);
        let input_height = input_rows + 2;
        let fixed = 1 + input_height + 1;
        let room_for_pane = area.height.saturating_sub(fixed + 1);
        let pane_outer = (pane_height + 2).min(room_for_pane);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(pane_outer),
                Constraint::Min(0),
                Constraint::Length(input_height),
                Constraint::Length(1),
            ])
            .split(area);

        let visualizer = chunks[1];
        let visualizer_canvas = if visualizer.height > 2 {
            Rect::new(
                visualizer.x + 1,
                visualizer.y + 1,
                visualizer.width.saturating_sub(2),
                visualizer.height - 2,
            )
        } else {
            Rect::new(visualizer.x, visualizer.y, 0, 0)
        };

        Self {
            header: chunks[0],
            visualizer,
            visualizer_canvas,
            transcript: chunks[2],
            input: chunks[3],
            hint: chunks[4],
        }
    }

    /// Width available for transcript text.
    pub fn transcript_text_width(&self) -> u16 {
        self.transcript.width.saturating_sub(INDICATOR_SPACE / 2)
    }
}
