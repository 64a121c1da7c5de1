use crate::core::message::Message;
use crate::core::text_wrapping::wrap_text;
use crate::ui::theme::Theme;
use ratatui::text::{Line, Span};
use std::collections::VecDeque;

/// Builds pre-wrapped transcript lines and the scroll bounds that go with them.
pub struct ScrollCalculator;

impl ScrollCalculator {
    /// One header line per message (author and time), its wrapped paragraphs,
    /// then a blank spacer line.
    pub fn build_display_lines(
        messages: &VecDeque<Message>,
        theme: &Theme,
        assistant_name: &str,
        width: u16,
    ) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for message in messages {
            let (prefix_style, text_style) = if message.role.is_user() {
                (theme.user_prefix_style, theme.user_text_style)
            } else {
                (theme.assistant_prefix_style, theme.assistant_text_style)
            };

            lines.push(Line::from(vec![
                Span::styled(message.author(assistant_name).to_string(), prefix_style),
                Span::styled(format!("  {}", message.time_label()), theme.meta_style),
            ]));
            for wrapped in wrap_text(&message.content, width as usize) {
                lines.push(Line::from(Span::styled(wrapped, text_style)));
            }
            lines.push(Line::from(""));
        }
        lines
    }

    /// Offset that shows the last `available_height` lines.
    pub fn calculate_max_scroll_offset(line_count: usize, available_height: u16) -> u16 {
        let overflow = line_count.saturating_sub(available_height as usize);
        overflow.min(u16::MAX as usize) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::message::Role;

    fn messages() -> VecDeque<Message> {
        let mut messages = VecDeque::new();
        messages.push_back(Message::new(
            "assistant-1".into(),
            Role::Assistant,
            "Hello there",
        ));
        messages.push_back(Message::new(
            "user-2".into(),
            Role::User,
            "one two three four five\nsix",
        ));
        messages
    }

    #[test]
    fn test_build_display_lines_basic() {
        let theme = Theme::dark_default();
        let lines = ScrollCalculator::build_display_lines(&messages(), &theme, "Pulse", 80);
        // header + 1 paragraph + spacer, header + 2 paragraphs + spacer
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0].spans[0].content, "Pulse");
        assert_eq!(lines[1].spans[0].content, "Hello there");
        assert_eq!(lines[3].spans[0].content, "You");
        assert_eq!(lines[5].spans[0].content, "six");
    }

    #[test]
    fn test_narrow_width_wraps_paragraphs() {
        let theme = Theme::dark_default();
        let lines = ScrollCalculator::build_display_lines(&messages(), &theme, "Pulse", 9);
        let texts: Vec<String> = lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.to_string()).collect())
            .collect();

        assert_eq!(texts[1..3], ["Hello", "there"]);

        let user_header = lines
            .iter()
            .position(|l| l.spans[0].content == "You")
            .expect("user header");
        assert_eq!(
            texts[user_header + 1..user_header + 5],
            ["one two", "three", "four five", "six"]
        );
    }

    #[test]
    fn test_calculate_max_scroll_offset() {
        assert_eq!(ScrollCalculator::calculate_max_scroll_offset(5, 10), 0);
        assert_eq!(ScrollCalculator::calculate_max_scroll_offset(25, 10), 15);
    }
}
