//! Word wrapping for transcript text.
//!
//! The transcript is rendered without ratatui's own wrapping so the number of
//! visual lines is known up front for scroll calculations. Wrapping happens at
//! whitespace; a word wider than the line is broken by character.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wraps one paragraph (no embedded newlines) to `width` columns.
/// An empty paragraph yields a single empty line.
pub fn wrap_paragraph(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in text.split_whitespace() {
        let word_width = UnicodeWidthStr::width(word);

        if current_width > 0 && current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
            continue;
        }

        if current_width > 0 {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        for ch in word.chars() {
            let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
            if current_width + ch_width > width && current_width > 0 {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += ch_width;
        }
    }

    if current_width > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Wraps text that may contain newlines, treating each line as a paragraph.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    text.split('\n')
        .flat_map(|paragraph| wrap_paragraph(paragraph, width))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_wrapping() {
        let lines = wrap_paragraph("the quick brown fox jumps", 10);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn test_exact_fit_stays_on_one_line() {
        assert_eq!(wrap_paragraph("abc defgh", 9), vec!["abc defgh"]);
    }

    #[test]
    fn test_long_word_breaking() {
        let lines = wrap_paragraph("a supercalifragilistic word", 8);
        assert_eq!(lines, vec!["a", "supercal", "ifragili", "stic", "word"]);
    }

    #[test]
    fn test_wide_characters_count_double() {
        let lines = wrap_paragraph("👋 hi there", 5);
        assert_eq!(lines, vec!["👋 hi", "there"]);
    }

    #[test]
    fn test_empty_paragraphs_are_kept() {
        assert_eq!(wrap_text("one\n\ntwo", 20), vec!["one", "", "two"]);
        assert_eq!(wrap_paragraph("", 20), vec![""]);
    }

    #[test]
    fn test_zero_width_returns_input() {
        assert_eq!(wrap_paragraph("no room", 0), vec!["no room"]);
    }
}
