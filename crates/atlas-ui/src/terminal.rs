//! Terminal size and text-fitting helpers

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Terminal dimensions in character cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub width: usize,
    pub height: usize,
}

/// Current terminal size, falling back to 80x24 when there is no tty
pub fn get_terminal_size() -> TerminalSize {
    terminal_size::terminal_size()
        .map(|(w, h)| TerminalSize {
            width: w.0 as usize,
            height: h.0 as usize,
        })
        .unwrap_or(TerminalSize {
            width: 80,
            height: 24,
        })
}

/// Truncate `text` to `max_width` display columns, appending `...` when cut
pub fn truncate_text(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let mut result = String::new();
    let mut width = 0;

    for ch in text.chars() {
        let char_width = ch.width().unwrap_or(0);
        if width + char_width + 3 > max_width {
            break;
        }
        result.push(ch);
        width += char_width;
    }

    result + "..."
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_leaves_short_text_alone() {
        assert_eq!(truncate_text("Poland", 20), "Poland");
        assert_eq!(truncate_text("", 5), "");
    }

    #[test]
    fn test_truncate_appends_ellipsis() {
        let truncated = truncate_text("South Georgia and the South Sandwich Islands", 20);
        assert!(truncated.ends_with("..."));
        assert!(truncated.width() <= 20);
    }

    #[test]
    fn test_truncate_counts_display_columns() {
        // Wide CJK characters take two columns each
        let truncated = truncate_text("中华人民共和国", 8);
        assert!(truncated.width() <= 8);
        assert!(truncated.ends_with("..."));
    }
}
