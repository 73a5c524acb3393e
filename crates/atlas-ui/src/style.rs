//! Semantic text styles and status icons

use colored::{ColoredString, Colorize};

/// Status icons used across atlas command output
pub mod icons {
    use colored::{ColoredString, Colorize};

    pub fn success() -> ColoredString {
        "✓".green()
    }

    pub fn error() -> ColoredString {
        "✗".red()
    }

    pub fn warning() -> ColoredString {
        "!".yellow()
    }

    pub fn info() -> ColoredString {
        "ℹ".blue()
    }
}

/// Semantic text styles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Success,
    Error,
    Warning,
    Info,
    Muted,
}

/// Extension trait applying a [`Style`] to anything string-like
pub trait StyledText {
    fn styled(&self, style: Style) -> ColoredString;
}

impl<T: AsRef<str>> StyledText for T {
    fn styled(&self, style: Style) -> ColoredString {
        let text = self.as_ref();
        match style {
            Style::Success => text.green(),
            Style::Error => text.red(),
            Style::Warning => text.yellow(),
            Style::Info => text.cyan(),
            Style::Muted => text.dimmed(),
        }
    }
}
