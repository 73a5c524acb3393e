//! Spinner for operations of unknown duration

use std::borrow::Cow;
use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

const TICK_INTERVAL: Duration = Duration::from_millis(80);

/// An animated spinner rendered to stderr.
///
/// Finish it with [`Spinner::success`] or [`Spinner::error`] to replace the
/// spinner with a status line, or [`Spinner::clear`] to remove it entirely.
/// Hidden automatically when stderr is not a terminal.
pub struct Spinner {
    bar: ProgressBar,
}

/// Builder for [`Spinner`]
pub struct SpinnerBuilder {
    message: Cow<'static, str>,
}

impl Spinner {
    pub fn builder(message: impl Into<Cow<'static, str>>) -> SpinnerBuilder {
        SpinnerBuilder {
            message: message.into(),
        }
    }

    /// Update the message while the spinner keeps ticking
    pub fn set_message(&self, message: impl Into<Cow<'static, str>>) {
        self.bar.set_message(message.into());
    }

    /// Replace the spinner with a green check and `message`
    pub fn success(self, message: impl AsRef<str>) {
        self.bar
            .finish_with_message(format!("{} {}", "✓".green(), message.as_ref()));
    }

    /// Replace the spinner with a red cross and `message`
    pub fn error(self, message: impl AsRef<str>) {
        self.bar
            .finish_with_message(format!("{} {}", "✗".red(), message.as_ref()));
    }

    /// Remove the spinner without printing anything
    pub fn clear(self) {
        self.bar.finish_and_clear();
    }
}

impl SpinnerBuilder {
    pub fn start(self) -> Spinner {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                // Final empty frame so the glyph disappears on finish
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", ""]),
        );
        bar.set_message(self.message);
        bar.enable_steady_tick(TICK_INTERVAL);
        Spinner { bar }
    }
}
