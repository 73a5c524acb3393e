//! # atlas-ui
//!
//! A consistent UI library for atlas tools, providing spinners, status
//! icons and terminal text helpers.
//!
//! ## Example
//!
//! ```rust,no_run
//! use atlas_ui::Spinner;
//!
//! // Create and use a spinner
//! let spinner = Spinner::builder("Searching...").start();
//! // ... do work ...
//! spinner.success("Done!");
//! ```

mod spinner;
mod style;
mod terminal;

pub use spinner::{Spinner, SpinnerBuilder};
pub use style::{Style, StyledText, icons};
pub use terminal::{TerminalSize, get_terminal_size, truncate_text};

// Re-export commonly used items from dependencies
pub use colored::Colorize;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Colorize,
        spinner::{Spinner, SpinnerBuilder},
        style::{Style, StyledText},
    };
}
