//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait so commands can be tested against [`MockUI`]
//! - [`TerminalUI`] for styled output on a TTY
//! - [`PlainUI`] for pipes, CI logs, and `NO_COLOR`
//! - Output modes and the visual theme
//!
//! # Example
//!
//! ```
//! use netsec_pkg::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(OutputMode::Quiet);
//! ui.success("Requirements loaded");
//! ```

pub mod mock;
pub mod output;
pub mod plain;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use plain::PlainUI;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, Theme};

/// Trait for user interface interactions.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Shown in every mode.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Write a labelled value, e.g. `Version: 1.0.0`.
    fn key_value(&mut self, key: &str, value: &str) {
        self.message(&format!("  {}: {}", key, value));
    }
}
