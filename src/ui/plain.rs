//! Unstyled UI for pipes and CI logs.
//!
//! Results go to stdout; warnings and errors go to stderr so piped output
//! (`netsec-pkg requirements > deps.txt`) stays clean.

use super::{OutputMode, Theme, UserInterface};

/// UI implementation without colors or terminal control.
pub struct PlainUI {
    mode: OutputMode,
    theme: Theme,
}

impl PlainUI {
    /// Create a new plain UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: Theme::plain(),
        }
    }
}

impl UserInterface for PlainUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        println!("{}", self.theme.format_success(msg));
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_headers() {
            println!("\n{}\n", title);
        }
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("{}", self.theme.format_key_value(key, value));
    }
}
