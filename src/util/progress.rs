//! Progress bar for the rev-list scan
//!
//! The listing is already in memory when the scan starts, so progress is
//! counted in bytes of it consumed. The scan may stop long before the end.

use indicatif::{ProgressBar, ProgressStyle};

const TEMPLATE: &str = "{spinner:.green} {msg}: [{bar:40.cyan/blue}] {bytes}/{total_bytes}";

/// Bytes of scanner input consumed so far, drawn on stderr unless hidden
pub struct ScanProgress {
    bar: ProgressBar,
}

impl ScanProgress {
    pub fn new(label: &str, total_bytes: u64, visible: bool) -> Self {
        if !visible {
            return Self::hidden();
        }

        let bar = ProgressBar::new(total_bytes);
        bar.set_style(
            ProgressStyle::with_template(TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );
        bar.set_message(label.to_string());
        Self { bar }
    }

    /// Counts progress without drawing anything
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Account for one line of input and its newline
    pub fn line_done(&self, line: &str) {
        self.bar.inc(line.len() as u64 + 1);
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
