use std::io::IsTerminal;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while the directory tree is being scanned.
///
/// Hidden in quiet mode or when stderr is not a TTY. The total is unknown up
/// front, so this counts visited directories instead of showing a bar.
#[derive(Clone)]
pub struct ScanProgress {
    progress_bar: ProgressBar,
}

impl ScanProgress {
    /// Creates a new scan spinner drawing to stderr.
    ///
    /// # Panics
    ///
    /// Panics if the spinner template is invalid. The template is a
    /// compile-time constant.
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(quiet, is_tty)
    }

    fn new_with_visibility(quiet: bool, is_tty: bool) -> Self {
        let progress_bar = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            Self::create_visible_spinner()
        };

        Self { progress_bar }
    }

    fn create_visible_spinner() -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} Scanning {pos} directories ({elapsed})")
                // SAFETY: Template is a static string with valid format specifiers
                .expect("valid template"),
        );
        pb
    }

    /// Records one more visited directory.
    pub fn inc(&self) {
        self.progress_bar.inc(1);
    }

    /// Finishes the spinner and clears it from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
