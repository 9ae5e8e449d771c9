mod error_output;
mod json;
mod progress;
mod text;

pub use error_output::ErrorOutput;
pub use json::JsonReporter;
pub use progress::ScanProgress;
pub use text::{ColorMode, TextReporter};

use std::path::Path;

use crate::deleter::{CandidateOutcome, DeletionSummary};
use crate::scanner::ScanResult;

/// ANSI color codes
pub(crate) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// Totals for a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub found: usize,
    pub dry_run: bool,
    /// Ctrl-C arrived during the scan, so nothing was deleted.
    pub scan_interrupted: bool,
    pub deletion: DeletionSummary,
}

impl RunSummary {
    #[must_use]
    pub const fn is_interrupted(&self) -> bool {
        self.scan_interrupted || self.deletion.is_interrupted()
    }
}

/// Receives run events in order: scan started, scan finished, one
/// `candidate_finished` per candidate in scan order, then `finished`.
///
/// Reporting is best-effort. Write errors (a closed pipe, a full disk) are
/// ignored by every method, so losing stdout never changes which directories
/// are deleted or the exit code.
pub trait Reporter {
    fn scan_started(&mut self, root: &Path);

    fn scan_finished(&mut self, scan: &ScanResult, dry_run: bool);

    fn candidate_finished(&mut self, outcome: &CandidateOutcome);

    /// Emit the final summary and flush.
    fn finished(&mut self, summary: &RunSummary);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
