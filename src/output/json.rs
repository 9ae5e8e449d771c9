use std::io::Write;
use std::path::Path;

use serde::Serialize;

use super::{Reporter, RunSummary};
use crate::deleter::CandidateOutcome;
use crate::scanner::ScanResult;

/// Buffers the run and writes a single JSON document when it finishes.
pub struct JsonReporter<W: Write> {
    out: W,
    root: String,
    candidates: Vec<CandidateEntry>,
    /// Index of the candidate the next outcome belongs to.
    next: usize,
    skipped: Vec<SkippedEntry>,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    root: &'a str,
    dry_run: bool,
    interrupted: bool,
    summary: Summary,
    candidates: &'a [CandidateEntry],
    skipped: &'a [SkippedEntry],
}

#[derive(Serialize)]
struct Summary {
    found: usize,
    deleted: usize,
    failed: usize,
    cancelled: usize,
}

#[derive(Serialize)]
struct CandidateEntry {
    path: String,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct SkippedEntry {
    path: String,
    reason: String,
}

impl<W: Write> JsonReporter<W> {
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self {
            out,
            root: String::new(),
            candidates: Vec::new(),
            next: 0,
            skipped: Vec::new(),
        }
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn scan_started(&mut self, root: &Path) {
        self.root = root.display().to_string();
    }

    fn scan_finished(&mut self, scan: &ScanResult, _dry_run: bool) {
        self.candidates = scan
            .candidates
            .iter()
            .map(|path| CandidateEntry {
                path: path.display().to_string(),
                status: "pending",
                error: None,
            })
            .collect();
        self.next = 0;
        self.skipped = scan
            .skipped
            .iter()
            .map(|err| SkippedEntry {
                path: err.path.display().to_string(),
                reason: err.reason(),
            })
            .collect();
    }

    fn candidate_finished(&mut self, outcome: &CandidateOutcome) {
        // Outcomes arrive in scan order, one per candidate.
        if let Some(entry) = self.candidates.get_mut(self.next) {
            entry.status = outcome.outcome.status_str();
            entry.error = outcome.outcome.error().map(ToString::to_string);
        }
        self.next += 1;
    }

    fn finished(&mut self, summary: &RunSummary) {
        let output = JsonOutput {
            root: &self.root,
            dry_run: summary.dry_run,
            interrupted: summary.is_interrupted(),
            summary: Summary {
                found: summary.found,
                deleted: summary.deletion.deleted,
                failed: summary.deletion.failed,
                cancelled: summary.deletion.cancelled,
            },
            candidates: &self.candidates,
            skipped: &self.skipped,
        };

        if serde_json::to_writer_pretty(&mut self.out, &output).is_ok() {
            let _ = writeln!(self.out);
        }
        let _ = self.out.flush();
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
