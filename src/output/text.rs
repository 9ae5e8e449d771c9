use std::io::Write;
use std::path::Path;

use super::{Reporter, RunSummary, ansi};
use crate::deleter::{CandidateOutcome, Outcome};
use crate::scanner::{ARTIFACT_DIR_NAMES, ScanResult};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Streams human-readable progress lines as the run advances.
pub struct TextReporter<W: Write> {
    out: W,
    use_colors: bool,
    quiet: bool,
}

impl<W: Write> TextReporter<W> {
    #[must_use]
    pub fn new(out: W, mode: ColorMode) -> Self {
        Self {
            out,
            use_colors: Self::should_use_colors(mode),
            quiet: false,
        }
    }

    /// In quiet mode only the final summary line is written.
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    const fn status_icon(outcome: &Outcome) -> &'static str {
        match outcome {
            Outcome::Deleted => "✓",
            Outcome::Failed(_) => "✗",
            Outcome::Cancelled => "-",
        }
    }

    const fn status_color(outcome: &Outcome) -> &'static str {
        match outcome {
            Outcome::Deleted => ansi::GREEN,
            Outcome::Failed(_) => ansi::RED,
            Outcome::Cancelled => ansi::YELLOW,
        }
    }

    fn format_summary(&self, summary: &RunSummary) -> String {
        if summary.scan_interrupted {
            return "Done: interrupted during scan, nothing deleted.".to_string();
        }
        if summary.found == 0 {
            return "Done: nothing to do.".to_string();
        }
        if summary.dry_run {
            return format!(
                "Done: dry run, {} directories would be deleted.",
                summary.found
            );
        }

        let deletion = &summary.deletion;
        let deleted = self.colorize(&deletion.deleted.to_string(), ansi::GREEN);
        let failed = self.colorize(&deletion.failed.to_string(), ansi::RED);
        let mut line = format!("Done: {deleted} deleted, {failed} failed");
        if deletion.is_interrupted() {
            let cancelled = self.colorize(&deletion.cancelled.to_string(), ansi::YELLOW);
            line.push_str(&format!(", {cancelled} cancelled (interrupted)"));
        }
        line.push('.');
        line
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn scan_started(&mut self, root: &Path) {
        if self.quiet {
            return;
        }
        let names = ARTIFACT_DIR_NAMES.join("/");
        let _ = writeln!(
            self.out,
            "Scanning {} for {names} directories...",
            root.display()
        );
    }

    fn scan_finished(&mut self, scan: &ScanResult, dry_run: bool) {
        if self.quiet {
            return;
        }
        if scan.interrupted {
            let _ = writeln!(
                self.out,
                "Scan interrupted after {} directories.",
                scan.visited
            );
            return;
        }
        if scan.is_empty() {
            let _ = writeln!(self.out, "No bin/obj directories found.");
            return;
        }

        let count = self.colorize(&scan.len().to_string(), ansi::CYAN);
        let verb = if dry_run { "would be deleted" } else { "to delete" };
        let _ = writeln!(self.out, "Found {count} directories {verb}:");
        for path in &scan.candidates {
            let _ = writeln!(self.out, "  {}", path.display());
        }
    }

    fn candidate_finished(&mut self, outcome: &CandidateOutcome) {
        if self.quiet {
            return;
        }
        let icon = Self::status_icon(&outcome.outcome);
        let status = match &outcome.outcome {
            Outcome::Deleted => "Deleted",
            Outcome::Failed(_) => "Failed",
            Outcome::Cancelled => "Cancelled",
        };
        let status = self.colorize(status, Self::status_color(&outcome.outcome));

        let path = outcome.path.display();
        if let Some(err) = outcome.outcome.error() {
            let _ = writeln!(self.out, "{icon} {status}: {path} ({err})");
        } else {
            let _ = writeln!(self.out, "{icon} {status}: {path}");
        }
    }

    fn finished(&mut self, summary: &RunSummary) {
        let line = self.format_summary(summary);
        let _ = writeln!(self.out, "{line}");
        let _ = self.out.flush();
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
