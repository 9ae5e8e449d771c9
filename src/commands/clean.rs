use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::cli::{Cli, ColorChoice};
use crate::deleter::{Deleter, DeletionSummary, FsRemover, Remover};
use crate::output::{
    ColorMode, ErrorOutput, JsonReporter, OutputFormat, Reporter, RunSummary, ScanProgress,
    TextReporter,
};
use crate::scanner::{ArtifactFilter, DirectoryScanner, ScanResult};
use crate::{EXIT_FATAL, EXIT_INTERRUPTED, EXIT_SUCCESS};

pub(crate) const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Entry point used by the binary: installs the Ctrl-C handler, runs the
/// clean against stdout and maps fatal errors to an exit code.
#[must_use]
pub fn run_clean(cli: &Cli) -> i32 {
    let errors = ErrorOutput::new(color_choice_to_mode(cli.color));

    let interrupted = Arc::new(AtomicBool::new(false));
    if let Err(e) = install_interrupt_handler(Arc::clone(&interrupted)) {
        errors.print_fatal(&e);
        return EXIT_FATAL;
    }

    match run_clean_impl(cli, io::stdout().lock(), FsRemover, interrupted) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            errors.print_fatal(&e);
            EXIT_FATAL
        }
    }
}

fn install_interrupt_handler(flag: Arc<AtomicBool>) -> crate::Result<()> {
    ctrlc::set_handler(move || {
        flag.store(true, Ordering::SeqCst);
    })?;
    Ok(())
}

/// Scan, report, then delete, writing the report to `out`.
///
/// Ctrl-C during the scan stops it and skips deletion entirely; during
/// deletion it cancels the candidates not yet attempted.
///
/// # Errors
/// Returns an error if the root is missing or not a directory. Nothing is
/// deleted when the scan fails.
pub fn run_clean_impl<W: Write, R: Remover>(
    cli: &Cli,
    out: W,
    remover: R,
    interrupted: Arc<AtomicBool>,
) -> crate::Result<i32> {
    let scanner = DirectoryScanner::new(ArtifactFilter)
        .with_progress(ScanProgress::new(cli.quiet))
        .with_interrupt_flag(Arc::clone(&interrupted));
    let deleter = Deleter::new(remover).with_interrupt_flag(interrupted);

    match cli.format {
        OutputFormat::Text => {
            let mut reporter =
                TextReporter::new(out, color_choice_to_mode(cli.color)).with_quiet(cli.quiet);
            run_with_reporter(cli, &mut reporter, &scanner, &deleter)
        }
        OutputFormat::Json => {
            let mut reporter = JsonReporter::new(out);
            run_with_reporter(cli, &mut reporter, &scanner, &deleter)
        }
    }
}

fn run_with_reporter<P: Reporter, R: Remover>(
    cli: &Cli,
    reporter: &mut P,
    scanner: &DirectoryScanner<ArtifactFilter>,
    deleter: &Deleter<R>,
) -> crate::Result<i32> {
    // 1. Announce
    reporter.scan_started(&display_root(&cli.path));

    // 2. Scan to completion, or until Ctrl-C
    let scan = scanner.scan(&cli.path)?;
    report_skipped(&scan, cli);
    reporter.scan_finished(&scan, cli.dry_run);

    let mut summary = RunSummary {
        found: scan.len(),
        dry_run: cli.dry_run,
        scan_interrupted: scan.interrupted,
        deletion: DeletionSummary::default(),
    };

    // 3. An incomplete scan never feeds the deleter
    if scan.interrupted {
        reporter.finished(&summary);
        return Ok(EXIT_INTERRUPTED);
    }

    // 4. Nothing matched, or only listing was requested
    if scan.is_empty() || cli.dry_run {
        reporter.finished(&summary);
        return Ok(EXIT_SUCCESS);
    }

    // 5. Delete
    let outcomes = deleter.delete_all(&scan.candidates, |outcome| {
        reporter.candidate_finished(outcome);
    });
    summary.deletion = DeletionSummary::from_outcomes(&outcomes);
    reporter.finished(&summary);

    if summary.is_interrupted() {
        Ok(EXIT_INTERRUPTED)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

/// Absolute form of the root for the start notice, falling back to the path
/// as given when it cannot be resolved.
fn display_root(path: &Path) -> PathBuf {
    dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

fn report_skipped(scan: &ScanResult, cli: &Cli) {
    if cli.verbose == 0 || scan.skipped.is_empty() {
        return;
    }

    let errors = ErrorOutput::new(color_choice_to_mode(cli.color));
    for skipped in &scan.skipped {
        errors.print_warning(
            &format!("Skipped unreadable directory: {}", skipped.path.display()),
            Some(&skipped.reason()),
        );
    }
}

#[cfg(test)]
#[path = "clean_tests.rs"]
mod tests;
