use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "binobj-clean")]
#[command(author, version, about = "Delete bin/ and obj/ build output directories")]
#[command(long_about = "Scans a directory tree breadth-first and deletes every directory \
    named exactly `bin` or `obj`. Matched directories are removed wholesale and never \
    descended into.\n\n\
    Exit codes:\n  \
    0 - Run completed (including when some deletions failed)\n  \
    1 - Fatal error, nothing was deleted\n  \
    130 - Interrupted by Ctrl-C")]
pub struct Cli {
    /// Root directory to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// List matching directories without deleting them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Increase output verbosity (-v shows directories that could not be read)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress output and per-directory lines
    #[arg(short, long)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
