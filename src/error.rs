use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors that abort a run before the scan starts.
#[derive(Error, Debug)]
pub enum CleanError {
    #[error("Root directory not found: {path}")]
    RootNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Root is not a directory: {0}")]
    RootNotDirectory(PathBuf),

    #[error("Failed to install Ctrl-C handler: {0}")]
    Interrupt(#[from] ctrlc::Error),
}

impl CleanError {
    /// Short label used after the error marker in terminal output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::RootNotFound { .. } | Self::RootNotDirectory(_) => "Root",
            Self::Interrupt(_) => "Signal",
        }
    }
}

/// A directory whose children could not be enumerated.
///
/// Contained at the directory's scope: the branch is dropped from the scan.
#[derive(Error, Debug)]
#[error("Failed to list directory: {}", .path.display())]
pub struct ListingError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

impl ListingError {
    /// Underlying cause, without the path prefix.
    #[must_use]
    pub fn reason(&self) -> String {
        self.source.to_string()
    }
}

/// Why a single candidate could not be removed.
#[derive(Error, Debug)]
pub enum DeletionError {
    #[error("not found")]
    NotFound,

    #[error("not a directory")]
    NotADirectory,

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CleanError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
