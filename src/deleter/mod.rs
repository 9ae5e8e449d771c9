mod outcome;

pub use outcome::{CandidateOutcome, DeletionSummary, Outcome};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::DeletionError;

/// Trait for recursively removing a directory tree.
pub trait Remover {
    /// Remove `path` and everything below it.
    ///
    /// # Errors
    /// Returns the underlying I/O error if removal fails.
    fn remove_dir_all(&self, path: &Path) -> io::Result<()>;
}

/// Removes directories from the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsRemover;

impl Remover for FsRemover {
    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::remove_dir_all(path)
    }
}

/// Deletes scanned candidates one by one, isolating failures per candidate.
pub struct Deleter<R: Remover> {
    remover: R,
    interrupted: Option<Arc<AtomicBool>>,
}

impl<R: Remover> Deleter<R> {
    #[must_use]
    pub const fn new(remover: R) -> Self {
        Self {
            remover,
            interrupted: None,
        }
    }

    /// Stop starting new deletions once `flag` becomes true.
    #[must_use]
    pub fn with_interrupt_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupted = Some(flag);
        self
    }

    fn is_interrupted(&self) -> bool {
        self.interrupted
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }

    /// Delete every candidate in order, calling `on_outcome` as each finishes.
    ///
    /// Every candidate yields exactly one outcome. After an interrupt the
    /// remaining candidates are reported as [`Outcome::Cancelled`].
    pub fn delete_all<F>(&self, candidates: &[PathBuf], mut on_outcome: F) -> Vec<CandidateOutcome>
    where
        F: FnMut(&CandidateOutcome),
    {
        let mut outcomes = Vec::with_capacity(candidates.len());

        for path in candidates {
            let outcome = if self.is_interrupted() {
                Outcome::Cancelled
            } else {
                match self.delete_one(path) {
                    Ok(()) => Outcome::Deleted,
                    Err(err) => Outcome::Failed(err),
                }
            };

            let result = CandidateOutcome {
                path: path.clone(),
                outcome,
            };
            on_outcome(&result);
            outcomes.push(result);
        }

        outcomes
    }

    /// Re-check that `path` is still a real directory, then remove it.
    ///
    /// # Errors
    /// Returns [`DeletionError::NotFound`] if the path has vanished,
    /// [`DeletionError::NotADirectory`] if it was replaced by a file or
    /// symlink, or the I/O error from the removal itself.
    pub fn delete_one(&self, path: &Path) -> Result<(), DeletionError> {
        match fs::symlink_metadata(path) {
            Ok(metadata) if metadata.is_dir() => {}
            Ok(_) => return Err(DeletionError::NotADirectory),
            Err(err) => return Err(map_io_error(err)),
        }

        self.remover.remove_dir_all(path).map_err(map_io_error)
    }
}

fn map_io_error(err: io::Error) -> DeletionError {
    if err.kind() == io::ErrorKind::NotFound {
        DeletionError::NotFound
    } else {
        DeletionError::Io(err)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
