use std::collections::VecDeque;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::{DirFilter, DirLister, ScanResult, WalkDirLister};
use crate::error::{CleanError, ListingError, Result};
use crate::output::ScanProgress;

/// Breadth-first scanner that collects matched directories and never
/// descends into them.
pub struct DirectoryScanner<F: DirFilter, L: DirLister = WalkDirLister> {
    filter: F,
    lister: L,
    progress: Option<ScanProgress>,
    interrupted: Option<Arc<AtomicBool>>,
}

impl<F: DirFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self {
            filter,
            lister: WalkDirLister,
            progress: None,
            interrupted: None,
        }
    }
}

impl<F: DirFilter, L: DirLister> DirectoryScanner<F, L> {
    #[must_use]
    pub fn with_lister<M: DirLister>(self, lister: M) -> DirectoryScanner<F, M> {
        DirectoryScanner {
            filter: self.filter,
            lister,
            progress: self.progress,
            interrupted: self.interrupted,
        }
    }

    #[must_use]
    pub fn with_progress(mut self, progress: ScanProgress) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Stop before the next directory once `flag` is set.
    #[must_use]
    pub fn with_interrupt_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupted = Some(flag);
        self
    }

    /// Scan `root` breadth-first.
    ///
    /// # Errors
    /// Returns an error if `root` is missing or is not a directory. Listing
    /// failures below the root are recorded in [`ScanResult::skipped`].
    pub fn scan(&self, root: &Path) -> Result<ScanResult> {
        validate_root(root)?;
        let result = self.scan_impl(root);
        if let Some(progress) = &self.progress {
            progress.finish();
        }
        Ok(result)
    }

    fn is_interrupted(&self) -> bool {
        self.interrupted
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }

    fn scan_impl(&self, root: &Path) -> ScanResult {
        let mut frontier = VecDeque::from([root.to_path_buf()]);
        let mut result = ScanResult::default();

        while let Some(current) = frontier.pop_front() {
            if self.is_interrupted() {
                result.interrupted = true;
                break;
            }

            result.visited += 1;
            if let Some(progress) = &self.progress {
                progress.inc();
            }

            let children = match self.lister.list_dirs(&current) {
                Ok(children) => children,
                Err(source) => {
                    result.skipped.push(ListingError {
                        path: current,
                        source,
                    });
                    continue;
                }
            };

            for path in children {
                if self.filter.should_remove(&path) {
                    result.candidates.push(path);
                } else {
                    frontier.push_back(path);
                }
            }
        }

        result
    }
}

fn validate_root(root: &Path) -> Result<()> {
    let metadata = fs::metadata(root).map_err(|source| CleanError::RootNotFound {
        path: root.to_path_buf(),
        source,
    })?;

    if metadata.is_dir() {
        Ok(())
    } else {
        Err(CleanError::RootNotDirectory(root.to_path_buf()))
    }
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
