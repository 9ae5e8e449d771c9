use std::path::PathBuf;

use crate::error::ListingError;

/// Outcome of a breadth-first scan.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Matched directories in discovery order.
    pub candidates: Vec<PathBuf>,
    /// Directories whose listing failed; their subtrees were not inspected.
    pub skipped: Vec<ListingError>,
    /// Number of directories whose children were listed (or attempted).
    pub visited: usize,
    /// Set when Ctrl-C stopped the scan; the candidate list is incomplete.
    pub interrupted: bool,
}

impl ScanResult {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }
}
