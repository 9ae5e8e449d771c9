use std::io;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

/// Enumerates the subdirectories of one directory.
///
/// The scanner goes through this seam for every directory it visits, so a
/// listing failure can be injected in tests without filesystem permissions.
pub trait DirLister {
    /// Subdirectories directly under `dir`, in visiting order. Files and
    /// symlinks are left out.
    ///
    /// # Errors
    /// Returns an error if any entry cannot be read; a partial listing is
    /// never returned.
    fn list_dirs(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;
}

/// Lists one level with `walkdir`, sorted by file name, without following
/// symlinks.
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkDirLister;

impl DirLister for WalkDirLister {
    fn list_dirs(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let entries = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .collect::<Result<Vec<_>, walkdir::Error>>()?;

        // Symlinks report their own type here and are never followed.
        Ok(entries
            .into_iter()
            .filter(|entry| entry.file_type().is_dir())
            .map(DirEntry::into_path)
            .collect())
    }
}

#[cfg(test)]
#[path = "lister_tests.rs"]
mod tests;
