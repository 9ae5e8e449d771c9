use std::path::Path;

/// Directory names treated as build output.
pub const ARTIFACT_DIR_NAMES: [&str; 2] = ["bin", "obj"];

pub trait DirFilter {
    /// Returns true if the directory at `path` should be removed wholesale.
    fn should_remove(&self, path: &Path) -> bool;
}

/// Matches directories whose basename is exactly `bin` or `obj`.
///
/// The comparison is case-sensitive and never a substring match, so
/// `binary`, `cabinet` and `obj2` are left alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArtifactFilter;

impl ArtifactFilter {
    #[must_use]
    pub fn matches_str(path: &str) -> bool {
        ARTIFACT_DIR_NAMES.contains(&basename(path))
    }
}

impl DirFilter for ArtifactFilter {
    fn should_remove(&self, path: &Path) -> bool {
        Self::matches_str(&path.to_string_lossy())
    }
}

/// Final component of `path`, splitting on both `/` and `\`.
///
/// A path without any separator is its own basename; a trailing separator
/// yields an empty basename.
#[must_use]
pub fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
