#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the binobj-clean binary.
#[macro_export]
macro_rules! binobj_clean {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("binobj-clean"))
    };
}

/// A temporary project tree for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content, creating parents as needed.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Creates a build output directory holding a couple of artifact files.
    pub fn create_artifact_dir(&self, relative_path: &str) {
        self.create_file(&format!("{relative_path}/App.dll"), "MZ");
        self.create_file(&format!("{relative_path}/Debug/App.pdb"), "pdb");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, relative_path: &str) -> PathBuf {
        self.dir.path().join(relative_path)
    }

    pub fn exists(&self, relative_path: &str) -> bool {
        self.join(relative_path).exists()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
