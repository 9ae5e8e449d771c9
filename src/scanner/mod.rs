mod directory;
mod filter;
mod lister;
mod types;

pub use directory::DirectoryScanner;
pub use filter::{ARTIFACT_DIR_NAMES, ArtifactFilter, DirFilter, basename};
pub use lister::{DirLister, WalkDirLister};
pub use types::ScanResult;
