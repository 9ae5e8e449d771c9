use std::fs;

use super::*;
use tempfile::TempDir;

#[test]
fn vanished_directory_fails_to_list() {
    let temp_dir = TempDir::new().unwrap();
    let gone = temp_dir.path().join("gone");

    let err = WalkDirLister.list_dirs(&gone).unwrap_err();

    assert_eq!(err.kind(), io::ErrorKind::NotFound);
}

#[test]
fn directories_are_sorted_by_name() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    for name in ["c", "a", "b"] {
        fs::create_dir(root.join(name)).unwrap();
    }

    let dirs = WalkDirLister.list_dirs(root).unwrap();

    assert_eq!(dirs, vec![root.join("a"), root.join("b"), root.join("c")]);
}

#[test]
fn files_are_left_out() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir(root.join("src")).unwrap();
    fs::write(root.join("bin"), "not a directory").unwrap();

    let dirs = WalkDirLister.list_dirs(root).unwrap();

    assert_eq!(dirs, vec![root.join("src")]);
}

#[cfg(unix)]
#[test]
fn symlinked_directories_are_left_out() {
    use std::os::unix::fs::symlink;

    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir(root.join("real")).unwrap();
    symlink(root.join("real"), root.join("link")).unwrap();

    let dirs = WalkDirLister.list_dirs(root).unwrap();

    assert_eq!(dirs, vec![root.join("real")]);
}
