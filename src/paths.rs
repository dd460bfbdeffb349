//! Symlink-aware path predicates.
//!
//! All predicates start from `symlink_metadata`, so a broken symlink counts
//! as existing and a symlink is never mistaken for the thing it points at.

use std::fs;
use std::path::Path;

/// True if anything occupies the path, broken symlinks included.
pub fn exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// True if the path is a regular file and not a symlink.
pub fn is_file(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|m| m.file_type().is_file())
        .unwrap_or(false)
}

/// True if the path is a directory and not a symlink.
pub fn is_dir(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|m| m.file_type().is_dir())
        .unwrap_or(false)
}

/// True if the path is a symlink, broken or not.
pub fn is_symlink(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false)
}

/// True if the path is a symlink whose target is a regular file.
pub fn is_symlink_to_file(path: &Path) -> bool {
    is_symlink(path) && fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

/// True if the path is a symlink whose target is a directory.
pub fn is_symlink_to_dir(path: &Path) -> bool {
    is_symlink(path) && fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}

/// True if the path is a symlink whose target does not exist.
pub fn is_broken_symlink(path: &Path) -> bool {
    is_symlink(path) && fs::metadata(path).is_err()
}
