use crate::errors::MkfileError;
use crate::paths;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Lists all non-hidden files under `root`, recursively, as paths relative
/// to `root`.
///
/// Dot-prefixed directories are pruned as whole subtrees, not filtered at
/// the leaf, so a plain-named file inside a hidden directory never appears.
/// Symlinks to files are listed as regular entries and symlinks to
/// directories are traversed. Entries that cannot be read are skipped.
/// Iteration order is not significant; callers sort for display.
///
/// Fails with [`MkfileError::InvalidPath`] if `root` is not a directory or
/// a symlink to one.
pub fn list_files(root: &Path) -> Result<Vec<String>, MkfileError> {
    if !(paths::is_dir(root) || paths::is_symlink_to_dir(root)) {
        return Err(MkfileError::InvalidPath {
            path: root.to_path_buf(),
        });
    }

    let mut result = Vec::new();

    let walk = WalkDir::new(root)
        .follow_links(true)
        .min_depth(1)
        .into_iter()
        .filter_entry(|entry| !is_hidden(entry));

    for entry in walk.filter_map(|entry| entry.ok()) {
        if entry.file_type().is_file() {
            // strip_prefix cannot fail: every entry is under `root`.
            if let Ok(relative) = entry.path().strip_prefix(root) {
                result.push(relative.to_string_lossy().into_owned());
            }
        }
    }

    Ok(result)
}
