//! The file operations engine.
//!
//! Both operations process destinations strictly in caller order and never
//! abort on a per-destination skip: the skip is reported to stderr, counted
//! against the aggregate status, and processing continues. Only structural
//! failures (bad source, unexpected I/O errors) abort the invocation.

use crate::errors::MkfileError;
use crate::exit::ExitCode;
use crate::paths;
use log::info;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// What happened at one destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Created,
    Overwritten,
    SkippedExists,
    SkippedMissingParent,
}

impl Outcome {
    /// Contribution to the aggregate status: skips count as failure.
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Created | Outcome::Overwritten => ExitCode::SUCCESS,
            Outcome::SkippedExists | Outcome::SkippedMissingParent => ExitCode::FAILURE,
        }
    }
}

/// Removes whatever occupies `path`: a regular file, a symlink (broken ones
/// included), or an entire directory subtree. Missing paths are not an
/// error, so the caller always gets a clean slot.
pub fn remove_path(path: &Path) -> io::Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(err) => return Err(err),
    };

    if metadata.file_type().is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

/// A destination's parent, with the empty parent of a bare file name
/// resolving to the current directory.
fn parent_of(dest: &Path) -> PathBuf {
    match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

enum Slot {
    /// The destination path is empty and its parents exist.
    Ready { existed: bool },
    Skipped(Outcome),
}

/// Applies the overwrite and parent-creation policy to one destination and,
/// when allowed, clears the path and creates the parent chain.
fn prepare_slot(dest: &Path, overwrite: bool, parents: bool) -> Result<Slot, MkfileError> {
    if paths::exists(dest) && !overwrite {
        eprintln!("destination {} already exists", dest.display());
        return Ok(Slot::Skipped(Outcome::SkippedExists));
    }

    let parent = parent_of(dest);
    if !(paths::is_dir(&parent) || paths::is_symlink_to_dir(&parent)) && !parents {
        eprintln!("parent dir {} does not exist", parent.display());
        return Ok(Slot::Skipped(Outcome::SkippedMissingParent));
    }

    let existed = paths::exists(dest);
    remove_path(dest)?;
    fs::create_dir_all(&parent)?;

    Ok(Slot::Ready { existed })
}

/// Creates empty files at every destination, honoring the overwrite and
/// parent-creation policy per destination.
///
/// Returns the aggregate status: 0 only if every destination succeeded, 1
/// if one or more were skipped.
pub fn create_empty_files(
    dests: &[PathBuf],
    overwrite: bool,
    parents: bool,
) -> Result<ExitCode, MkfileError> {
    let mut outcomes = Vec::with_capacity(dests.len());

    for dest in dests {
        let outcome = match prepare_slot(dest, overwrite, parents)? {
            Slot::Skipped(outcome) => outcome,
            Slot::Ready { existed } => {
                // create_new: the prior removal guarantees a clean slot, and
                // this refuses to succeed silently if it did not.
                OpenOptions::new().write(true).create_new(true).open(dest)?;
                info!("created empty file {:?}", dest);
                if existed {
                    Outcome::Overwritten
                } else {
                    Outcome::Created
                }
            }
        };
        outcomes.push(outcome);
    }

    Ok(ExitCode::aggregate(
        outcomes.into_iter().map(Outcome::exit_code),
    ))
}

/// Copies `src` to every destination, honoring the overwrite and
/// parent-creation policy per destination.
///
/// The source must exist and be a regular file or a symlink to one; this is
/// checked once up front. A path with no entry at all (not even a symlink)
/// is [`MkfileError::SourceNotFound`]; anything else of the wrong kind,
/// broken symlinks included, is [`MkfileError::InvalidSource`]. Source-side
/// symlinks are followed, so the destination receives the target's bytes.
pub fn copy_file(
    src: &Path,
    dests: &[PathBuf],
    overwrite: bool,
    parents: bool,
) -> Result<ExitCode, MkfileError> {
    if !paths::exists(src) {
        return Err(MkfileError::SourceNotFound {
            path: src.to_path_buf(),
        });
    }
    if !(paths::is_file(src) || paths::is_symlink_to_file(src)) {
        return Err(MkfileError::InvalidSource {
            path: src.to_path_buf(),
        });
    }

    let mut outcomes = Vec::with_capacity(dests.len());

    for dest in dests {
        let outcome = match prepare_slot(dest, overwrite, parents)? {
            Slot::Skipped(outcome) => outcome,
            Slot::Ready { existed } => {
                fs::copy(src, dest)?;
                info!("copied {:?} to {:?}", src, dest);
                if existed {
                    Outcome::Overwritten
                } else {
                    Outcome::Created
                }
            }
        };
        outcomes.push(outcome);
    }

    Ok(ExitCode::aggregate(
        outcomes.into_iter().map(Outcome::exit_code),
    ))
}
