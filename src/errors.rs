use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The single error kind for the whole tool.
///
/// Every structural failure aborts the invocation and maps to exit status 1,
/// except [`MkfileError::Interrupted`] which maps to 130. Per-destination
/// skips are never raised through this type; they are printed to stderr and
/// folded into the aggregate [`crate::ExitCode`].
#[derive(Debug, Error)]
pub enum MkfileError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("given path {path:?} is not a directory or link to directory")]
    InvalidPath { path: PathBuf },

    #[error("{0}")]
    NoTemplatesAvailable(String),

    #[error("source {path:?} does not exist")]
    SourceNotFound { path: PathBuf },

    #[error("source {path:?} is not a file or a link to file")]
    InvalidSource { path: PathBuf },

    #[error("template {name} not found")]
    TemplateNotFound { name: String },

    #[error("`{program}` is not found in PATH")]
    PickerNotFound { program: String },

    #[error("`{program}` returned a non-zero exit code")]
    PickerError { program: String },

    #[error("interrupted")]
    Interrupted,
}

impl MkfileError {
    /// True for user cancellation, which bypasses the normal error print
    /// and takes the fixed interrupt exit status.
    pub fn is_interrupt(&self) -> bool {
        matches!(self, MkfileError::Interrupted)
    }
}
