//! # mkfile
//!
//! A lightweight utility for file creation and template generation from
//! `XDG_TEMPLATES_DIR`.
//!
//! The core flow is: resolve a template name (explicit argument or
//! interactive picker), copy the template bytes to each destination (or
//! create empty files when no template is requested), and fold the
//! per-destination outcomes into a single process exit status. Destinations
//! are processed strictly in the order supplied; a skipped destination is
//! reported and counted but never aborts the rest.
//!
//! ## Usage as a library
//!
//! ```no_run
//! use mkfile::fileops;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), mkfile::MkfileError> {
//! let dests = vec![PathBuf::from("notes.txt"), PathBuf::from("todo.txt")];
//! let status = fileops::create_empty_files(&dests, false, false)?;
//! assert!(status.is_success());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod errors;
pub mod exit;
pub mod fileops;
pub mod paths;
pub mod picker;
pub mod templates;
pub mod walker;

#[cfg(test)]
mod test_utils;

pub use crate::errors::MkfileError;
pub use crate::exit::ExitCode;
pub use crate::picker::PickerKind;
pub use crate::templates::TemplateChoice;

use crate::cli::CliArgs;

/// Runs one invocation: dispatches on the template selector and returns the
/// aggregate exit status.
pub fn run(args: &CliArgs) -> Result<ExitCode, MkfileError> {
    match &args.template {
        TemplateChoice::NoTemplate => {
            fileops::create_empty_files(&args.files, args.overwrite, args.parents)
        }
        choice => {
            let templates_dir = templates::templates_dir()?;

            let name = match choice {
                TemplateChoice::Named(name) => name.clone(),
                _ => templates::template_from_prompt(args.picker, args.height, &templates_dir)?,
            };

            templates::create_from_template(
                &templates_dir,
                &name,
                &args.files,
                args.overwrite,
                args.parents,
            )
        }
    }
}
