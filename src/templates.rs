use crate::errors::MkfileError;
use crate::exit::ExitCode;
use crate::fileops;
use crate::picker::PickerKind;
use crate::walker;
use log::debug;
use std::env;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// The three-state template selector from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateChoice {
    /// No template flag: create empty files.
    NoTemplate,
    /// `--template NAME`: use that template without prompting.
    Named(String),
    /// `--template` with no value: resolve interactively.
    PromptRequested,
}

/// Resolves the templates directory: `$XDG_TEMPLATES_DIR` when set,
/// otherwise `$HOME/Templates`. Resolved once per invocation; the directory
/// itself is only touched when a listing is needed.
pub fn templates_dir() -> Result<PathBuf, MkfileError> {
    if let Some(dir) = env::var_os("XDG_TEMPLATES_DIR") {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }

    match env::var_os("HOME") {
        Some(home) if !home.is_empty() => Ok(PathBuf::from(home).join("Templates")),
        _ => Err(MkfileError::Config(
            "neither XDG_TEMPLATES_DIR nor HOME is set".into(),
        )),
    }
}

/// Lists the templates directory and hands the result to the chosen picker.
///
/// A missing or non-directory templates dir and an empty listing both fail
/// with [`MkfileError::NoTemplatesAvailable`]; the caller never needs to
/// tell the two apart.
pub fn template_from_prompt(
    picker: PickerKind,
    height: NonZeroU32,
    templates_dir: &Path,
) -> Result<String, MkfileError> {
    let available = list_templates(templates_dir)?;
    debug!("{} templates available in {:?}", available.len(), templates_dir);
    picker.pick(&available, height)
}

fn list_templates(templates_dir: &Path) -> Result<Vec<String>, MkfileError> {
    let available = match walker::list_files(templates_dir) {
        Ok(entries) => entries,
        Err(MkfileError::InvalidPath { .. }) => {
            return Err(MkfileError::NoTemplatesAvailable(
                "could not find template directory".into(),
            ))
        }
        Err(err) => return Err(err),
    };

    if available.is_empty() {
        return Err(MkfileError::NoTemplatesAvailable("no templates found".into()));
    }

    Ok(available)
}

/// Copies the named template to every destination. Existence of the
/// template is checked here, at copy time: a missing copy source surfaces as
/// [`MkfileError::TemplateNotFound`] carrying the template name.
pub fn create_from_template(
    templates_dir: &Path,
    name: &str,
    dests: &[PathBuf],
    overwrite: bool,
    parents: bool,
) -> Result<ExitCode, MkfileError> {
    let template_path = templates_dir.join(name);

    match fileops::copy_file(&template_path, dests, overwrite, parents) {
        Err(MkfileError::SourceNotFound { .. }) => Err(MkfileError::TemplateNotFound {
            name: name.to_string(),
        }),
        other => other,
    }
}

/// Prints the available templates, sorted, with a colored header.
pub fn print_available(templates_dir: &Path) -> Result<(), MkfileError> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    write_available(templates_dir, &mut stdout)
}

fn write_available<W: WriteColor>(templates_dir: &Path, writer: &mut W) -> Result<(), MkfileError> {
    let mut available = list_templates(templates_dir)?;
    available.sort();

    // Coloring is best-effort; the writes themselves are not.
    let _ = writer.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true));
    let header = writeln!(writer, "templates in {}:", templates_dir.display());
    let _ = writer.reset();
    header.map_err(MkfileError::Io)?;

    for template in &available {
        writeln!(writer, "{template}").map_err(MkfileError::Io)?;
    }

    Ok(())
}
