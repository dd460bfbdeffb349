//! The two interactive template pickers.
//!
//! The fzf variant shells out to an external fuzzy finder; the menu variant
//! is a plain numbered prompt on stdin/stdout. Both take a list of option
//! strings and return exactly one chosen string.

use crate::errors::MkfileError;
use std::io::{self, BufRead, Write};
use std::num::NonZeroU32;
use std::process::{Command, Stdio};

/// Flags passed to fzf on every invocation, before the height.
pub const FZF_DEFAULT_FLAGS: [&str; 3] = ["--style=minimal", "--info=hidden", "--keep-right"];

/// Which picker implementation to use for interactive resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerKind {
    Fzf,
    Menu,
}

impl PickerKind {
    pub fn pick(self, options: &[String], height: NonZeroU32) -> Result<String, MkfileError> {
        match self {
            PickerKind::Fzf => fzf_prompt(options, height),
            PickerKind::Menu => menu_prompt(options),
        }
    }
}

/// Prompts via the external `fzf` process, feeding it the newline-joined
/// options on stdin.
///
/// A missing executable is [`MkfileError::PickerNotFound`]. fzf exiting with
/// 130 means the user cancelled and propagates as
/// [`MkfileError::Interrupted`]; any other nonzero exit is
/// [`MkfileError::PickerError`].
pub fn fzf_prompt(options: &[String], height: NonZeroU32) -> Result<String, MkfileError> {
    run_fuzzy_finder("fzf", options, height)
}

fn run_fuzzy_finder(
    program: &str,
    options: &[String],
    height: NonZeroU32,
) -> Result<String, MkfileError> {
    let mut child = Command::new(program)
        .args(FZF_DEFAULT_FLAGS)
        .arg(format!("--height=~{height}"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => MkfileError::PickerNotFound {
                program: program.to_string(),
            },
            _ => MkfileError::Io(err),
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        // fzf may exit before reading everything; that is not our error.
        if let Err(err) = stdin.write_all(options.join("\n").as_bytes()) {
            if err.kind() != io::ErrorKind::BrokenPipe {
                return Err(err.into());
            }
        }
    }

    let output = child.wait_with_output()?;

    match output.status.code() {
        Some(0) => {
            let selection = String::from_utf8_lossy(&output.stdout);
            Ok(selection.trim_end_matches('\n').to_string())
        }
        Some(130) => Err(MkfileError::Interrupted),
        _ => Err(MkfileError::PickerError {
            program: program.to_string(),
        }),
    }
}

/// Prompts with a 1-based numbered menu on stdin/stdout. Re-prompts without
/// bound until a line parses as an integer within the option range; the only
/// ways out are a valid choice, end of input, or an interrupt.
pub fn menu_prompt(options: &[String]) -> Result<String, MkfileError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    menu_prompt_from(options, &mut stdin.lock(), &mut stdout.lock())
}

fn menu_prompt_from<R, W>(
    options: &[String],
    input: &mut R,
    output: &mut W,
) -> Result<String, MkfileError>
where
    R: BufRead,
    W: Write,
{
    // Display order is sorted; the caller's list is left as supplied.
    let mut sorted: Vec<&String> = options.iter().collect();
    sorted.sort();

    for (index, option) in sorted.iter().enumerate() {
        writeln!(output, "[{}]: {}", index + 1, option)?;
    }

    loop {
        write!(output, "Choose a template: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // Closed input stream behaves like Ctrl-C.
            return Err(MkfileError::Interrupted);
        }

        match line.trim().parse::<usize>() {
            Ok(choice) if (1..=sorted.len()).contains(&choice) => {
                return Ok(sorted[choice - 1].to_string());
            }
            _ => writeln!(output, "Please insert a valid input")?,
        }
    }
}
