use clap::error::ErrorKind;
use mkfile::cli::{self, CliArgs};
use mkfile::{templates, ExitCode, MkfileError};
use std::process;

const PROG: &str = "mkfile";

fn main() {
    env_logger::init();

    let mut cmd = cli::build_cli();
    let matches = cmd.get_matches_mut();
    let args = CliArgs::from_matches(&matches);

    if args.version {
        println!("{} {}", PROG, env!("CARGO_PKG_VERSION"));
        process::exit(ExitCode::FAILURE.code());
    }

    if args.list {
        let listed = templates::templates_dir().and_then(|dir| templates::print_available(&dir));
        let status = match listed {
            Ok(()) => ExitCode::FAILURE.code(),
            Err(err) => report_error(err),
        };
        process::exit(status);
    }

    if args.files.is_empty() {
        cmd.error(
            ErrorKind::MissingRequiredArgument,
            "the following arguments are required: <FILE>...",
        )
        .exit();
    }

    match mkfile::run(&args) {
        Ok(code) => process::exit(code.code()),
        Err(err) => process::exit(report_error(err)),
    }
}

/// Maps a tool error to its exit status, printing the diagnostic unless the
/// user interrupted.
fn report_error(err: MkfileError) -> i32 {
    if err.is_interrupt() {
        return ExitCode::INTERRUPT.code();
    }

    eprintln!("{PROG}: {err}");
    ExitCode::FAILURE.code()
}
