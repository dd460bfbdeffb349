use crate::picker::PickerKind;
use crate::templates::TemplateChoice;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::num::NonZeroU32;
use std::path::PathBuf;

/// Builds the clap command definition.
///
/// The builtin version flag is disabled: `--version` here is an
/// informational exit with status 1, handled by `main`.
pub fn build_cli() -> Command {
    Command::new("mkfile")
        .about("A lightweight utility for file creation and template generation from XDG_TEMPLATES_DIR")
        .disable_version_flag(true)
        .arg(
            Arg::new("files")
                .value_name("FILE")
                .num_args(1..)
                .help("paths to files to create"),
        )
        .arg(
            Arg::new("template")
                .short('t')
                .long("template")
                .value_name("NAME")
                .num_args(0..=1)
                .help("template to generate; if no template is provided, it will prompt for one"),
        )
        .arg(
            Arg::new("picker")
                .short('p')
                .long("picker")
                .value_name("PICKER")
                .value_parser(["fzf", "menu"])
                .default_value("menu")
                .help("which template picker to use; `fzf` must be present in PATH for the fzf picker"),
        )
        .arg(
            Arg::new("height")
                .short('H')
                .long("height")
                .value_name("N")
                .value_parser(clap::value_parser!(u32).range(1..))
                .default_value("10")
                .help("height of the fzf window if fzf is used as template picker"),
        )
        .arg(
            Arg::new("parents")
                .short('P')
                .long("parents")
                .action(ArgAction::SetTrue)
                .help("create missing parent directories"),
        )
        .arg(
            Arg::new("overwrite")
                .short('o')
                .long("overwrite")
                .action(ArgAction::SetTrue)
                .help("overwrite destinations that already exist"),
        )
        .arg(
            Arg::new("list")
                .short('l')
                .long("list")
                .action(ArgAction::SetTrue)
                .help("list available templates and exit"),
        )
        .arg(
            Arg::new("version")
                .short('V')
                .long("version")
                .action(ArgAction::SetTrue)
                .help("print version and exit"),
        )
}

/// The parsed invocation, with the template selector already lifted into
/// [`TemplateChoice`] so no sentinel value leaks past this boundary.
#[derive(Debug, Clone)]
pub struct CliArgs {
    pub files: Vec<PathBuf>,
    pub template: TemplateChoice,
    pub picker: PickerKind,
    pub height: NonZeroU32,
    pub parents: bool,
    pub overwrite: bool,
    pub list: bool,
    pub version: bool,
}

impl CliArgs {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let files = matches
            .get_many::<String>("files")
            .map(|values| values.map(PathBuf::from).collect())
            .unwrap_or_default();

        // Bare `--template` carries no value; an explicitly empty value is
        // not a template name and falls back to empty-file creation.
        let template = match matches.get_one::<String>("template") {
            Some(name) if !name.is_empty() => TemplateChoice::Named(name.clone()),
            Some(_) => TemplateChoice::NoTemplate,
            None if matches.contains_id("template") => TemplateChoice::PromptRequested,
            None => TemplateChoice::NoTemplate,
        };

        let picker = match matches.get_one::<String>("picker").map(String::as_str) {
            Some("fzf") => PickerKind::Fzf,
            _ => PickerKind::Menu,
        };

        // The value parser already rejects zero.
        let height = matches
            .get_one::<u32>("height")
            .copied()
            .and_then(NonZeroU32::new)
            .unwrap_or(NonZeroU32::MIN);

        Self {
            files,
            template,
            picker,
            height,
            parents: matches.get_flag("parents"),
            overwrite: matches.get_flag("overwrite"),
            list: matches.get_flag("list"),
            version: matches.get_flag("version"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        let mut full_args = vec!["mkfile"];
        full_args.extend(args);
        let matches = build_cli().try_get_matches_from(full_args).unwrap();
        CliArgs::from_matches(&matches)
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["out.txt"]);

        assert_eq!(args.files, vec![PathBuf::from("out.txt")]);
        assert_eq!(args.template, TemplateChoice::NoTemplate);
        assert_eq!(args.picker, PickerKind::Menu);
        assert_eq!(args.height.get(), 10);
        assert!(!args.parents);
        assert!(!args.overwrite);
        assert!(!args.list);
        assert!(!args.version);
    }

    #[test]
    fn test_multiple_files_keep_their_order() {
        let args = parse(&["b.txt", "a.txt", "c.txt"]);
        assert_eq!(
            args.files,
            vec![
                PathBuf::from("b.txt"),
                PathBuf::from("a.txt"),
                PathBuf::from("c.txt"),
            ]
        );
    }

    #[test]
    fn test_template_with_a_name() {
        let args = parse(&["-t", "script.py", "out.py"]);
        assert_eq!(args.template, TemplateChoice::Named("script.py".into()));
    }

    #[test]
    fn test_template_flag_without_a_value_requests_a_prompt() {
        // The flag is greedy, so a bare `--template` goes after the files.
        let args = parse(&["out.py", "--template"]);
        assert_eq!(args.files, vec![PathBuf::from("out.py")]);
        assert_eq!(args.template, TemplateChoice::PromptRequested);
    }

    #[test]
    fn test_template_with_an_explicitly_empty_value_means_no_template() {
        // An empty name is not a template; only the bare flag prompts.
        let args = parse(&["--template=", "out.py"]);
        assert_eq!(args.template, TemplateChoice::NoTemplate);

        let args = parse(&["-t", "", "out.py"]);
        assert_eq!(args.template, TemplateChoice::NoTemplate);
        assert_eq!(args.files, vec![PathBuf::from("out.py")]);
    }

    #[test]
    fn test_template_with_equals_value() {
        let args = parse(&["--template=script.py", "out.py"]);
        assert_eq!(args.template, TemplateChoice::Named("script.py".into()));
        assert_eq!(args.files, vec![PathBuf::from("out.py")]);
    }

    #[test]
    fn test_picker_selection() {
        let args = parse(&["-p", "fzf", "out.txt"]);
        assert_eq!(args.picker, PickerKind::Fzf);

        let args = parse(&["--picker", "menu", "out.txt"]);
        assert_eq!(args.picker, PickerKind::Menu);
    }

    #[test]
    fn test_unknown_picker_is_rejected() {
        let result = build_cli().try_get_matches_from(["mkfile", "-p", "rofi", "out.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_height_must_be_positive() {
        let result = build_cli().try_get_matches_from(["mkfile", "-H", "0", "out.txt"]);
        assert!(result.is_err());

        let args = parse(&["-H", "25", "out.txt"]);
        assert_eq!(args.height.get(), 25);
    }

    #[test]
    fn test_policy_flags() {
        let args = parse(&["-P", "-o", "a/b.txt"]);
        assert!(args.parents);
        assert!(args.overwrite);
    }

    #[test]
    fn test_informational_flags_do_not_require_files() {
        let args = parse(&["--version"]);
        assert!(args.version);
        assert!(args.files.is_empty());

        let args = parse(&["--list"]);
        assert!(args.list);
        assert!(args.files.is_empty());
    }
}
