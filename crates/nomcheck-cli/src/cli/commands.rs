//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("nomcheck")
        .about("Validate nominal type hierarchy definitions")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(parse_command())
}

/// Validate a hierarchy definition document.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate a hierarchy definition")
        .override_usage(
            "\
  nomcheck check <FILE>
  nomcheck check -
  nomcheck check -d <JSON>",
        )
        .after_help(
            r#"EXAMPLES:
  nomcheck check types.json                       # validate a file
  cat types.json | nomcheck check -               # read from stdin
  nomcheck check -d '{"a": {"fulfills": ["b"]}}'  # inline definition
  nomcheck check types.json --strict              # fail on warnings too
  nomcheck check types.json --format json         # machine-readable report"#,
        )
        .arg(hierarchy_path_arg())
        .arg(hierarchy_text_arg())
        .arg(strict_arg())
        .arg(format_arg())
        .arg(color_arg())
}

/// Parse a single type expression.
pub fn parse_command() -> Command {
    Command::new("parse")
        .about("Parse a type expression and show its structure")
        .after_help(
            r#"EXAMPLES:
  nomcheck parse 'typeB[typeC, typeD[typeE]]'
  nomcheck parse 'list[T' --format json"#,
        )
        .arg(expr_arg())
        .arg(format_arg())
        .arg(color_arg().hide(true))
}
