//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Hierarchy definition file, or `-` for stdin (positional).
pub fn hierarchy_path_arg() -> Arg {
    Arg::new("hierarchy_path")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Hierarchy definition file (JSON), or - for stdin")
}

/// Inline hierarchy definition (-d/--definition).
pub fn hierarchy_text_arg() -> Arg {
    Arg::new("hierarchy_text")
        .short('d')
        .long("definition")
        .value_name("JSON")
        .conflicts_with("hierarchy_path")
        .help("Inline hierarchy definition")
}

/// Type expression to parse (positional, required).
pub fn expr_arg() -> Arg {
    Arg::new("expr")
        .value_name("EXPR")
        .required(true)
        .help("Type expression, e.g. 'typeB[typeC, typeD]'")
}

/// Treat warnings as errors (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat warnings as errors")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Output format (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("text")
        .value_parser(["text", "json"])
        .help("Output format")
}
