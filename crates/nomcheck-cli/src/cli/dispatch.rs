//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::OutputFormat;
use crate::commands::check::CheckArgs;
use crate::commands::parse::ParseArgs;

pub struct CheckParams {
    pub hierarchy_path: Option<PathBuf>,
    pub hierarchy_text: Option<String>,
    pub strict: bool,
    pub format: OutputFormat,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            hierarchy_path: m.get_one::<PathBuf>("hierarchy_path").cloned(),
            hierarchy_text: m.get_one::<String>("hierarchy_text").cloned(),
            strict: m.get_flag("strict"),
            format: parse_format(m),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            hierarchy_path: p.hierarchy_path,
            hierarchy_text: p.hierarchy_text,
            strict: p.strict,
            format: p.format,
            color: p.color.should_colorize(),
        }
    }
}

pub struct ParseParams {
    pub expr: String,
    pub format: OutputFormat,
    // Note: color is accepted but unused (tree output is uncolored)
}

impl ParseParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            expr: m.get_one::<String>("expr").cloned().unwrap_or_default(),
            format: parse_format(m),
        }
    }
}

impl From<ParseParams> for ParseArgs {
    fn from(p: ParseParams) -> Self {
        Self {
            expr: p.expr,
            format: p.format,
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(String::as_str) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_format(m: &ArgMatches) -> OutputFormat {
    match m.get_one::<String>("format").map(String::as_str) {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Text,
    }
}
