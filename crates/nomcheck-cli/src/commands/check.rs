use std::path::PathBuf;

use serde::Serialize;

use nomcheck_lib::{Diagnostics, Error, check_json};

use super::OutputFormat;
use super::hierarchy_loader::{HierarchySource, load_hierarchy_source};

pub struct CheckArgs {
    pub hierarchy_path: Option<PathBuf>,
    pub hierarchy_text: Option<String>,
    pub strict: bool,
    pub format: OutputFormat,
    pub color: bool,
}

/// What a check run prints, and whether it passed.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CheckOutcome {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    source: &'a str,
    valid: bool,
    errors: usize,
    warnings: usize,
    diagnostics: &'a Diagnostics,
}

pub fn run(args: CheckArgs) {
    let source = match load_hierarchy_source(
        args.hierarchy_path.as_deref(),
        args.hierarchy_text.as_deref(),
    ) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let outcome = check_source(&source, &args);
    print!("{}", outcome.stdout);
    eprint!("{}", outcome.stderr);

    if !outcome.success {
        std::process::exit(1);
    }
    // Silent on success (like cargo check)
}

pub fn check_source(source: &HierarchySource, args: &CheckArgs) -> CheckOutcome {
    let diagnostics = match check_json(&source.text) {
        Ok(diagnostics) => diagnostics,
        Err(e) => {
            return CheckOutcome {
                stderr: format!("error: {}: {}\n", source.name, e),
                ..CheckOutcome::default()
            };
        }
    };

    let (valid, diagnostics, summary) = match diagnostics.ensure_valid(args.strict) {
        Ok(diagnostics) => (true, diagnostics, None),
        Err(err) => {
            let summary = err.to_string();
            match err {
                Error::Invalid(diagnostics) => (false, diagnostics, Some(summary)),
                other => {
                    return CheckOutcome {
                        stderr: format!("error: {}: {}\n", source.name, other),
                        ..CheckOutcome::default()
                    };
                }
            }
        }
    };
    tracing::debug!(
        errors = diagnostics.error_count(),
        warnings = diagnostics.warning_count(),
        valid,
        "checked {}",
        source.name
    );

    match args.format {
        OutputFormat::Json => {
            let report = Report {
                source: &source.name,
                valid,
                errors: diagnostics.error_count(),
                warnings: diagnostics.warning_count(),
                diagnostics: &diagnostics,
            };
            match serde_json::to_string_pretty(&report) {
                Ok(json) => CheckOutcome {
                    stdout: format!("{json}\n"),
                    stderr: String::new(),
                    success: valid,
                },
                Err(e) => CheckOutcome {
                    stderr: format!("error: failed to serialize report: {e}\n"),
                    ..CheckOutcome::default()
                },
            }
        }
        OutputFormat::Text => {
            let mut stderr = if diagnostics.is_empty() {
                String::new()
            } else {
                diagnostics
                    .printer()
                    .source(&source.text)
                    .path(&source.name)
                    .colored(args.color)
                    .render()
            };
            if let Some(summary) = summary {
                if !stderr.is_empty() && !stderr.ends_with('\n') {
                    stderr.push('\n');
                }
                stderr.push_str(&format!("error: {summary}\n"));
            }
            CheckOutcome {
                stdout: String::new(),
                stderr,
                success: valid,
            }
        }
    }
}
