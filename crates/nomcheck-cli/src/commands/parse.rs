use serde::Serialize;

use nomcheck_lib::{ParseError, TypeExpr, parse_type};

use super::OutputFormat;

pub struct ParseArgs {
    pub expr: String,
    pub format: OutputFormat,
}

#[derive(Serialize)]
#[serde(untagged)]
enum ParseReport<'a> {
    Ok { expr: &'a TypeExpr },
    Err { error: &'a ParseError },
}

pub fn run(args: ParseArgs) {
    let result = parse_type(&args.expr);

    match args.format {
        OutputFormat::Json => {
            let report = match &result {
                Ok(expr) => ParseReport::Ok { expr },
                Err(error) => ParseReport::Err { error },
            };
            match serde_json::to_string_pretty(&report) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("error: failed to serialize result: {e}");
                    std::process::exit(1);
                }
            }
        }
        OutputFormat::Text => match &result {
            Ok(expr) => print!("{}", expr.dump()),
            Err(err) => eprint!("{}", render_error(&args.expr, err)),
        },
    }

    if result.is_err() {
        std::process::exit(1);
    }
}

/// The error message, the input, and a caret under the offending offset.
pub fn render_error(input: &str, err: &ParseError) -> String {
    let offset = usize::from(err.offset()).min(input.len());
    let column = input
        .get(..offset)
        .map(|prefix| prefix.chars().count())
        .unwrap_or(offset);
    let width = usize::from(err.range().len()).max(1);

    format!(
        "error: {err}\n  {input}\n  {}{}\n",
        " ".repeat(column),
        "^".repeat(width)
    )
}
