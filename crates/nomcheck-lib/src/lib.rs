//! nomcheck: validator for nominal type hierarchy definitions.
//!
//! # Example
//!
//! ```
//! let source = r#"{
//!     "typeA": { "fulfills": ["typeB[typeC]"] },
//!     "typeB": { "params": [{ "name": "T", "variance": "co" }] },
//!     "typeC": { "fulfills": ["typeA"] }
//! }"#;
//!
//! let diagnostics = nomcheck_lib::check_json(source).expect("valid JSON");
//! assert!(diagnostics.is_empty());
//! eprintln!("{}", diagnostics.printer().source(source).render());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod analyze;
pub mod diagnostics;
pub mod parser;


pub use analyze::{validate, validate_value};
pub use diagnostics::{
    DiagnosticKind, DiagnosticMessage, DiagnosticSink, Diagnostics, DiagnosticsPrinter, Severity,
    TracingSink,
};
pub use nomcheck_core::{HierarchyDef, ParamDecl, TypeDecl, Variance};
pub use parser::{ParseError, TypeExpr, parse_type};

/// Errors from the outer conveniences. Validation findings themselves are
/// never errors; they go to a [`DiagnosticSink`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(
        "hierarchy validation failed with {} errors and {} warnings",
        .0.error_count(),
        .0.warning_count()
    )]
    Invalid(Diagnostics),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Parse a JSON document and validate it.
///
/// Only malformed JSON is an `Err`; a well-formed document of the wrong shape
/// yields the shape diagnostic.
pub fn check_json(source: &str) -> Result<Diagnostics> {
    let value: serde_json::Value = serde_json::from_str(source)?;
    let mut diagnostics = Diagnostics::new();
    validate_value(Some(&value), &mut diagnostics);
    Ok(diagnostics)
}
