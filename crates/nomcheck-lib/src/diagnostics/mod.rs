//! Validation findings: kinds, messages, sinks and rendering.
//!
//! Every finding has a kind, a severity derived from the kind, a message
//! template with positional `%s` arguments, and optionally the location in
//! the hierarchy document it refers to.

mod collection;
mod message;
mod printer;
mod sink;


pub use collection::Diagnostics;
pub use message::{DiagnosticArg, DiagnosticKind, DiagnosticMessage, Location, Severity};
pub use printer::DiagnosticsPrinter;
pub use sink::{DiagnosticBuilder, DiagnosticSink, TracingSink};
