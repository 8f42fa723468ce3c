//! Hierarchy validation passes.
//!
//! Runs, in order, over a whole hierarchy:
//! - Shape check, untyped input only (shape)
//! - Case-insensitive name conflicts, illegal characters, generic-like names (validation)
//! - Supertype parsing and resolution (supertypes)
//! - Per-type cycle detection over resolved supertypes (cycles)
//!
//! Every finding goes to the caller's [`DiagnosticSink`]. Only a non-object
//! document stops the run early.

pub mod cycles;
pub mod graph;
pub mod names;
pub mod shape;
pub mod supertypes;
pub mod validation;

#[cfg(test)]
mod cycles_tests;
#[cfg(test)]
mod supertypes_tests;

use serde_json::Value;

use nomcheck_core::HierarchyDef;

pub use cycles::validate_cycles;
pub use graph::{Edge, FulfillsGraph};
pub use names::NameTable;
pub use shape::check_shape;
pub use supertypes::validate_supertypes;
pub use validation::{validate_characters, validate_conflicts, validate_generic_names};

use crate::diagnostics::DiagnosticSink;

/// Validate a typed hierarchy definition.
pub fn validate(def: &HierarchyDef, sink: &mut impl DiagnosticSink) {
    tracing::debug!(types = def.len(), "validating hierarchy");

    let names = NameTable::new(def);
    validate_conflicts(&names, sink);
    validate_characters(def, sink);
    validate_generic_names(def, sink);

    let graph = validate_supertypes(def, &names, sink);
    tracing::debug!(edges = graph.edge_count(), "resolved supertypes");

    validate_cycles(&graph, sink);
}

/// Validate an untyped JSON document, `None` standing for missing input.
pub fn validate_value(value: Option<&Value>, sink: &mut impl DiagnosticSink) {
    let Some(def) = check_shape(value, sink) else {
        tracing::debug!("hierarchy definition is not an object");
        return;
    };
    validate(&def, sink);
}
