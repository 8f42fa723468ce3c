//! Supertype existence check.
//!
//! Parses every `fulfills` entry and resolves its base name. Entries that
//! parse and resolve become edges of the [`FulfillsGraph`]; the rest are
//! reported and left out of it.

use nomcheck_core::HierarchyDef;

use super::graph::{Edge, FulfillsGraph};
use super::names::NameTable;
use crate::diagnostics::{DiagnosticKind, DiagnosticSink};
use crate::parser::parse_type;

pub fn validate_supertypes<'h>(
    def: &'h HierarchyDef,
    names: &NameTable<'h>,
    sink: &mut impl DiagnosticSink,
) -> FulfillsGraph<'h> {
    let mut graph = FulfillsGraph::new();

    for (name, decl) in def.iter() {
        let mut edges = Vec::with_capacity(decl.fulfills.len());

        for entry in &decl.fulfills {
            let expr = match parse_type(entry) {
                Ok(expr) => expr,
                Err(err) => {
                    tracing::trace!(type_name = name, entry = entry.as_str(), %err, "unparsable supertype");
                    sink.report(DiagnosticKind::MalformedSupertype)
                        .arg(name)
                        .arg(entry.as_str())
                        .arg(err)
                        .at_entry(name, entry)
                        .emit();
                    continue;
                }
            };

            match names.resolve(&expr.name) {
                Some(target) => edges.push(Edge {
                    text: entry.trim(),
                    target,
                }),
                None => sink
                    .report(DiagnosticKind::UndefinedSupertype)
                    .arg(name)
                    .arg(expr.name.as_str())
                    .at_entry(name, entry)
                    .emit(),
            }
        }

        graph.insert(name, edges);
    }

    graph
}
