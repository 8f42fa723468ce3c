use nomcheck_core::HierarchyDef;

use crate::diagnostics::{DiagnosticKind, DiagnosticSink};

/// Single-character names (letters, digits or symbols) act as generic
/// placeholders in connection checks.
pub fn is_generic_like(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some() && chars.next().is_none()
}

pub fn validate_generic_names(def: &HierarchyDef, sink: &mut impl DiagnosticSink) {
    for name in def.names().filter(|n| is_generic_like(n)) {
        sink.report(DiagnosticKind::SingleCharacterName)
            .arg(name)
            .at(name)
            .emit();
    }
}
