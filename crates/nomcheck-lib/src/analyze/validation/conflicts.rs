use crate::analyze::names::NameTable;
use crate::diagnostics::{DiagnosticKind, DiagnosticSink};

/// One diagnostic per group of keys that differ only in case.
pub fn validate_conflicts(names: &NameTable<'_>, sink: &mut impl DiagnosticSink) {
    for (canonical, others) in names.conflicts() {
        let others: Vec<String> = others.iter().map(|n| n.to_string()).collect();
        sink.report(DiagnosticKind::ConflictingNames)
            .arg(canonical)
            .arg(others)
            .at(canonical)
            .emit();
    }
}
