//! Shape check for untyped input.
//!
//! Converts a raw JSON document into a [`HierarchyDef`] entry by entry, so one
//! malformed declaration does not hide findings about the others.

use serde_json::Value;

use nomcheck_core::{HierarchyDef, TypeDecl};

use crate::diagnostics::{DiagnosticKind, DiagnosticSink};

/// Returns `None` when the document is not an object; validation stops there.
pub fn check_shape(value: Option<&Value>, sink: &mut impl DiagnosticSink) -> Option<HierarchyDef> {
    let Some(Value::Object(map)) = value else {
        sink.report(DiagnosticKind::NotAnObject).emit();
        return None;
    };

    let mut def = HierarchyDef::new();
    for (name, entry) in map {
        let decl = match TypeDecl::from_value(entry) {
            Ok(decl) => decl,
            Err(err) => {
                sink.report(DiagnosticKind::MalformedDeclaration)
                    .arg(name.as_str())
                    .arg(err.to_string())
                    .at(name)
                    .emit();
                TypeDecl::new()
            }
        };
        def.insert(name.as_str(), decl);
    }
    Some(def)
}
