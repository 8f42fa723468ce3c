use nomcheck_core::{HierarchyDef, TypeDecl};

use super::validate_conflicts;
use crate::analyze::names::NameTable;
use crate::diagnostics::{DiagnosticArg, DiagnosticKind, Diagnostics};

fn check(names: &[&str]) -> Diagnostics {
    let def: HierarchyDef = names
        .iter()
        .map(|n| (n.to_string(), TypeDecl::new()))
        .collect();
    let mut diagnostics = Diagnostics::new();
    validate_conflicts(&NameTable::new(&def), &mut diagnostics);
    diagnostics
}

#[test]
fn one_diagnostic_per_group() {
    let diagnostics = check(&["typeA", "TypeA", "Typea"]);

    assert_eq!(diagnostics.len(), 1);
    let diag = &diagnostics.as_slice()[0];
    assert_eq!(diag.kind(), DiagnosticKind::ConflictingNames);
    assert!(diag.is_error());
    assert_eq!(diag.args()[0], DiagnosticArg::from("typeA"));
    assert_eq!(
        diag.args()[1].as_list(),
        Some(&["TypeA".to_string(), "Typea".to_string()][..])
    );
    insta::assert_snapshot!(
        diag.message(),
        @"The type name 'typeA' conflicts with the type name(s) ['TypeA', 'Typea']"
    );
}

#[test]
fn separate_groups_report_separately() {
    let diagnostics = check(&["b", "a", "B", "other", "A"]);

    insta::assert_snapshot!(diagnostics.printer().render().trim_end(), @r"
    error: The type name 'b' conflicts with the type name(s) ['B']
    error: The type name 'a' conflicts with the type name(s) ['A']
    ");
}

#[test]
fn distinct_names_do_not_conflict() {
    assert!(check(&["typeA", "typeB", "typeAB"]).is_empty());
}
