use nomcheck_core::{HierarchyDef, TypeDecl};

use super::graph::Edge;
use super::names::NameTable;
use super::supertypes::validate_supertypes;
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::parser::ParseError;

#[test]
fn resolves_case_insensitively() {
    let def = HierarchyDef::new()
        .with("typeA", TypeDecl::new().fulfills("TypeB"))
        .with("typeB", TypeDecl::new());
    let mut diagnostics = Diagnostics::new();
    let graph = validate_supertypes(&def, &NameTable::new(&def), &mut diagnostics);

    assert!(diagnostics.is_empty());
    assert_eq!(
        graph.edges("typeA"),
        &[Edge {
            text: "TypeB",
            target: "typeB"
        }]
    );
    assert!(graph.edges("typeB").is_empty());
}

#[test]
fn base_name_of_generic_entry_is_resolved() {
    let def = HierarchyDef::new()
        .with("typeA", TypeDecl::new().fulfills(" list[typeA] "))
        .with("list", TypeDecl::new());
    let mut diagnostics = Diagnostics::new();
    let graph = validate_supertypes(&def, &NameTable::new(&def), &mut diagnostics);

    assert!(diagnostics.is_empty());
    assert_eq!(graph.edges("typeA")[0].text, "list[typeA]");
    assert_eq!(graph.edges("typeA")[0].target, "list");
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn undefined_keeps_case_as_written() {
    let def = HierarchyDef::new().with("typeA", TypeDecl::new().fulfills("TypeZ[typeA]"));
    let mut diagnostics = Diagnostics::new();
    let graph = validate_supertypes(&def, &NameTable::new(&def), &mut diagnostics);

    assert_eq!(graph.edge_count(), 0);
    insta::assert_snapshot!(
        diagnostics.as_slice()[0].message(),
        @"The type typeA says it fulfills the type TypeZ, but that type is not defined"
    );
    let location = diagnostics.as_slice()[0].location().unwrap();
    assert_eq!(location.entry.as_deref(), Some("TypeZ[typeA]"));
}

#[test]
fn parse_error_is_attached() {
    let def = HierarchyDef::new()
        .with("typeA", TypeDecl::new().fulfills("typeB["))
        .with("typeB", TypeDecl::new());
    let mut diagnostics = Diagnostics::new();
    let graph = validate_supertypes(&def, &NameTable::new(&def), &mut diagnostics);

    assert_eq!(graph.edge_count(), 0);
    assert_eq!(diagnostics.len(), 1);

    let diag = &diagnostics.as_slice()[0];
    assert_eq!(diag.kind(), DiagnosticKind::MalformedSupertype);
    assert!(matches!(diag.parse_error(), Some(ParseError::LeftBracket { .. })));
}

#[test]
fn every_entry_is_checked() {
    let def = HierarchyDef::new()
        .with("typeA", TypeDecl::new().fulfills("x]").fulfills("missing").fulfills("typeA"));
    let mut diagnostics = Diagnostics::new();
    let graph = validate_supertypes(&def, &NameTable::new(&def), &mut diagnostics);

    assert_eq!(
        diagnostics.iter().map(|d| d.kind()).collect::<Vec<_>>(),
        vec![
            DiagnosticKind::MalformedSupertype,
            DiagnosticKind::UndefinedSupertype
        ]
    );
    assert_eq!(graph.edges("typeA").len(), 1);
}
