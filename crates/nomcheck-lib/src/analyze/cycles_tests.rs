use super::cycles::{format_chain, validate_cycles};
use super::graph::{Edge, FulfillsGraph};
use crate::diagnostics::{DiagnosticKind, Diagnostics};

fn graph<'h>(edges: &[(&'h str, &[&'h str])]) -> FulfillsGraph<'h> {
    let mut graph = FulfillsGraph::new();
    for (node, targets) in edges {
        let edges = targets
            .iter()
            .copied()
            .map(|t| Edge { text: t, target: t })
            .collect();
        graph.insert(*node, edges);
    }
    graph
}

fn cycles(graph: &FulfillsGraph<'_>) -> Vec<String> {
    let mut diagnostics = Diagnostics::new();
    validate_cycles(graph, &mut diagnostics);
    assert!(
        diagnostics
            .iter()
            .all(|d| d.kind() == DiagnosticKind::CircularDependency)
    );
    diagnostics
        .iter()
        .map(|d| d.args()[1].to_string())
        .collect()
}

#[test]
fn format_chain_joins_with_fulfills() {
    assert_eq!(format_chain("a", &["b", "a"]), "a fulfills b fulfills a");
    assert_eq!(format_chain("a", &[]), "a");
}

#[test]
fn two_cycle_reports_once_per_member() {
    let g = graph(&[("typeA", &["typeB"]), ("typeB", &["typeA"])]);

    assert_eq!(
        cycles(&g),
        vec![
            "typeA fulfills typeB fulfills typeA",
            "typeB fulfills typeA fulfills typeB"
        ]
    );
}

#[test]
fn self_loop() {
    let g = graph(&[("a", &["a"])]);
    assert_eq!(cycles(&g), vec!["a fulfills a"]);
}

#[test]
fn independent_cycles_do_not_mix() {
    // One report per member, so two 2-cycles give four.
    let g = graph(&[("A", &["B"]), ("B", &["A"]), ("C", &["D"]), ("D", &["C"])]);

    assert_eq!(
        cycles(&g),
        vec![
            "A fulfills B fulfills A",
            "B fulfills A fulfills B",
            "C fulfills D fulfills C",
            "D fulfills C fulfills D"
        ]
    );
}

#[test]
fn node_leading_into_cycle_is_not_reported() {
    let g = graph(&[("entry", &["a"]), ("a", &["b"]), ("b", &["a"])]);

    assert_eq!(
        cycles(&g),
        vec!["a fulfills b fulfills a", "b fulfills a fulfills b"]
    );
}

#[test]
fn first_cycle_follows_declared_order() {
    // a reaches itself both via b (long) and directly via c.
    let g = graph(&[("a", &["b", "c"]), ("b", &["d"]), ("d", &["a"]), ("c", &["a"])]);

    let found = cycles(&g);
    assert_eq!(found[0], "a fulfills b fulfills d fulfills a");
}

#[test]
fn dead_ends_are_backtracked() {
    let g = graph(&[("a", &["x", "b"]), ("x", &["y"]), ("y", &[]), ("b", &["a"])]);

    let found = cycles(&g);
    assert_eq!(found[0], "a fulfills b fulfills a");
    assert_eq!(found.len(), 2);
}

#[test]
fn cycle_not_through_start_is_ignored_for_start() {
    let g = graph(&[("s", &["a"]), ("a", &["b"]), ("b", &["a"])]);

    let found = cycles(&g);
    assert!(found.iter().all(|c| !c.starts_with("s ")));
}

#[test]
fn edge_text_is_used_in_chain() {
    let mut g = FulfillsGraph::new();
    g.insert(
        "typeA",
        vec![Edge {
            text: "TypeB[x]",
            target: "typeB",
        }],
    );
    g.insert(
        "typeB",
        vec![Edge {
            text: "TYPEA",
            target: "typeA",
        }],
    );

    assert_eq!(
        cycles(&g),
        vec![
            "typeA fulfills TypeB[x] fulfills TYPEA",
            "typeB fulfills TYPEA fulfills TypeB[x]"
        ]
    );
}

#[test]
fn long_acyclic_chain() {
    let names: Vec<String> = (0..3_000).map(|i| format!("t{i}")).collect();
    let mut g = FulfillsGraph::new();
    for (i, name) in names.iter().enumerate() {
        let edges = names
            .get(i + 1)
            .map(|next| {
                vec![Edge {
                    text: next,
                    target: next,
                }]
            })
            .unwrap_or_default();
        g.insert(name, edges);
    }

    assert!(cycles(&g).is_empty());
}
