//! Cycle detection over the fulfillment graph.
//!
//! Every type gets its own fresh depth-first search. A cyclic component of N
//! types is therefore reported N times, each chain starting at its own type.

use indexmap::IndexSet;

use super::graph::FulfillsGraph;
use crate::diagnostics::{DiagnosticKind, DiagnosticSink};

pub fn validate_cycles(graph: &FulfillsGraph<'_>, sink: &mut impl DiagnosticSink) {
    for start in graph.nodes() {
        let Some(chain) = CycleFinder::new(graph).find(start) else {
            continue;
        };
        sink.report(DiagnosticKind::CircularDependency)
            .arg(start)
            .arg(format_chain(start, &chain))
            .at(start)
            .emit();
    }
}

/// `start fulfills <entry> fulfills <entry> ...`
pub fn format_chain(start: &str, chain: &[&str]) -> String {
    let mut out = start.to_string();
    for text in chain {
        out.push_str(" fulfills ");
        out.push_str(text);
    }
    out
}

/// Iterative DFS from a single start node.
///
/// Children are visited in declared order and each node at most once, so the
/// first edge back into `start` closes the reported cycle.
struct CycleFinder<'g, 'h> {
    graph: &'g FulfillsGraph<'h>,
    visited: IndexSet<&'h str>,
    /// Texts of the edges from `start` to the top of the stack.
    path: Vec<&'h str>,
}

impl<'g, 'h> CycleFinder<'g, 'h> {
    fn new(graph: &'g FulfillsGraph<'h>) -> Self {
        Self {
            graph,
            visited: IndexSet::new(),
            path: Vec::new(),
        }
    }

    /// Edge texts of the first cycle through `start`, if any.
    fn find(mut self, start: &'h str) -> Option<Vec<&'h str>> {
        tracing::trace!(start, "cycle search");

        self.visited.insert(start);
        let mut stack: Vec<(&'h str, usize)> = vec![(start, 0)];

        while let Some(frame) = stack.last_mut() {
            let (node, next) = *frame;
            let Some(edge) = self.graph.edges(node).get(next) else {
                stack.pop();
                self.path.pop();
                continue;
            };
            frame.1 += 1;

            if edge.target == start {
                self.path.push(edge.text);
                return Some(self.path);
            }

            if self.visited.insert(edge.target) {
                self.path.push(edge.text);
                stack.push((edge.target, 0));
            }
        }

        None
    }
}
