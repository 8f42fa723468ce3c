//! The fulfillment graph: one edge per resolved `fulfills` entry.

use indexmap::IndexMap;

/// A resolved `fulfills` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<'h> {
    /// The entry as written, trimmed (e.g. `TypeB[typeC]`).
    pub text: &'h str,
    /// Canonical declared key the entry's base name resolves to.
    pub target: &'h str,
}

#[derive(Debug, Clone, Default)]
pub struct FulfillsGraph<'h> {
    adj: IndexMap<&'h str, Vec<Edge<'h>>>,
}

impl<'h> FulfillsGraph<'h> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node: &'h str, edges: Vec<Edge<'h>>) {
        self.adj.insert(node, edges);
    }

    /// Outgoing edges in declared order. Unknown nodes have none.
    pub fn edges(&self, node: &str) -> &[Edge<'h>] {
        self.adj.get(node).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &'h str> + '_ {
        self.adj.keys().copied()
    }

    pub fn edge_count(&self) -> usize {
        self.adj.values().map(Vec::len).sum()
    }
}
