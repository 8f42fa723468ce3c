//! Case-insensitive name resolution over a hierarchy's keys.

use indexmap::IndexMap;

use nomcheck_core::HierarchyDef;

/// Keys grouped by their lower-cased form, in declaration order.
///
/// The first-declared key of each group is canonical: references resolve to
/// it, and the rest of the group conflict with it.
#[derive(Debug, Clone, Default)]
pub struct NameTable<'h> {
    groups: IndexMap<String, Vec<&'h str>>,
}

impl<'h> NameTable<'h> {
    pub fn new(def: &'h HierarchyDef) -> Self {
        let mut groups: IndexMap<String, Vec<&'h str>> = IndexMap::new();
        for name in def.names() {
            groups.entry(fold(name)).or_default().push(name);
        }
        Self { groups }
    }

    /// Resolve a referenced name to the canonical declared key.
    pub fn resolve(&self, name: &str) -> Option<&'h str> {
        self.groups.get(&fold(name)).and_then(|g| g.first().copied())
    }

    /// Groups with more than one member: `(canonical, others)`.
    pub fn conflicts(&self) -> impl Iterator<Item = (&'h str, &[&'h str])> {
        self.groups
            .values()
            .filter(|g| g.len() > 1)
            .map(|g| (g[0], &g[1..]))
    }
}

fn fold(name: &str) -> String {
    name.to_lowercase()
}
