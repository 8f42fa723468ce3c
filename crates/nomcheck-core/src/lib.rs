#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for nominal type hierarchy definitions.
//!
//! A hierarchy definition maps type names to declarations:
//!
//! ```json
//! {
//!   "typeA": { "fulfills": ["typeB[typeC]"] },
//!   "typeB": { "params": [{ "name": "T", "variance": "co" }] },
//!   "typeC": {}
//! }
//! ```
//!
//! Two layers:
//! - **Typed layer**: [`HierarchyDef`] / [`TypeDecl`] / [`ParamDecl`], 1:1 with the JSON document
//! - **Untyped layer**: [`TypeDecl::from_value`] converts a single `serde_json::Value` entry,
//!   so callers can keep going when one declaration is malformed

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};


// ============================================================================
// Declarations
// ============================================================================

/// Variance of a generic type parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variance {
    Co,
    Contra,
    Inv,
}

impl std::fmt::Display for Variance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variance::Co => write!(f, "co"),
            Variance::Contra => write!(f, "contra"),
            Variance::Inv => write!(f, "inv"),
        }
    }
}

/// Generic type parameter declared on a type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDecl {
    pub name: String,
    pub variance: Variance,
}

impl ParamDecl {
    pub fn new(name: impl Into<String>, variance: Variance) -> Self {
        Self {
            name: name.into(),
            variance,
        }
    }
}

/// Declaration of a single type.
///
/// `fulfills` holds raw type expressions (e.g. `"typeB[typeC]"`); they are
/// parsed by the validator, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDecl {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fulfills: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<ParamDecl>,
}

impl TypeDecl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style: append a supertype expression.
    pub fn fulfills(mut self, expr: impl Into<String>) -> Self {
        self.fulfills.push(expr.into());
        self
    }

    /// Builder-style: append a generic parameter.
    pub fn param(mut self, name: impl Into<String>, variance: Variance) -> Self {
        self.params.push(ParamDecl::new(name, variance));
        self
    }

    /// Convert one untyped declaration entry.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(value)
    }
}

// ============================================================================
// Hierarchy
// ============================================================================

/// Mapping from type name to declaration, in declaration order.
///
/// Keys are unique by exact (case-sensitive) string equality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HierarchyDef {
    types: IndexMap<String, TypeDecl>,
}

impl HierarchyDef {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a declaration.
    ///
    /// Returns `true` if the name was newly inserted, `false` if it already existed
    /// (in which case the old declaration is replaced, keeping its position).
    pub fn insert(&mut self, name: impl Into<String>, decl: TypeDecl) -> bool {
        self.types.insert(name.into(), decl).is_none()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, decl: TypeDecl) -> Self {
        self.insert(name, decl);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&TypeDecl> {
        self.types.get(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterate over type names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    /// Iterate over (name, declaration) pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeDecl)> {
        self.types.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, TypeDecl)> for HierarchyDef {
    fn from_iter<T: IntoIterator<Item = (String, TypeDecl)>>(iter: T) -> Self {
        Self {
            types: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a HierarchyDef {
    type Item = (&'a String, &'a TypeDecl);
    type IntoIter = indexmap::map::Iter<'a, String, TypeDecl>;

    fn into_iter(self) -> Self::IntoIter {
        self.types.iter()
    }
}
