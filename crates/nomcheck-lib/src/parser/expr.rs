//! Parsed type expressions.

use std::fmt::Write;

use serde::Serialize;

/// A nominal type reference with optional generic arguments: `name[p1, p2]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TypeExpr {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<TypeExpr>,
}

impl TypeExpr {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
        }
    }

    /// Builder-style: append a generic argument.
    pub fn param(mut self, param: TypeExpr) -> Self {
        self.params.push(param);
        self
    }

    pub fn has_params(&self) -> bool {
        !self.params.is_empty()
    }

    /// Indented tree, one name per line.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(&mut out, 0);
        out
    }

    fn dump_into(&self, out: &mut String, depth: usize) {
        let _ = writeln!(out, "{:indent$}{}", "", self.name, indent = depth * 2);
        for param in &self.params {
            param.dump_into(out, depth + 1);
        }
    }
}

impl std::fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)?;
        if self.params.is_empty() {
            return Ok(());
        }
        f.write_char('[')?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{param}")?;
        }
        f.write_char(']')
    }
}
