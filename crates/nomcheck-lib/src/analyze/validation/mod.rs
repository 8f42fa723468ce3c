//! Name-level validation passes.
//!
//! These look only at the hierarchy's keys:
//! - Case-insensitive collisions (conflicts)
//! - Characters reserved by the type expression grammar (characters)
//! - Names that read as generic placeholders (generics)

pub mod characters;
pub mod conflicts;
pub mod generics;

#[cfg(test)]
mod conflicts_tests;

pub use characters::validate_characters;
pub use conflicts::validate_conflicts;
pub use generics::validate_generic_names;
