//! Parser for type expressions such as `typeB[typeC, typeD[typeE]]`.
//!
//! Grammar:
//!
//! ```text
//! expr      := name ( '[' paramList ']' )?
//! paramList := expr ( ',' expr )*
//! name      := one or more characters excluding '[', ']', ',', whitespace
//! ```
//!
//! Whitespace around names and delimiters is insignificant; inside a name it
//! ends the name, so `a b` fails with trailing input. Parsing is total:
//! every input yields either a [`TypeExpr`] or exactly one [`ParseError`].

pub mod error;
pub mod expr;
pub mod lexer;

mod core;

#[cfg(test)]
mod core_tests;
#[cfg(test)]
mod lexer_tests;

pub use self::core::Parser;
pub use error::ParseError;
pub use expr::TypeExpr;

/// Parse a single type expression.
pub fn parse_type(source: &str) -> Result<TypeExpr, ParseError> {
    Parser::new(source).parse()
}
