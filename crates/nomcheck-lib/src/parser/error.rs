//! Parse errors for type expressions.

use rowan::{TextRange, TextSize};
use serde::Serialize;

/// Why a type expression failed to parse.
///
/// Offsets are byte offsets into the parsed string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParseError {
    /// A type name was required but absent (`[a]`, `a[]`, `a[b,]`, empty input).
    #[error("missing type name at offset {offset}")]
    MissingTypeName { offset: u32 },

    /// Input ended inside brackets. Points at the innermost unclosed `[`.
    #[error("unmatched left bracket at offset {offset}")]
    LeftBracket { offset: u32 },

    /// A `]` with no matching `[`.
    #[error("unmatched right bracket at offset {offset}")]
    RightBracket { offset: u32 },

    /// Content after a complete expression (`a, b`, `a[b]c`).
    #[error("extra characters at offset {offset}: '{rest}'")]
    ExtraCharacters { offset: u32, rest: String },
}

impl ParseError {
    pub fn offset(&self) -> TextSize {
        match self {
            Self::MissingTypeName { offset }
            | Self::LeftBracket { offset }
            | Self::RightBracket { offset }
            | Self::ExtraCharacters { offset, .. } => TextSize::from(*offset),
        }
    }

    /// Source range to underline: the trailing text for extra characters,
    /// a single position otherwise.
    pub fn range(&self) -> TextRange {
        match self {
            Self::ExtraCharacters { rest, .. } => {
                TextRange::at(self.offset(), TextSize::of(rest.as_str()))
            }
            _ => TextRange::empty(self.offset()),
        }
    }
}
