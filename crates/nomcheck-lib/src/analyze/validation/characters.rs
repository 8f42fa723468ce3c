//! Characters a type name may not contain.
//!
//! All four are delimiters in type expressions, so a key containing one could
//! never be referenced from a `fulfills` entry.

use nomcheck_core::HierarchyDef;

use crate::diagnostics::{DiagnosticKind, DiagnosticSink};

/// Illegal characters and the names used for them in messages.
pub const ILLEGAL_CHARACTERS: [(char, &str); 4] = [
    (',', "comma"),
    (' ', "space"),
    ('[', "left bracket"),
    (']', "right bracket"),
];

pub fn illegal_character_name(c: char) -> Option<&'static str> {
    ILLEGAL_CHARACTERS
        .iter()
        .find(|(illegal, _)| *illegal == c)
        .map(|(_, name)| *name)
}

/// First illegal character in `name`, by position.
pub fn first_illegal_character(name: &str) -> Option<(char, &'static str)> {
    name.chars()
        .find_map(|c| illegal_character_name(c).map(|class| (c, class)))
}

/// Reports at most one character per key.
pub fn validate_characters(def: &HierarchyDef, sink: &mut impl DiagnosticSink) {
    for name in def.names() {
        let Some((c, class)) = first_illegal_character(name) else {
            continue;
        };
        sink.report(DiagnosticKind::IllegalCharacter)
            .arg(name)
            .arg(class)
            .arg(c)
            .at(name)
            .emit();
    }
}
