use serde::Serialize;

use crate::parser::ParseError;

/// Diagnostic kinds, in the order the validator's passes emit them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    // The document cannot be validated at all
    NotAnObject,
    MalformedDeclaration,

    // Naming
    ConflictingNames,
    IllegalCharacter,
    SingleCharacterName,

    // Supertype references
    MalformedSupertype,
    UndefinedSupertype,
    CircularDependency,
}

impl DiagnosticKind {
    /// Default severity for this kind.
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::SingleCharacterName => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Message template. Each `%s` is replaced by the next positional argument.
    pub fn template(&self) -> &'static str {
        match self {
            Self::NotAnObject => "The hierarchy definition should be an object.",
            Self::MalformedDeclaration => "The type %s has a malformed declaration: %s",
            Self::ConflictingNames => "The type name '%s' conflicts with the type name(s) %s",
            Self::IllegalCharacter => "The type %s includes an illegal %s character ('%s').",
            Self::SingleCharacterName => {
                "The type %s will act like a generic type if used as a connection check, \
                 because it is a single character."
            }
            Self::MalformedSupertype => {
                "The type %s says it fulfills the type %s, but that type could not be parsed: %s"
            }
            Self::UndefinedSupertype => {
                "The type %s says it fulfills the type %s, but that type is not defined"
            }
            Self::CircularDependency => "The type %s creates a circular dependency: %s",
        }
    }

    /// Short label shown under the annotated source span.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotAnObject => "expected an object",
            Self::MalformedDeclaration => "malformed declaration",
            Self::ConflictingNames => "conflicting name",
            Self::IllegalCharacter => "illegal character",
            Self::SingleCharacterName => "single-character name",
            Self::MalformedSupertype => "invalid type expression",
            Self::UndefinedSupertype => "not defined",
            Self::CircularDependency => "part of a cycle",
        }
    }

    /// Fill the template with `args`, left to right.
    ///
    /// Missing arguments leave their `%s` in place; surplus arguments are ignored.
    pub fn render(&self, args: &[DiagnosticArg]) -> String {
        let mut parts = self.template().split("%s");
        let mut args = args.iter();
        let mut out = parts.next().unwrap_or_default().to_string();
        for part in parts {
            match args.next() {
                Some(arg) => out.push_str(&arg.to_string()),
                None => out.push_str("%s"),
            }
            out.push_str(part);
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Positional argument of a diagnostic.
///
/// Parse failures are attached as the structured [`ParseError`] so callers can
/// match on the variant instead of the rendered text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DiagnosticArg {
    Str(String),
    List(Vec<String>),
    ParseError(ParseError),
}

impl DiagnosticArg {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            Self::ParseError(e) => Some(e),
            _ => None,
        }
    }
}

impl std::fmt::Display for DiagnosticArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "'{item}'")?;
                }
                f.write_str("]")
            }
            Self::ParseError(e) => write!(f, "{e}"),
        }
    }
}

impl From<&str> for DiagnosticArg {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for DiagnosticArg {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<char> for DiagnosticArg {
    fn from(c: char) -> Self {
        Self::Str(c.to_string())
    }
}

impl From<Vec<String>> for DiagnosticArg {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl From<ParseError> for DiagnosticArg {
    fn from(e: ParseError) -> Self {
        Self::ParseError(e)
    }
}

/// Where in the hierarchy document a diagnostic points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub type_name: String,
    /// Raw `fulfills` entry, when the finding is about one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
}

impl Location {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            entry: None,
        }
    }

    pub fn with_entry(mut self, entry: impl Into<String>) -> Self {
        self.entry = Some(entry.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    pub(crate) severity: Severity,
    pub(crate) message: String,
    pub(crate) args: Vec<DiagnosticArg>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) location: Option<Location>,
}

impl DiagnosticMessage {
    pub fn new(kind: DiagnosticKind, args: Vec<DiagnosticArg>, location: Option<Location>) -> Self {
        Self {
            kind,
            severity: kind.default_severity(),
            message: kind.render(&args),
            args,
            location,
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// The rendered message.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn template(&self) -> &'static str {
        self.kind.template()
    }

    pub fn args(&self) -> &[DiagnosticArg] {
        &self.args
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    /// The attached parse error, if this diagnostic carries one.
    pub fn parse_error(&self) -> Option<&ParseError> {
        self.args.iter().find_map(DiagnosticArg::as_parse_error)
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}
