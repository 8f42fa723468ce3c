//! Diagnostics collection for accumulating validation findings.

use serde::Serialize;

use super::message::{DiagnosticKind, DiagnosticMessage, Severity};
use super::sink::DiagnosticSink;
use crate::Error;

/// Ordered collection of diagnostics from one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<DiagnosticMessage>);

impl Diagnostics {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, msg: DiagnosticMessage) {
        self.0.push(msg);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticMessage> {
        self.0.iter()
    }

    pub fn has_errors(&self) -> bool {
        self.0.iter().any(|d| d.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.0.iter().any(|d| d.is_warning())
    }

    pub fn as_slice(&self) -> &[DiagnosticMessage] {
        &self.0
    }

    pub fn error_count(&self) -> usize {
        self.0.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.0.iter().filter(|d| d.is_warning()).count()
    }

    pub fn filter_by_severity(&self, severity: Severity) -> Vec<&DiagnosticMessage> {
        self.0.iter().filter(|d| d.severity == severity).collect()
    }

    pub fn filter_by_kind(&self, kind: DiagnosticKind) -> Vec<&DiagnosticMessage> {
        self.0.iter().filter(|d| d.kind == kind).collect()
    }

    /// Rendered messages, in emission order.
    pub fn messages(&self) -> Vec<&str> {
        self.0.iter().map(|d| d.message()).collect()
    }

    /// Hand the diagnostics back when there are no errors (and, if
    /// `strict`, no warnings); otherwise fail with them.
    pub fn ensure_valid(self, strict: bool) -> Result<Self, Error> {
        if self.has_errors() || (strict && self.has_warnings()) {
            return Err(Error::Invalid(self));
        }
        Ok(self)
    }
}

impl DiagnosticSink for Diagnostics {
    fn emit(&mut self, message: DiagnosticMessage) {
        self.push(message);
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a DiagnosticMessage;
    type IntoIter = std::slice::Iter<'a, DiagnosticMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
