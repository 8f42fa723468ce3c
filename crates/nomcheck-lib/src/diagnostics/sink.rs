//! Diagnostic sinks: where validation findings go.

use super::message::{DiagnosticArg, DiagnosticKind, DiagnosticMessage, Location, Severity};

/// Receiver of validation findings.
///
/// The validator never prints; it hands every finding to a sink supplied by
/// the caller. [`Diagnostics`](super::Diagnostics) collects them in order,
/// [`TracingSink`] forwards them to `tracing`.
pub trait DiagnosticSink {
    fn emit(&mut self, message: DiagnosticMessage);

    /// Start a diagnostic of the given kind.
    fn report(&mut self, kind: DiagnosticKind) -> DiagnosticBuilder<'_, Self>
    where
        Self: Sized,
    {
        DiagnosticBuilder::new(self, kind)
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn emit(&mut self, message: DiagnosticMessage) {
        (**self).emit(message);
    }
}

#[must_use = "diagnostic not emitted, call .emit()"]
pub struct DiagnosticBuilder<'a, S: ?Sized> {
    sink: &'a mut S,
    kind: DiagnosticKind,
    args: Vec<DiagnosticArg>,
    location: Option<Location>,
}

impl<'a, S: DiagnosticSink + ?Sized> DiagnosticBuilder<'a, S> {
    pub fn new(sink: &'a mut S, kind: DiagnosticKind) -> Self {
        Self {
            sink,
            kind,
            args: Vec::new(),
            location: None,
        }
    }

    /// Append the next positional argument.
    pub fn arg(mut self, arg: impl Into<DiagnosticArg>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Point at a type's key in the source document.
    pub fn at(mut self, type_name: &str) -> Self {
        self.location = Some(Location::new(type_name));
        self
    }

    /// Point at one of a type's `fulfills` entries.
    pub fn at_entry(mut self, type_name: &str, entry: &str) -> Self {
        self.location = Some(Location::new(type_name).with_entry(entry));
        self
    }

    pub fn emit(self) {
        let message = DiagnosticMessage::new(self.kind, self.args, self.location);
        self.sink.emit(message);
    }
}

/// Sink that logs each finding through `tracing` and keeps only counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink {
    errors: usize,
    warnings: usize,
}

impl TracingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error_count(&self) -> usize {
        self.errors
    }

    pub fn warning_count(&self) -> usize {
        self.warnings
    }
}

impl DiagnosticSink for TracingSink {
    fn emit(&mut self, message: DiagnosticMessage) {
        let type_name = message.location().map(|l| l.type_name.as_str());
        match message.severity() {
            Severity::Error => {
                self.errors += 1;
                tracing::error!(kind = ?message.kind(), type_name, "{}", message.message());
            }
            Severity::Warning => {
                self.warnings += 1;
                tracing::warn!(kind = ?message.kind(), type_name, "{}", message.message());
            }
        }
    }
}
