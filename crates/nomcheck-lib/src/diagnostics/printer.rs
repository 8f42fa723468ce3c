//! Builder-pattern printer for rendering diagnostics.

use std::fmt::Write;
use std::ops::Range;

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};

use super::collection::Diagnostics;
use super::message::{DiagnosticMessage, Location, Severity};

/// Builder for rendering diagnostics with various options.
///
/// With a source document attached, diagnostics that point at a type key or a
/// `fulfills` entry are rendered as annotated snippets. Everything else (and
/// everything when no source is given) renders as `<severity>: <message>`.
pub struct DiagnosticsPrinter<'d, 's> {
    diagnostics: &'d Diagnostics,
    source: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
}

impl<'d, 's> DiagnosticsPrinter<'d, 's> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            source: None,
            path: None,
            colored: false,
        }
    }

    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.format(&mut out);
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let Some(source) = self.source else {
            return self.format_plain(w);
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        for (i, diag) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }

            let Some(range) = diag.location().and_then(|loc| locate(source, diag, loc)) else {
                writeln!(w, "{diag}")?;
                continue;
            };

            let mut snippet = Snippet::source(source)
                .line_start(1)
                .annotation(AnnotationKind::Primary.span(range).label(diag.kind().label()));

            if let Some(p) = self.path {
                snippet = snippet.path(p);
            }

            let level = severity_to_level(diag.severity());
            let report = vec![level.primary_title(diag.message()).element(snippet)];
            writeln!(w, "{}", renderer.render(&report))?;
        }

        Ok(())
    }

    fn format_plain(&self, w: &mut impl Write) -> std::fmt::Result {
        for diag in self.diagnostics.iter() {
            writeln!(w, "{diag}")?;
        }
        Ok(())
    }
}

fn severity_to_level(severity: Severity) -> Level<'static> {
    match severity {
        Severity::Error => Level::ERROR,
        Severity::Warning => Level::WARNING,
    }
}

/// Byte range in `source` that a diagnostic points at.
///
/// The key is a member of the top-level object; an entry is a string inside
/// that member's `fulfills` array. Strings nested anywhere else (parameter
/// names, variances) never match.
pub(crate) fn locate(
    source: &str,
    diag: &DiagnosticMessage,
    loc: &Location,
) -> Option<Range<usize>> {
    let key = quoted(&loc.type_name)?;
    let (key_range, decl) = find_member(source, 0..source.len(), &key)?;

    let Some(entry) = &loc.entry else {
        return Some(key_range);
    };

    let (_, fulfills) = find_member(source, decl?, "\"fulfills\"")?;
    let needle = quoted(entry)?;
    let entry_range = scan_strings(source, fulfills?)
        .into_iter()
        .find(|(r, depth)| *depth == 1 && source[r.clone()] == needle)
        .map(|(r, _)| r)?;
    let entry_start = entry_range.start;

    // Narrow to the offending part when the entry has no escapes.
    if let Some(err) = diag.parse_error()
        && needle.len() == entry.len() + 2
    {
        let range = err.range();
        let start = entry_start + 1 + usize::from(range.start());
        let end = entry_start + 1 + usize::from(range.end());
        let end = if end == start { (start + 1).min(entry_range.end) } else { end };
        return Some(start..end);
    }

    Some(entry_range)
}

fn quoted(s: &str) -> Option<String> {
    serde_json::to_string(s).ok()
}

/// Find `key` among the direct members of the object starting at
/// `object.start`. Returns the key's range and its value's container range
/// (`None` when the value is a scalar).
fn find_member(
    source: &str,
    object: Range<usize>,
    key: &str,
) -> Option<(Range<usize>, Option<Range<usize>>)> {
    scan_strings(source, object)
        .into_iter()
        .filter(|(r, depth)| *depth == 1 && &source[r.clone()] == key)
        .find_map(|(r, _)| {
            let after = &source[r.end..];
            let colon = r.end + after.len() - after.trim_start().len();
            if !source[colon..].starts_with(':') {
                return None;
            }
            Some((r, container(source, colon + 1)))
        })
}

/// JSON string tokens within `range`, with their `{`/`[` nesting depth.
///
/// Delimiters are ASCII, so scanning bytes never splits a UTF-8 character.
fn scan_strings(source: &str, range: Range<usize>) -> Vec<(Range<usize>, usize)> {
    let bytes = source.as_bytes();
    let end = range.end.min(bytes.len());
    let mut out = Vec::new();
    let mut depth = 0usize;
    let mut i = range.start;

    while i < end {
        match bytes[i] {
            b'{' | b'[' => depth += 1,
            b'}' | b']' => depth = depth.saturating_sub(1),
            b'"' => {
                let start = i;
                i += 1;
                while i < end && bytes[i] != b'"' {
                    i += if bytes[i] == b'\\' { 2 } else { 1 };
                }
                out.push((start..(i + 1).min(end), depth));
            }
            _ => {}
        }
        i += 1;
    }
    out
}

/// Range of the object or array starting at the first non-space byte at or
/// after `from`.
fn container(source: &str, from: usize) -> Option<Range<usize>> {
    let rest = source.get(from..)?;
    let start = from + rest.len() - rest.trim_start().len();
    let bytes = source.as_bytes();
    if !matches!(bytes.get(start), Some(b'{' | b'[')) {
        return None;
    }

    let mut depth = 0usize;
    let mut in_string = false;
    let mut i = start;
    while i < bytes.len() {
        match (in_string, bytes[i]) {
            (true, b'\\') => i += 1,
            (true, b'"') => in_string = false,
            (true, _) => {}
            (false, b'"') => in_string = true,
            (false, b'{' | b'[') => depth += 1,
            (false, b'}' | b']') => {
                depth -= 1;
                if depth == 0 {
                    return Some(start..i + 1);
                }
            }
            (false, _) => {}
        }
        i += 1;
    }
    Some(start..bytes.len())
}

impl Diagnostics {
    pub fn printer(&self) -> DiagnosticsPrinter<'_, '_> {
        DiagnosticsPrinter::new(self)
    }
}
