//! JSON Emitter
//!
//! One array of diagnostic objects per report, for runners that need to
//! tell failures from skips without parsing terminal text:
//!
//! ```text
//! [
//!   {
//!     "code": "A0101",
//!     "kind": "error",
//!     "message": "Assertion failed.",
//!     "label": { "text": "They are not equal. Left = 1. Right = 2.", "start": 14, "end": 18 },
//!     "file": "tests/math.rs",
//!     "line": 12,
//!     "column": 5
//!   }
//! ]
//! ```

use std::fmt::Write as _;
use std::io::Write;

use crate::Diagnostic;

use super::{escape_json, DiagnosticEmitter};

/// Machine-readable emitter over any writer.
///
/// Call [`begin`](Self::begin) before the first diagnostic and
/// [`end`](Self::end) after the last.
pub struct JsonEmitter<W: Write> {
    writer: W,
    first: bool,
}

impl<W: Write> JsonEmitter<W> {
    pub fn new(writer: W) -> Self {
        JsonEmitter {
            writer,
            first: true,
        }
    }

    /// Open the array.
    pub fn begin(&mut self) {
        let _ = writeln!(self.writer, "[");
    }

    /// Close the array.
    pub fn end(&mut self) {
        let _ = writeln!(self.writer, "\n]");
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Render one diagnostic as an indented JSON object (no trailing newline).
fn render_object(diagnostic: &Diagnostic) -> String {
    let mut out = String::new();
    let label = &diagnostic.label;

    let _ = writeln!(out, "  {{");
    let _ = writeln!(out, "    \"code\": \"{}\",", diagnostic.code);
    let _ = writeln!(out, "    \"kind\": \"{}\",", diagnostic.severity);
    let _ = writeln!(out, "    \"message\": \"{}\",", escape_json(&diagnostic.message));
    let _ = writeln!(
        out,
        "    \"label\": {{ \"text\": \"{}\", \"start\": {}, \"end\": {} }},",
        escape_json(&label.text),
        label.start(),
        label.end()
    );

    // Location is only known when the call site was captured.
    match diagnostic.location() {
        Some((file, line, column)) => {
            let _ = writeln!(out, "    \"file\": \"{}\",", escape_json(file));
            let _ = writeln!(out, "    \"line\": {line},");
            let _ = writeln!(out, "    \"column\": {column}");
        }
        None => out.push_str("    \"file\": null,\n    \"line\": null,\n    \"column\": null\n"),
    }
    out.push_str("  }");
    out
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let separator = if self.first { "" } else { ",\n" };
        self.first = false;
        let _ = write!(self.writer, "{separator}{}", render_object(diagnostic));
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
