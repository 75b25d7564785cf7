//! Core diagnostic types for assertion failures.
//!
//! Defines [`Diagnostic`], [`Label`] and [`Severity`]. Labels and
//! diagnostics are only built on the failure path.

use attest_ir::{Origin, Span};
use std::fmt;

use crate::ErrorCode;

/// Severity level for diagnostics.
///
/// Skips travel through the same channel as failures; the severity lets
/// emitters and runners tell them apart without inspecting message text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    Error,
    Skip,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Skip => write!(f, "skipped"),
        }
    }
}

/// An explanation bound to the span it annotates.
///
/// Built fresh per failing call, either by a built-in command or by a
/// custom assertion that hands it to the primitive.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Label {
    /// Human-readable explanation.
    pub text: String,
    /// The operand span(s) being explained.
    pub span: Span,
}

impl Label {
    /// Create a label.
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Label {
            text: text.into(),
            span,
        }
    }

    /// Start offset of the annotated span.
    #[inline]
    pub fn start(&self) -> u32 {
        self.span.start
    }

    /// End offset of the annotated span.
    #[inline]
    pub fn end(&self) -> u32 {
        self.span.end
    }
}

/// The structured failure handed to emitters and runners.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "diagnostics should be raised or returned, not silently dropped"]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Severity level.
    pub severity: Severity,
    /// Main message.
    pub message: String,
    /// The single label pointing at the failing operand(s).
    pub label: Label,
    /// The call site the label's span indexes into.
    pub origin: Option<Origin>,
}

impl Diagnostic {
    fn new_with_severity(code: ErrorCode, severity: Severity, label: Label) -> Self {
        Diagnostic {
            code,
            severity,
            message: String::new(),
            label,
            origin: None,
        }
    }

    /// Create a new failure diagnostic.
    #[cold]
    pub fn error(code: ErrorCode, label: Label) -> Self {
        Self::new_with_severity(code, Severity::Error, label)
    }

    /// Create a new skip diagnostic.
    #[cold]
    pub fn skip(code: ErrorCode, label: Label) -> Self {
        Self::new_with_severity(code, Severity::Skip, label)
    }

    /// Set the main message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach the call site the label refers to.
    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Check if this is a skip signal.
    pub fn is_skip(&self) -> bool {
        matches!(self.severity, Severity::Skip)
    }

    /// File, line and column reported for the label, if the origin is known.
    ///
    /// See [`Origin::location`]: for labels on the first line of the
    /// invocation this is the call site.
    pub fn location(&self) -> Option<(&str, u32, u32)> {
        let origin = self.origin.as_ref()?;
        let (line, column) = origin.location(self.label.start());
        Some((origin.file(), line, column))
    }

    /// Source text under the label, if the origin is known.
    pub fn snippet(&self) -> Option<&str> {
        self.origin
            .as_ref()
            .map(|origin| origin.snippet(self.label.span))
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)?;

        match self.location() {
            Some((file, line, column)) => {
                write!(f, "\n  --> {file}:{line}:{column}: {}", self.label.text)
            }
            None => write!(f, "\n  --> {:?}: {}", self.label.span, self.label.text),
        }
    }
}

#[cfg(test)]
mod tests;
