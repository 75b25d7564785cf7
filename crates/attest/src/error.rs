//! The raise channel of every assertion command.
//!
//! "Raising" a diagnostic is returning `Err(AssertError)`; propagating it
//! with `?` is what unwinds to the caller's caller.

use std::fmt;

use attest_diagnostic::Diagnostic;
use thiserror::Error;

/// Result of an assertion command.
pub type AssertResult = Result<(), AssertError>;

/// A raised diagnostic.
///
/// Skips travel through the same channel as failures but are a separate
/// variant, so runners never need to inspect message text to tell them
/// apart.
#[derive(Clone, PartialEq, Eq, Error)]
pub enum AssertError {
    /// The checked predicate was false.
    #[error("{0}")]
    Failed(Box<Diagnostic>),
    /// The case asked to be excluded from pass/fail accounting.
    #[error("{0}")]
    Skipped(Box<Diagnostic>),
}

impl AssertError {
    /// The carried diagnostic.
    pub fn diagnostic(&self) -> &Diagnostic {
        match self {
            AssertError::Failed(diag) | AssertError::Skipped(diag) => diag,
        }
    }

    /// Consume the error and return its diagnostic.
    pub fn into_diagnostic(self) -> Diagnostic {
        match self {
            AssertError::Failed(diag) | AssertError::Skipped(diag) => *diag,
        }
    }

    /// Check if this is the skip signal.
    pub fn is_skip(&self) -> bool {
        matches!(self, AssertError::Skipped(_))
    }

    /// Check if this is a genuine assertion failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, AssertError::Failed(_))
    }
}

impl From<Diagnostic> for AssertError {
    /// Route a diagnostic into the variant matching its severity.
    fn from(diagnostic: Diagnostic) -> Self {
        if diagnostic.is_skip() {
            AssertError::Skipped(Box::new(diagnostic))
        } else {
            AssertError::Failed(Box::new(diagnostic))
        }
    }
}

// `#[test] fn ... -> AssertResult` prints the error with `Debug`; show the
// rendered diagnostic instead of the nested struct dump.
impl fmt::Debug for AssertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.diagnostic())
    }
}
