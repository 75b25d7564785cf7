//! The assertion engine.
//!
//! [`Assert`] owns the captured [`Origin`] of one command invocation. Every
//! command reduces to [`Assert::check`]: compute a boolean, and only when it
//! is false build the label and raise one diagnostic. Custom assertions plug
//! in through the public primitive [`Assert::assert`] with their own label.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use attest_diagnostic::{Diagnostic, ErrorCode, Label};
use attest_ir::{Operand, Origin, Span, Spanned};
use tracing::{debug, trace};

use crate::{AssertError, AssertResult, Raises};

/// Message used when the caller supplies none.
pub const DEFAULT_MESSAGE: &str = "Assertion failed.";

/// Label text of the primitive when the caller supplies none.
pub const DEFAULT_LABEL: &str = "It is not true.";

/// Message carried by the skip signal.
pub const SKIP_MESSAGE: &str = "Test skipped.";

/// Label text carried by the skip signal.
pub const SKIP_LABEL: &str = "SKIPPING TEST";

/// Conversion into a label override for the primitive.
///
/// A full [`Label`] is used as-is. Plain text becomes a label over the
/// condition's own span, so `assert_that!(ok, label = "not ok")` still
/// points at real source.
pub trait IntoLabel {
    fn into_label(self, condition: Span) -> Label;
}

impl IntoLabel for Label {
    fn into_label(self, _condition: Span) -> Label {
        self
    }
}

impl IntoLabel for &str {
    fn into_label(self, condition: Span) -> Label {
        Label::new(self, condition)
    }
}

impl IntoLabel for String {
    fn into_label(self, condition: Span) -> Label {
        Label::new(self, condition)
    }
}

/// One assertion command invocation.
///
/// Built by the command macros from the call site; custom assertions
/// receive it by reference.
#[derive(Clone, Debug)]
pub struct Assert {
    origin: Origin,
}

impl Assert {
    /// Create an engine for a captured call site.
    pub fn new(origin: Origin) -> Self {
        Assert { origin }
    }

    /// The captured call site.
    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    /// The primitive: fails iff `condition` is false.
    ///
    /// Without a `label`, the failure points at the condition with
    /// `It is not true.`. Without a `message`, it reads
    /// `Assertion failed.`. The message is only formatted on failure.
    ///
    /// # Example
    ///
    /// ```
    /// use attest::{Assert, Operand, Origin};
    ///
    /// let (origin, [cond]) = Origin::capture("t.rs", 1, 1, "assert_that", ["42 == 3"]);
    /// let err = Assert::new(origin)
    ///     .assert(Operand::new(42 == 3, cond), None, None)
    ///     .unwrap_err();
    ///
    /// assert_eq!(err.diagnostic().label.text, "It is not true.");
    /// assert_eq!(err.diagnostic().snippet(), Some("42 == 3"));
    /// ```
    pub fn assert(
        &self,
        condition: Operand<bool>,
        message: Option<fmt::Arguments<'_>>,
        label: Option<Label>,
    ) -> AssertResult {
        let span = condition.span();
        self.check(ErrorCode::A0001, condition.value, message, || {
            label.unwrap_or_else(|| Label::new(DEFAULT_LABEL, span))
        })
    }

    /// Passes iff running `code` raises.
    ///
    /// A panic counts as raising, and so does a returned value whose
    /// [`Raises`] impl says so (an `Err`). Whatever was raised is discarded.
    pub fn error<F, R>(&self, code: Operand<F>, message: Option<fmt::Arguments<'_>>) -> AssertResult
    where
        F: FnOnce() -> R,
        R: Raises,
    {
        let span = code.span();
        let raised = match panic::catch_unwind(AssertUnwindSafe(code.value)) {
            Ok(value) => {
                let raised = value.raises();
                if raised {
                    debug!(command = self.origin.command(), "discarding returned error");
                }
                raised
            }
            Err(payload) => {
                debug!(
                    command = self.origin.command(),
                    panic = panic_message(payload.as_ref()),
                    "discarding caught panic"
                );
                true
            }
        };

        self.check(ErrorCode::A0002, raised, message, || {
            let source = self.origin.snippet(span);
            Label::new(
                format!("There was no error during code execution: {source}"),
                span,
            )
        })
    }

    /// Unconditionally raise the skip signal.
    ///
    /// Always returns `Err(AssertError::Skipped)`; the label covers the
    /// (empty) argument list of the call.
    #[cold]
    pub fn skip(&self) -> AssertResult {
        let label = Label::new(SKIP_LABEL, self.origin.arguments_span());
        let diag = Diagnostic::skip(ErrorCode::A0003, label)
            .with_message(SKIP_MESSAGE)
            .with_origin(self.origin.clone());
        debug!(
            code = %ErrorCode::A0003,
            command = self.origin.command(),
            "skip requested"
        );
        Err(AssertError::Skipped(Box::new(diag)))
    }

    /// Shared check behind every command.
    ///
    /// `label` is only called and `message` only formatted when
    /// `condition` is false; the success path builds neither.
    pub(crate) fn check(
        &self,
        code: ErrorCode,
        condition: bool,
        message: Option<fmt::Arguments<'_>>,
        label: impl FnOnce() -> Label,
    ) -> AssertResult {
        if condition {
            trace!(command = self.origin.command(), "assertion passed");
            return Ok(());
        }
        Err(self.raise(code, message, label()))
    }

    #[cold]
    fn raise(&self, code: ErrorCode, message: Option<fmt::Arguments<'_>>, label: Label) -> AssertError {
        debug!(
            code = %code,
            command = self.origin.command(),
            label = %label.text,
            "assertion failed"
        );
        let diag = Diagnostic::error(code, label)
            .with_message(message.map_or_else(|| DEFAULT_MESSAGE.to_owned(), fmt::format))
            .with_origin(self.origin.clone());
        AssertError::Failed(Box::new(diag))
    }
}

/// Best-effort text of a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "<non-string panic payload>"
    }
}
