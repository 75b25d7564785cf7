//! Binary comparison, containment and length commands.
//!
//! All eight share one shape: evaluate a predicate over two operands, and on
//! failure explain it with a label spanning from the left operand to the
//! right one, with the operand values (not their source) interpolated.
//! Both spans are read before the predicate runs.

use std::fmt::{self, Debug};

use attest_diagnostic::{ErrorCode, Label};
use attest_ir::{Operand, Span, Spanned};

use crate::{Assert, AssertResult, HasLength};

/// Span from the start of `left` to the end of `right`.
#[inline]
fn operands_span(left: &impl Spanned, right: &impl Spanned) -> Span {
    left.span().merge(right.span())
}

/// Label text shared by the four ordering commands.
fn ordering_text(left: &impl Debug, right: &impl Debug) -> String {
    format!("Left: {left:?}, Right: {right:?}")
}

impl Assert {
    /// Passes iff `left == right`.
    pub fn equal<L, R>(
        &self,
        left: Operand<&L>,
        right: Operand<&R>,
        message: Option<fmt::Arguments<'_>>,
    ) -> AssertResult
    where
        L: PartialEq<R> + Debug + ?Sized,
        R: Debug + ?Sized,
    {
        let span = operands_span(&left, &right);
        self.check(ErrorCode::A0101, left.value == right.value, message, || {
            Label::new(
                format!(
                    "They are not equal. Left = {:?}. Right = {:?}.",
                    left.value, right.value
                ),
                span,
            )
        })
    }

    /// Passes iff `left != right`.
    pub fn not_equal<L, R>(
        &self,
        left: Operand<&L>,
        right: Operand<&R>,
        message: Option<fmt::Arguments<'_>>,
    ) -> AssertResult
    where
        L: PartialEq<R> + Debug + ?Sized,
        R: Debug + ?Sized,
    {
        let span = operands_span(&left, &right);
        self.check(ErrorCode::A0102, left.value != right.value, message, || {
            Label::new(format!("They both are {:?}.", left.value), span)
        })
    }

    /// Passes iff `left <= right`.
    pub fn less_or_equal<L, R>(
        &self,
        left: Operand<&L>,
        right: Operand<&R>,
        message: Option<fmt::Arguments<'_>>,
    ) -> AssertResult
    where
        L: PartialOrd<R> + Debug + ?Sized,
        R: Debug + ?Sized,
    {
        let span = operands_span(&left, &right);
        self.check(ErrorCode::A0103, left.value <= right.value, message, || {
            Label::new(ordering_text(&left.value, &right.value), span)
        })
    }

    /// Passes iff `left < right`.
    pub fn less<L, R>(
        &self,
        left: Operand<&L>,
        right: Operand<&R>,
        message: Option<fmt::Arguments<'_>>,
    ) -> AssertResult
    where
        L: PartialOrd<R> + Debug + ?Sized,
        R: Debug + ?Sized,
    {
        let span = operands_span(&left, &right);
        self.check(ErrorCode::A0104, left.value < right.value, message, || {
            Label::new(ordering_text(&left.value, &right.value), span)
        })
    }

    /// Passes iff `left > right`.
    pub fn greater<L, R>(
        &self,
        left: Operand<&L>,
        right: Operand<&R>,
        message: Option<fmt::Arguments<'_>>,
    ) -> AssertResult
    where
        L: PartialOrd<R> + Debug + ?Sized,
        R: Debug + ?Sized,
    {
        let span = operands_span(&left, &right);
        self.check(ErrorCode::A0105, left.value > right.value, message, || {
            Label::new(ordering_text(&left.value, &right.value), span)
        })
    }

    /// Passes iff `left >= right`.
    pub fn greater_or_equal<L, R>(
        &self,
        left: Operand<&L>,
        right: Operand<&R>,
        message: Option<fmt::Arguments<'_>>,
    ) -> AssertResult
    where
        L: PartialOrd<R> + Debug + ?Sized,
        R: Debug + ?Sized,
    {
        let span = operands_span(&left, &right);
        self.check(ErrorCode::A0106, left.value >= right.value, message, || {
            Label::new(ordering_text(&left.value, &right.value), span)
        })
    }

    /// Passes iff `left` has exactly `right` elements.
    pub fn length<L>(
        &self,
        left: Operand<&L>,
        right: Operand<&usize>,
        message: Option<fmt::Arguments<'_>>,
    ) -> AssertResult
    where
        L: HasLength + Debug + ?Sized,
    {
        let span = operands_span(&left, &right);
        let actual = left.value.length();
        self.check(ErrorCode::A0107, actual == *right.value, message, || {
            Label::new(
                format!(
                    "Length of {:?} is {actual}, not {}",
                    left.value, right.value
                ),
                span,
            )
        })
    }

    /// Passes iff `right` occurs in `left` as a contiguous substring.
    pub fn str_contains<L, R>(
        &self,
        left: Operand<&L>,
        right: Operand<&R>,
        message: Option<fmt::Arguments<'_>>,
    ) -> AssertResult
    where
        L: AsRef<str> + ?Sized,
        R: AsRef<str> + ?Sized,
    {
        let span = operands_span(&left, &right);
        let (haystack, needle) = (left.value.as_ref(), right.value.as_ref());
        self.check(ErrorCode::A0108, haystack.contains(needle), message, || {
            Label::new(format!("'{haystack}' does not contain '{needle}'."), span)
        })
    }
}
