//! Byte ranges into an invocation's text.
//!
//! A [`Span`] is half-open and always indexes the text of one [`Origin`]
//! (the reconstructed `command!(operands)` call), never a whole file.
//!
//! [`Origin`]: crate::Origin

use std::fmt;
use std::ops::Range;

/// Half-open byte range `start..end` into an invocation's text.
///
/// Layout: 8 bytes, two `u32` offsets. Every constructor keeps
/// `start <= end`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Span between two offsets, in either order.
    #[inline]
    pub const fn new(a: u32, b: u32) -> Self {
        if b < a {
            Span { start: b, end: a }
        } else {
            Span { start: a, end: b }
        }
    }

    /// Span of a `usize` range; offsets past `u32::MAX` clamp to it.
    pub fn saturating_from_range(range: Range<usize>) -> Self {
        let clamp = |offset: usize| u32::try_from(offset).unwrap_or(u32::MAX);
        Span::new(clamp(range.start), clamp(range.end))
    }

    /// Zero-width span at `offset`, e.g. an empty argument list.
    #[inline]
    pub const fn point(offset: u32) -> Span {
        Span {
            start: offset,
            end: offset,
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both; used to join a left and right operand.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }

    /// As a `usize` range for slicing the invocation text.
    #[inline]
    pub fn to_range(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

// Rendered as `start..end` in fallback diagnostics and operand dumps.
impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

mod size_asserts {
    use super::Span;
    crate::static_assert_size!(Span, 8);
}
