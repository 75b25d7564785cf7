//! Evaluated operands paired with their source spans.

use std::fmt;

use crate::{Span, Spanned};

/// An already-evaluated operand and the span of the expression it came from.
///
/// Command macros build one `Operand` per argument; hand-written custom
/// assertions receive them ready-made.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Operand<T> {
    /// The evaluated value.
    pub value: T,
    span: Span,
}

impl<T> Operand<T> {
    /// Pair a value with the span it was written at.
    #[inline]
    pub const fn new(value: T, span: Span) -> Self {
        Operand { value, span }
    }
}

impl<T> Spanned for Operand<T> {
    #[inline]
    fn span(&self) -> Span {
        self.span
    }
}

impl<T: fmt::Debug> fmt::Debug for Operand<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.value, self.span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operand_keeps_value_and_span() {
        let text = String::from("abc");
        let operand = Operand::new(&text, Span::new(0, 5));
        assert_eq!(operand.value, "abc");
        assert_eq!(operand.span(), Span::new(0, 5));
    }

    #[test]
    fn test_operand_debug() {
        let operand = Operand::new(7, Span::new(1, 2));
        assert_eq!(format!("{operand:?}"), "7 @ 1..2");
    }
}
