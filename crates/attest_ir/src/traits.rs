//! The span resolver interface.
//!
//! The assertion engine never computes source coordinates. It asks an
//! operand where it was written through [`Spanned`], once per operand, at
//! call time.

use super::Span;

/// Trait for values that know where they were written.
pub trait Spanned {
    /// Get the source location span.
    fn span(&self) -> Span;
}

impl<T: Spanned + ?Sized> Spanned for &T {
    fn span(&self) -> Span {
        (**self).span()
    }
}
