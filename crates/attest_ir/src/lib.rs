//! Attest IR - source location primitives
//!
//! This crate contains the data that ties an assertion back to the code that
//! invoked it:
//! - [`Span`] for byte ranges into an invocation's text
//! - [`Operand`] for an evaluated value paired with where it was written
//! - [`Origin`] for the captured call site of an assertion command
//! - [`Spanned`] as the span resolver interface
//!
//! Spans are only ever produced by [`Origin::capture`]; the assertion engine
//! consumes them and never computes coordinates itself.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod operand;
mod origin;
mod span;
mod traits;

pub use operand::Operand;
pub use origin::Origin;
pub use span::Span;
pub use traits::Spanned;
