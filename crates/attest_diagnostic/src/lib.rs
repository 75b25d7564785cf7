//! Diagnostic system for assertion failures.
//!
//! A failing assertion produces exactly one [`Diagnostic`]:
//! - Error code for searchability
//! - Message (what went wrong, defaults to `Assertion failed.`)
//! - One [`Label`] (where it went wrong, and the operand values)
//! - The captured [`Origin`](attest_ir::Origin) so emitters can show the call
//!
//! Rendering lives in [`emitter`]; the assertion engine only builds the
//! structured value.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
