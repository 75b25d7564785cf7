//! Attest - span-accurate assertion commands
//!
//! A small set of named checks that, on failure, raise one structured
//! [`Diagnostic`] pointing at the exact operands that failed:
//!
//! - [`assert_that!`]: the primitive boolean check
//! - [`assert_error!`]: passes iff the code raises
//! - [`assert_skip!`]: the skip signal
//! - [`assert_equal!`], [`assert_not_equal!`], [`assert_less_or_equal!`],
//!   [`assert_less!`], [`assert_greater!`], [`assert_greater_or_equal!`],
//!   [`assert_length!`], [`assert_str_contains!`]: the binary family
//! - [`assert_custom!`]: user-defined checks built on the primitive
//!
//! Every command evaluates to an [`AssertResult`]; raising is returning
//! `Err`, so failures propagate with `?`.
//!
//! ```
//! use attest::{assert_equal, assert_that, AssertResult};
//!
//! fn totals() -> AssertResult {
//!     assert_that!(2 > 1)?;
//!     assert_equal!(1 + 1, 2)
//! }
//!
//! assert!(totals().is_ok());
//! ```

mod compare;
mod config;
mod engine;
mod error;
mod length;
mod macros;
mod raises;
mod report;

pub use attest_diagnostic::emitter::ColorMode;
pub use attest_diagnostic::{Diagnostic, ErrorCode, Label, Severity};
pub use attest_ir::{Operand, Origin, Span, Spanned};
pub use config::{ConfigError, ReportConfig, ReportFormat, COLOR_VAR, FORMAT_VAR};
pub use engine::{Assert, IntoLabel, DEFAULT_LABEL, DEFAULT_MESSAGE, SKIP_LABEL, SKIP_MESSAGE};
pub use error::{AssertError, AssertResult};
pub use length::HasLength;
pub use raises::Raises;
pub use report::{report, report_stderr};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for assertion debugging.
///
/// Call this early to enable tracing output. Controlled by `RUST_LOG`:
/// - `RUST_LOG=attest=trace` - every passing check
/// - `RUST_LOG=attest=debug` - raised diagnostics and swallowed errors
///
/// Safe to call more than once; only the first call has an effect, and
/// nothing is installed when `RUST_LOG` is unset.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another subscriber may already be installed by the host.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
