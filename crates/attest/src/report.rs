//! Rendering raised diagnostics.
//!
//! Runners that catch an [`AssertError`] hand it here; the configured
//! emitter does the pretty-printing. Output is best effort and never fails
//! the caller.

use std::io::{self, IsTerminal, Write};

use attest_diagnostic::emitter::{DiagnosticEmitter, JsonEmitter, TerminalEmitter};

use crate::config::{ReportConfig, ReportFormat};
use crate::AssertError;

/// Render one raised diagnostic to `writer`.
///
/// `is_tty` resolves [`ColorMode::Auto`](attest_diagnostic::emitter::ColorMode::Auto).
pub fn report<W: Write>(error: &AssertError, config: &ReportConfig, writer: W, is_tty: bool) {
    let diag = error.diagnostic();
    match config.format {
        ReportFormat::Terminal => {
            let mut emitter = TerminalEmitter::with_color_mode(writer, config.color, is_tty);
            emitter.emit(diag);
            emitter.flush();
        }
        ReportFormat::Json => {
            let mut emitter = JsonEmitter::new(writer);
            emitter.begin();
            emitter.emit(diag);
            emitter.end();
            emitter.flush();
        }
    }
}

/// Render one raised diagnostic to stderr, detecting whether it is a TTY.
#[cold]
pub fn report_stderr(error: &AssertError, config: &ReportConfig) {
    let stderr = io::stderr();
    let is_tty = stderr.is_terminal();
    report(error, config, stderr.lock(), is_tty);
}
