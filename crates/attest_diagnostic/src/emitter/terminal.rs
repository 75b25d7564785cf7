//! Terminal Emitter
//!
//! Renders a diagnostic for people: header, the invocation with a line
//! gutter, and the failing operands underlined, optionally in ANSI color.
//!
//! When a diagnostic carries its [`Origin`], the invocation is printed with
//! a line-number gutter and the label's span underlined:
//!
//! ```text
//! error[A0101]: Assertion failed.
//!   --> tests/math.rs:12:5
//!    |
//! 12 | assert_equal!(1, 2)
//!    |               ^^^^ They are not equal. Left = 1. Right = 2.
//! ```

use std::io::Write;

use attest_ir::Origin;

use crate::span_utils::{char_column, digit_count, LineOffsetTable};
use crate::{Diagnostic, Label, Severity};

use super::DiagnosticEmitter;

/// ANSI escapes.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const SKIP: &str = "\x1b[1;33m"; // Bold yellow
    pub const BOLD: &str = "\x1b[1m";
    pub const GUTTER: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// When to emit ANSI colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Colors iff the output is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Whether to color, given whether the output is a terminal.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Human-readable emitter over any writer.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    /// `is_tty` only matters for [`ColorMode::Auto`].
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    /// Consume the emitter and return its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn severity_color(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => colors::ERROR,
            Severity::Skip => colors::SKIP,
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        self.write_colored(&severity.to_string(), Self::severity_color(severity));
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }

    /// Write an empty gutter: `   |`.
    fn write_gutter(&mut self, width: usize) {
        let gutter = format!("{:width$} |", "");
        self.write_colored(&gutter, colors::GUTTER);
    }

    /// Write a numbered gutter: `12 |`.
    fn write_line_number(&mut self, number: u32, width: usize) {
        let gutter = format!("{number:>width$} |");
        self.write_colored(&gutter, colors::GUTTER);
    }

    /// Render the invocation with the label's span underlined.
    fn write_snippet(&mut self, origin: &Origin, label: &Label, severity: Severity) {
        let text = origin.text();
        let table = LineOffsetTable::build(text);
        let (first, last) = table.line_span(label.span);
        let (line, column) = origin.location(label.start());

        let last_number = origin
            .line()
            .saturating_add(u32::try_from(last).unwrap_or(u32::MAX));
        let width = digit_count(last_number);
        let color = Self::severity_color(severity);

        let _ = write!(self.writer, "{:width$}", "");
        self.write_colored("-->", colors::GUTTER);
        let _ = writeln!(self.writer, " {}:{line}:{column}", origin.file());
        self.write_gutter(width);
        let _ = writeln!(self.writer);

        for index in first..=last {
            let Some(line_text) = table.line_text(text, index) else {
                break;
            };
            let line_start = table.line_start(index).unwrap_or(0);
            let number = origin
                .line()
                .saturating_add(u32::try_from(index).unwrap_or(u32::MAX));

            self.write_line_number(number, width);
            let _ = writeln!(self.writer, " {line_text}");

            let from = if index == first {
                char_column(text, line_start, label.start())
            } else {
                0
            };
            let to = if index == last {
                char_column(text, line_start, label.end())
            } else {
                line_text.chars().count()
            };
            // Point spans still get one caret.
            let carets = "^".repeat(to.saturating_sub(from).max(1));

            self.write_gutter(width);
            let _ = write!(self.writer, " {:from$}", "");
            self.write_colored(&carets, color);
            if index == last {
                let _ = write!(self.writer, " ");
                self.write_colored(&label.text, color);
            }
            let _ = writeln!(self.writer);
        }
    }

    /// Render a label without source context: `--> 14..18: text`.
    fn write_fallback(&mut self, label: &Label, severity: Severity) {
        let _ = write!(self.writer, "  --> {:?}: ", label.span);
        self.write_colored(&label.text, Self::severity_color(severity));
        let _ = writeln!(self.writer);
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // error[A0101]: message
        self.write_severity(diagnostic.severity);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        match &diagnostic.origin {
            Some(origin) => self.write_snippet(origin, &diagnostic.label, diagnostic.severity),
            None => self.write_fallback(&diagnostic.label, diagnostic.severity),
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
