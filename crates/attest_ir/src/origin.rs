//! Call-site capture for assertion commands.
//!
//! An [`Origin`] records where an assertion command was invoked and the
//! reconstructed text of that invocation, e.g. `assert_equal!(1 + 1, 3)`.
//! Operand spans are byte ranges into that text, so every span points at
//! the exact operand it describes.

use std::fmt;

use crate::Span;

/// Where an assertion command was invoked.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Origin {
    file: String,
    line: u32,
    column: u32,
    command: String,
    text: String,
}

impl Origin {
    /// Capture a call site and compute one span per operand.
    ///
    /// `operands` are the operand expressions as written (normally
    /// `stringify!` output). The returned spans are in operand order.
    ///
    /// # Example
    ///
    /// ```
    /// use attest_ir::{Origin, Span};
    ///
    /// let (origin, [left, right]) =
    ///     Origin::capture("tests/math.rs", 7, 5, "assert_equal", ["1 + 1", "3"]);
    ///
    /// assert_eq!(origin.text(), "assert_equal!(1 + 1, 3)");
    /// assert_eq!(origin.snippet(left), "1 + 1");
    /// assert_eq!(origin.snippet(right), "3");
    /// assert_eq!(left.merge(right), Span::new(14, 22));
    /// ```
    pub fn capture<const N: usize>(
        file: &str,
        line: u32,
        column: u32,
        command: &str,
        operands: [&str; N],
    ) -> (Origin, [Span; N]) {
        let capacity = command.len() + 3 + operands.iter().map(|op| op.len() + 2).sum::<usize>();
        let mut text = String::with_capacity(capacity);
        text.push_str(command);
        text.push_str("!(");

        let mut bounds = [(0usize, 0usize); N];
        for (i, operand) in operands.iter().enumerate() {
            if i > 0 {
                text.push_str(", ");
            }
            let start = text.len();
            text.push_str(operand);
            bounds[i] = (start, text.len());
        }
        text.push(')');

        let spans = bounds.map(|(start, end)| Span::saturating_from_range(start..end));
        let origin = Origin {
            file: file.to_owned(),
            line,
            column,
            command: command.to_owned(),
            text,
        };
        (origin, spans)
    }

    /// Path of the file that invoked the command.
    pub fn file(&self) -> &str {
        &self.file
    }

    /// 1-based line of the invocation.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// 1-based column of the invocation.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Name of the invoked command, without the `!`.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// The reconstructed invocation text that spans index into.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Span covering the whole argument list (between the parentheses).
    ///
    /// Empty for commands that take no operands.
    pub fn arguments_span(&self) -> Span {
        let open = self.command.len() + 2;
        let close = self.text.len().saturating_sub(1).max(open);
        Span::saturating_from_range(open..close)
    }

    /// Text covered by `span`, or `""` if it does not land on the text.
    pub fn snippet(&self, span: Span) -> &str {
        self.text.get(span.to_range()).unwrap_or("")
    }

    /// 1-based (line, column) reported for a byte offset into the
    /// invocation text.
    ///
    /// Offsets on the first line of the text resolve to the call site
    /// itself, i.e. the captured `line`/`column`, which is where the
    /// invocation (including any path prefix such as `attest::`) starts.
    /// The text is rebuilt from `stringify!` output, so offsets inside it
    /// do not map back to source columns. Offsets on later lines
    /// (multi-line operands) advance the line and report the column within
    /// the rebuilt text.
    pub fn location(&self, offset: u32) -> (u32, u32) {
        let offset = (offset as usize).min(self.text.len());
        let before = self.text.get(..offset).unwrap_or(&self.text);
        match before.rfind('\n') {
            Some(newline) => {
                let extra_lines = before.matches('\n').count();
                let col = before[newline + 1..].chars().count();
                (
                    self.line.saturating_add(saturating_u32(extra_lines)),
                    saturating_u32(col).saturating_add(1),
                )
            }
            None => (self.line, self.column),
        }
    }
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

impl fmt::Debug for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}: {}",
            self.file, self.line, self.column, self.text
        )
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}
