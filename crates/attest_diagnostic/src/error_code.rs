//! Error codes for assertion diagnostics.
//!
//! Each assertion command has one stable code (e.g. `A0101`) so failures
//! are searchable and can be filtered by tooling.

use std::fmt;

/// Error codes for all assertion diagnostics.
///
/// Format: A#### where the second digit indicates the family:
/// - A00xx: Primitive and control-flow commands
/// - A01xx: Binary comparison, containment and length commands
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorCode {
    // Primitive / control flow (A00xx)
    /// `assert`: the condition was false
    A0001,
    /// `assert error`: the code ran without raising
    A0002,
    /// `assert skip`: the case asked to be excluded
    A0003,

    // Binary family (A01xx)
    /// `assert equal`
    A0101,
    /// `assert not equal`
    A0102,
    /// `assert less or equal`
    A0103,
    /// `assert less`
    A0104,
    /// `assert greater`
    A0105,
    /// `assert greater or equal`
    A0106,
    /// `assert length`
    A0107,
    /// `assert str contains`
    A0108,
}

impl ErrorCode {
    /// All error codes, for iteration and parsing.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::A0001,
        ErrorCode::A0002,
        ErrorCode::A0003,
        ErrorCode::A0101,
        ErrorCode::A0102,
        ErrorCode::A0103,
        ErrorCode::A0104,
        ErrorCode::A0105,
        ErrorCode::A0106,
        ErrorCode::A0107,
        ErrorCode::A0108,
    ];

    /// Get the code as a string (e.g., "A0101").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::A0001 => "A0001",
            ErrorCode::A0002 => "A0002",
            ErrorCode::A0003 => "A0003",
            ErrorCode::A0101 => "A0101",
            ErrorCode::A0102 => "A0102",
            ErrorCode::A0103 => "A0103",
            ErrorCode::A0104 => "A0104",
            ErrorCode::A0105 => "A0105",
            ErrorCode::A0106 => "A0106",
            ErrorCode::A0107 => "A0107",
            ErrorCode::A0108 => "A0108",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"A0101"`.
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`] and [`ErrorCode::as_str()`].
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}

#[cfg(test)]
mod tests;
