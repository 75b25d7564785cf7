//! Reporting configuration.
//!
//! Read from the environment so a runner can switch output without code
//! changes:
//!
//! | variable | values | default |
//! |---|---|---|
//! | `ATTEST_COLOR` | `auto`, `always`, `never` | `auto` |
//! | `ATTEST_FORMAT` | `terminal`, `json` | `terminal` |

use attest_diagnostic::emitter::ColorMode;
use thiserror::Error;

/// Environment variable selecting the color mode.
pub const COLOR_VAR: &str = "ATTEST_COLOR";

/// Environment variable selecting the output format.
pub const FORMAT_VAR: &str = "ATTEST_FORMAT";

/// Errors from reading a [`ReportConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A variable was set to a value outside its accepted set.
    #[error("invalid value {value:?} for {var}: expected one of {expected}")]
    InvalidValue {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Output format for rendered diagnostics.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Human-readable text with the failing operands underlined.
    #[default]
    Terminal,
    /// One JSON array per report.
    Json,
}

/// How raised diagnostics are rendered.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportConfig {
    pub color: ColorMode,
    pub format: ReportFormat,
}

impl ReportConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name
    /// to its value. Unset variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = ReportConfig::default();

        if let Some(value) = lookup(COLOR_VAR) {
            config.color = parse_color(&value)?;
        }
        if let Some(value) = lookup(FORMAT_VAR) {
            config.format = parse_format(&value)?;
        }

        Ok(config)
    }
}

fn parse_color(value: &str) -> Result<ColorMode, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "auto" => Ok(ColorMode::Auto),
        "always" => Ok(ColorMode::Always),
        "never" => Ok(ColorMode::Never),
        _ => Err(ConfigError::InvalidValue {
            var: COLOR_VAR,
            value: value.to_owned(),
            expected: "auto, always, never",
        }),
    }
}

fn parse_format(value: &str) -> Result<ReportFormat, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "terminal" => Ok(ReportFormat::Terminal),
        "json" => Ok(ReportFormat::Json),
        _ => Err(ConfigError::InvalidValue {
            var: FORMAT_VAR,
            value: value.to_owned(),
            expected: "terminal, json",
        }),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
