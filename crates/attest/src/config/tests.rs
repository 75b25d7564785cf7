use super::*;
use pretty_assertions::assert_eq;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |var| vars.get(var).cloned()
}

#[test]
fn test_defaults_when_unset() {
    let config = ReportConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, ReportConfig::default());
    assert_eq!(config.color, ColorMode::Auto);
    assert_eq!(config.format, ReportFormat::Terminal);
}

#[test]
fn test_reads_both_variables() {
    let config =
        ReportConfig::from_lookup(lookup(&[(COLOR_VAR, "never"), (FORMAT_VAR, "json")])).unwrap();
    assert_eq!(
        config,
        ReportConfig {
            color: ColorMode::Never,
            format: ReportFormat::Json,
        }
    );
}

#[test]
fn test_values_are_case_insensitive_and_trimmed() {
    let config = ReportConfig::from_lookup(lookup(&[(COLOR_VAR, " Always ")])).unwrap();
    assert_eq!(config.color, ColorMode::Always);
}

#[test]
fn test_unknown_color_is_an_error() {
    let err = ReportConfig::from_lookup(lookup(&[(COLOR_VAR, "sometimes")])).unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidValue {
            var: COLOR_VAR,
            value: "sometimes".to_owned(),
            expected: "auto, always, never",
        }
    );
    assert_eq!(
        err.to_string(),
        "invalid value \"sometimes\" for ATTEST_COLOR: expected one of auto, always, never"
    );
}

#[test]
fn test_unknown_format_is_an_error() {
    let err = ReportConfig::from_lookup(lookup(&[(FORMAT_VAR, "xml")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { var: FORMAT_VAR, .. }));
}
