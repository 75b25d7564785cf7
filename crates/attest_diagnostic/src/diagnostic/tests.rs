use super::*;
use pretty_assertions::assert_eq;

fn equal_failure() -> Diagnostic {
    let (origin, [left, right]) = Origin::capture("tests/math.rs", 12, 5, "assert_equal", ["1", "2"]);
    Diagnostic::error(
        ErrorCode::A0101,
        Label::new("They are not equal. Left = 1. Right = 2.", left.merge(right)),
    )
    .with_message("Assertion failed.")
    .with_origin(origin)
}

#[test]
fn test_diagnostic_builder() {
    let diag = Diagnostic::error(ErrorCode::A0001, Label::new("It is not true.", Span::new(0, 5)))
        .with_message("Assertion failed.");

    assert_eq!(diag.code, ErrorCode::A0001);
    assert_eq!(diag.message, "Assertion failed.");
    assert_eq!(diag.severity, Severity::Error);
    assert!(!diag.is_skip());
    assert_eq!(diag.origin, None);
}

#[test]
fn test_label_accessors() {
    let label = Label::new("here", Span::new(3, 8));
    assert_eq!(label.start(), 3);
    assert_eq!(label.end(), 8);
    assert_eq!(label.text, "here");
}

#[test]
fn test_skip_severity() {
    let diag = Diagnostic::skip(ErrorCode::A0003, Label::new("SKIPPING TEST", Span::point(0)));
    assert!(diag.is_skip());
    assert_eq!(diag.severity, Severity::Skip);
    assert_eq!(diag.severity.to_string(), "skipped");
}

#[test]
fn test_location_and_snippet_with_origin() {
    let diag = equal_failure();
    assert_eq!(diag.location(), Some(("tests/math.rs", 12, 5)));
    assert_eq!(diag.snippet(), Some("1, 2"));
    assert_eq!(diag.label.span, Span::new(14, 18));
}

#[test]
fn test_location_without_origin() {
    let diag = Diagnostic::error(ErrorCode::A0001, Label::new("x", Span::new(1, 2)));
    assert_eq!(diag.location(), None);
    assert_eq!(diag.snippet(), None);
}

#[test]
fn test_diagnostic_display_with_origin() {
    let output = equal_failure().to_string();
    assert_eq!(
        output,
        "error[A0101]: Assertion failed.\n  --> tests/math.rs:12:5: They are not equal. Left = 1. Right = 2."
    );
}

#[test]
fn test_diagnostic_display_without_origin() {
    let diag = Diagnostic::error(ErrorCode::A0001, Label::new("It is not true.", Span::new(0, 7)))
        .with_message("Assertion failed.");

    assert_eq!(
        diag.to_string(),
        "error[A0001]: Assertion failed.\n  --> 0..7: It is not true."
    );
}
