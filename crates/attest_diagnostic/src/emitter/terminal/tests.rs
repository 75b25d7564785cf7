use super::*;
use crate::ErrorCode;
use attest_ir::Span;
use pretty_assertions::assert_eq;

fn render(diagnostic: &Diagnostic, mode: ColorMode) -> String {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), mode, false);
    emitter.emit(diagnostic);
    emitter.flush();
    String::from_utf8(emitter.into_inner()).unwrap()
}

fn equal_failure() -> Diagnostic {
    let (origin, [left, right]) =
        Origin::capture("tests/math.rs", 12, 5, "assert_equal", ["1", "2"]);
    Diagnostic::error(
        ErrorCode::A0101,
        Label::new("They are not equal. Left = 1. Right = 2.", left.merge(right)),
    )
    .with_message("Assertion failed.")
    .with_origin(origin)
}

// Snippet rendering tests

#[test]
fn test_snippet_single_line_exact_layout() {
    let text = render(&equal_failure(), ColorMode::Never);
    let expected = "\
error[A0101]: Assertion failed.
  --> tests/math.rs:12:5
   |
12 | assert_equal!(1, 2)
   |               ^^^^ They are not equal. Left = 1. Right = 2.

";
    assert_eq!(text, expected);
}

#[test]
fn test_snippet_point_span() {
    let (origin, []) = Origin::capture("t.rs", 3, 1, "assert_skip", []);
    let diag = Diagnostic::skip(
        ErrorCode::A0003,
        Label::new("SKIPPING TEST", origin.arguments_span()),
    )
    .with_message("Test skipped.")
    .with_origin(origin);

    let text = render(&diag, ColorMode::Never);
    assert!(text.starts_with("skipped[A0003]: Test skipped."), "{text}");
    // Point span should still render at least one caret
    assert!(text.contains("^ SKIPPING TEST"), "{text}");
}

#[test]
fn test_snippet_multi_line_operand() {
    let (origin, [code]) = Origin::capture("t.rs", 40, 9, "assert_error", ["|| {\n    work()\n}"]);
    let diag = Diagnostic::error(ErrorCode::A0002, Label::new("no error", code))
        .with_message("Assertion failed.")
        .with_origin(origin);

    let text = render(&diag, ColorMode::Never);
    assert!(text.contains("--> t.rs:40:9"), "{text}");
    assert!(text.contains("40 | assert_error!(|| {"), "{text}");
    assert!(text.contains("41 |     work()"), "{text}");
    assert!(text.contains("42 | })"), "{text}");
    // Label text is attached to the last underlined line only.
    assert_eq!(text.matches("no error").count(), 1);
    assert!(text.contains("   | ^ no error"), "{text}");
}

#[test]
fn test_snippet_unicode_alignment() {
    let (origin, [left, right]) =
        Origin::capture("t.rs", 1, 1, "assert_str_contains", ["\"αβγ\"", "\"δ\""]);
    let diag = Diagnostic::error(ErrorCode::A0108, Label::new("missing", left.merge(right)))
        .with_message("Assertion failed.")
        .with_origin(origin);

    let text = render(&diag, ColorMode::Never);
    // "αβγ" is 6 bytes but 3 chars: carets are counted in chars.
    // `"αβγ", "δ"` is 5 + 2 + 3 = 10 chars.
    assert!(text.contains(&format!(" {}^^^^^^^^^^ missing", " ".repeat(20))), "{text}");
}

#[test]
fn test_snippet_gutter_width_two_digits() {
    let (origin, [cond]) = Origin::capture("t.rs", 9, 1, "assert_that", ["{\nfalse\n}"]);
    let diag = Diagnostic::error(ErrorCode::A0001, Label::new("It is not true.", cond))
        .with_message("Assertion failed.")
        .with_origin(origin);

    let text = render(&diag, ColorMode::Never);
    assert!(text.contains(" 9 | assert_that!({"), "{text}");
    assert!(text.contains("10 | false"), "{text}");
    assert!(text.contains("11 | })"), "{text}");
}

// Fallback (no origin) tests

#[test]
fn test_fallback_without_origin() {
    let diag = Diagnostic::error(ErrorCode::A0001, Label::new("It is not true.", Span::new(0, 7)))
        .with_message("Assertion failed.");

    let text = render(&diag, ColorMode::Never);
    assert!(text.contains("error[A0001]: Assertion failed."), "{text}");
    assert!(text.contains("--> 0..7: It is not true."), "{text}");
}

#[test]
fn test_emit_all() {
    let diagnostics = vec![
        equal_failure().with_message("first"),
        equal_failure().with_message("second"),
    ];
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit_all(&diagnostics);
    emitter.flush();

    let text = String::from_utf8(emitter.into_inner()).unwrap();
    assert!(text.contains("first"));
    assert!(text.contains("second"));
}

// --- ColorMode Tests ---

#[test]
fn test_color_mode_auto_follows_tty() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
}

#[test]
fn test_color_mode_always_and_never_ignore_tty() {
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}

#[test]
fn test_color_mode_default_is_auto() {
    assert_eq!(ColorMode::default(), ColorMode::Auto);
}

#[test]
fn test_with_color_mode_always() {
    let text = render(&equal_failure(), ColorMode::Always);
    assert!(text.contains("\x1b["));
    assert!(text.contains("\x1b[1;31merror\x1b[0m"));
}

#[test]
fn test_with_color_mode_never() {
    let text = render(&equal_failure(), ColorMode::Never);
    assert!(!text.contains("\x1b["));
}

#[test]
fn test_skip_uses_its_own_color() {
    let (origin, []) = Origin::capture("t.rs", 1, 1, "assert_skip", []);
    let diag = Diagnostic::skip(ErrorCode::A0003, Label::new("SKIPPING TEST", origin.arguments_span()))
        .with_origin(origin);
    let text = render(&diag, ColorMode::Always);
    assert!(text.contains("\x1b[1;33mskipped\x1b[0m"), "{text}");
}
