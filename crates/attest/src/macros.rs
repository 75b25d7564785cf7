//! Command macros.
//!
//! Each command captures its call site and the source text of its operands
//! at expansion time, evaluates every operand exactly once, and hands
//! spanned operands to [`Assert`](crate::Assert). Every macro evaluates to
//! an [`AssertResult`](crate::AssertResult), so failures propagate with `?`.
//!
//! An optional trailing message follows the `format!` convention of
//! `std::assert_eq!` and, like the label, is only formatted on failure.

/// Capture the invoking call site and one span per operand.
#[doc(hidden)]
#[macro_export]
macro_rules! __attest_capture {
    ($command:literal, [$($operand:expr),* $(,)?]) => {
        $crate::Origin::capture(
            ::core::file!(),
            ::core::line!(),
            ::core::column!(),
            $command,
            [$(::core::stringify!($operand)),*],
        )
    };
}

/// `None`, or `Some(format_args!(...))` of the trailing message arguments.
///
/// The arguments are formatted only if the assertion fails.
#[doc(hidden)]
#[macro_export]
macro_rules! __attest_message {
    () => {
        ::core::option::Option::None
    };
    ($($arg:tt)+) => {
        ::core::option::Option::Some(::core::format_args!($($arg)+))
    };
}

/// Expand one binary command.
#[doc(hidden)]
#[macro_export]
macro_rules! __attest_binary {
    ($method:ident, $command:literal, $left:expr, $right:expr, [$($arg:tt)*]) => {
        match (&$left, &$right) {
            (left, right) => {
                let (origin, [left_span, right_span]) =
                    $crate::__attest_capture!($command, [$left, $right]);
                $crate::Assert::new(origin).$method(
                    $crate::Operand::new(left, left_span),
                    $crate::Operand::new(right, right_span),
                    $crate::__attest_message!($($arg)*),
                )
            }
        }
    };
}

/// Fails iff the condition is false.
///
/// ```
/// use attest::{assert_that, AssertResult};
///
/// fn check() -> AssertResult {
///     assert_that!(3 == 3)?;
///     assert_that!(2 + 2 == 4, label = "arithmetic is broken")?;
///     assert_that!(1 < 2, "ordering of {} and {}", 1, 2)
/// }
///
/// assert!(check().is_ok());
///
/// let err = assert_that!(42 == 3).unwrap_err();
/// assert_eq!(err.diagnostic().message, "Assertion failed.");
/// assert_eq!(err.diagnostic().label.text, "It is not true.");
/// assert_eq!(err.diagnostic().snippet(), Some("42 == 3"));
/// ```
#[macro_export]
macro_rules! assert_that {
    (@expand $cond:expr, $label:expr, $($arg:tt)*) => {{
        let condition: bool = $cond;
        let (origin, [span]) = $crate::__attest_capture!("assert_that", [$cond]);
        $crate::Assert::new(origin).assert(
            $crate::Operand::new(condition, span),
            $crate::__attest_message!($($arg)*),
            ::core::option::Option::map($label, |label| $crate::IntoLabel::into_label(label, span)),
        )
    }};
    ($cond:expr $(,)?) => {
        $crate::assert_that!(@expand $cond, ::core::option::Option::None::<$crate::Label>,)
    };
    ($cond:expr, label = $label:expr $(,)?) => {
        $crate::assert_that!(@expand $cond, ::core::option::Option::Some($label),)
    };
    ($cond:expr, label = $label:expr, $($arg:tt)+) => {
        $crate::assert_that!(@expand $cond, ::core::option::Option::Some($label), $($arg)+)
    };
    ($cond:expr, $($arg:tt)+) => {
        $crate::assert_that!(@expand $cond, ::core::option::Option::None::<$crate::Label>, $($arg)+)
    };
}

/// Passes iff the closure raises: panics, or returns an `Err`.
///
/// A closure whose body is a bare `panic!`, `unreachable!`, `todo!` or
/// `unimplemented!` call is accepted as written. Any other closure that
/// never returns needs an explicit unit return type, `|| -> () { ... }`,
/// since its return type cannot be inferred.
///
/// ```
/// use attest::assert_error;
///
/// let zero = std::hint::black_box(0);
/// assert!(assert_error!(|| 1 / zero).is_ok());
/// assert!(assert_error!(|| "x".parse::<i32>()).is_ok());
/// assert!(assert_error!(|| panic!("boom")).is_ok());
/// assert!(assert_error!(|| -> () { std::panic::panic_any(7_u8) }).is_ok());
///
/// let err = assert_error!(|| 12).unwrap_err();
/// assert_eq!(
///     err.diagnostic().label.text,
///     "There was no error during code execution: || 12"
/// );
/// ```
#[macro_export]
macro_rules! assert_error {
    (@expand [$($source:tt)*] $code:expr, $($arg:tt)*) => {{
        let (origin, [span]) = $crate::Origin::capture(
            ::core::file!(),
            ::core::line!(),
            ::core::column!(),
            "assert_error",
            [::core::stringify!($($source)*)],
        );
        $crate::Assert::new(origin).error(
            $crate::Operand::new($code, span),
            $crate::__attest_message!($($arg)*),
        )
    }};
    (@diverge $mac:ident [$($body:tt)*] $($arg:tt)*) => {
        $crate::assert_error!(
            @expand [|| $mac!($($body)*)]
            || -> () { ::core::$mac!($($body)*) },
            $($arg)*
        )
    };
    (|| panic!($($body:tt)*) $(, $($arg:tt)+)?) => {
        $crate::assert_error!(@diverge panic [$($body)*] $($($arg)+)?)
    };
    (|| unreachable!($($body:tt)*) $(, $($arg:tt)+)?) => {
        $crate::assert_error!(@diverge unreachable [$($body)*] $($($arg)+)?)
    };
    (|| todo!($($body:tt)*) $(, $($arg:tt)+)?) => {
        $crate::assert_error!(@diverge todo [$($body)*] $($($arg)+)?)
    };
    (|| unimplemented!($($body:tt)*) $(, $($arg:tt)+)?) => {
        $crate::assert_error!(@diverge unimplemented [$($body)*] $($($arg)+)?)
    };
    ($code:expr $(,)?) => {
        $crate::assert_error!(@expand [$code] $code,)
    };
    ($code:expr, $($arg:tt)+) => {
        $crate::assert_error!(@expand [$code] $code, $($arg)+)
    };
}

/// Unconditionally raises the skip signal.
///
/// ```
/// use attest::{assert_skip, AssertResult};
///
/// fn needs_network() -> AssertResult {
///     assert_skip!()?;
///     unreachable!()
/// }
///
/// assert!(needs_network().unwrap_err().is_skip());
/// ```
#[macro_export]
macro_rules! assert_skip {
    () => {{
        let (origin, []) = $crate::__attest_capture!("assert_skip", []);
        $crate::Assert::new(origin).skip()
    }};
}

/// Passes iff `left == right`.
///
/// ```
/// use attest::assert_equal;
///
/// assert!(assert_equal!(1 + 1, 2).is_ok());
///
/// let err = assert_equal!(1, 2).unwrap_err();
/// assert_eq!(err.diagnostic().label.text, "They are not equal. Left = 1. Right = 2.");
/// ```
#[macro_export]
macro_rules! assert_equal {
    ($left:expr, $right:expr $(,)?) => {
        $crate::__attest_binary!(equal, "assert_equal", $left, $right, [])
    };
    ($left:expr, $right:expr, $($arg:tt)+) => {
        $crate::__attest_binary!(equal, "assert_equal", $left, $right, [$($arg)+])
    };
}

/// Passes iff `left != right`.
#[macro_export]
macro_rules! assert_not_equal {
    ($left:expr, $right:expr $(,)?) => {
        $crate::__attest_binary!(not_equal, "assert_not_equal", $left, $right, [])
    };
    ($left:expr, $right:expr, $($arg:tt)+) => {
        $crate::__attest_binary!(not_equal, "assert_not_equal", $left, $right, [$($arg)+])
    };
}

/// Passes iff `left <= right`.
#[macro_export]
macro_rules! assert_less_or_equal {
    ($left:expr, $right:expr $(,)?) => {
        $crate::__attest_binary!(less_or_equal, "assert_less_or_equal", $left, $right, [])
    };
    ($left:expr, $right:expr, $($arg:tt)+) => {
        $crate::__attest_binary!(less_or_equal, "assert_less_or_equal", $left, $right, [$($arg)+])
    };
}

/// Passes iff `left < right`.
#[macro_export]
macro_rules! assert_less {
    ($left:expr, $right:expr $(,)?) => {
        $crate::__attest_binary!(less, "assert_less", $left, $right, [])
    };
    ($left:expr, $right:expr, $($arg:tt)+) => {
        $crate::__attest_binary!(less, "assert_less", $left, $right, [$($arg)+])
    };
}

/// Passes iff `left > right`.
#[macro_export]
macro_rules! assert_greater {
    ($left:expr, $right:expr $(,)?) => {
        $crate::__attest_binary!(greater, "assert_greater", $left, $right, [])
    };
    ($left:expr, $right:expr, $($arg:tt)+) => {
        $crate::__attest_binary!(greater, "assert_greater", $left, $right, [$($arg)+])
    };
}

/// Passes iff `left >= right`.
#[macro_export]
macro_rules! assert_greater_or_equal {
    ($left:expr, $right:expr $(,)?) => {
        $crate::__attest_binary!(greater_or_equal, "assert_greater_or_equal", $left, $right, [])
    };
    ($left:expr, $right:expr, $($arg:tt)+) => {
        $crate::__attest_binary!(
            greater_or_equal,
            "assert_greater_or_equal",
            $left,
            $right,
            [$($arg)+]
        )
    };
}

/// Passes iff `left` has exactly `right` elements.
///
/// `left` must implement [`HasLength`](crate::HasLength) and `right` must
/// be a `usize`; nothing is coerced.
///
/// ```
/// use attest::assert_length;
///
/// assert!(assert_length!(Vec::<u8>::new(), 0).is_ok());
///
/// let err = assert_length!([1], 0).unwrap_err();
/// assert_eq!(err.diagnostic().label.text, "Length of [1] is 1, not 0");
/// ```
#[macro_export]
macro_rules! assert_length {
    ($left:expr, $right:expr $(,)?) => {
        $crate::__attest_binary!(length, "assert_length", $left, $right, [])
    };
    ($left:expr, $right:expr, $($arg:tt)+) => {
        $crate::__attest_binary!(length, "assert_length", $left, $right, [$($arg)+])
    };
}

/// Passes iff `right` occurs in `left` as a contiguous substring.
///
/// ```
/// use attest::assert_str_contains;
///
/// assert!(assert_str_contains!("", "").is_ok());
///
/// let err = assert_str_contains!("abc", "d").unwrap_err();
/// assert_eq!(err.diagnostic().label.text, "'abc' does not contain 'd'.");
/// ```
#[macro_export]
macro_rules! assert_str_contains {
    ($left:expr, $right:expr $(,)?) => {
        $crate::__attest_binary!(str_contains, "assert_str_contains", $left, $right, [])
    };
    ($left:expr, $right:expr, $($arg:tt)+) => {
        $crate::__attest_binary!(str_contains, "assert_str_contains", $left, $right, [$($arg)+])
    };
}

/// Run a custom assertion with spanned operands.
///
/// `check` is called as `check(&Assert, Operand<&A>, Operand<&B>, ...)` and
/// reports failure through [`Assert::assert`](crate::Assert::assert) with its
/// own label.
///
/// ```
/// use attest::{assert_custom, Assert, AssertResult, Label, Operand, Spanned};
///
/// fn is_even(assert: &Assert, n: Operand<&i32>) -> AssertResult {
///     let label = Label::new(format!("{} is odd", n.value), n.span());
///     assert.assert(Operand::new(n.value % 2 == 0, n.span()), None, Some(label))
/// }
///
/// assert!(assert_custom!(is_even, 4).is_ok());
///
/// let err = assert_custom!(is_even, 3).unwrap_err();
/// assert_eq!(err.diagnostic().label.text, "3 is odd");
/// assert_eq!(err.diagnostic().snippet(), Some("3"));
/// ```
#[macro_export]
macro_rules! assert_custom {
    ($check:path $(, $operand:expr)* $(,)?) => {{
        let (origin, spans) = $crate::Origin::capture(
            ::core::file!(),
            ::core::line!(),
            ::core::column!(),
            "assert_custom",
            [::core::stringify!($check) $(, ::core::stringify!($operand))*],
        );
        // The first span covers the check's own path.
        let mut spans = ::core::iter::IntoIterator::into_iter(spans).skip(1);
        let assert = $crate::Assert::new(origin);
        $check(
            &assert,
            $($crate::Operand::new(
                &$operand,
                ::core::option::Option::unwrap_or_default(::core::iter::Iterator::next(&mut spans)),
            ),)*
        )
    }};
}
