//! What counts as "raising" for values returned from `assert_error!` code.
//!
//! A panic always counts. A returned value counts only if it is an error
//! value; `None`, `false`, references, tuples and friends are ordinary
//! results.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// Classifies a returned value as raised or not.
pub trait Raises {
    /// `true` if returning this value means the code raised.
    fn raises(&self) -> bool;
}

impl<T, E> Raises for Result<T, E> {
    #[inline]
    fn raises(&self) -> bool {
        self.is_err()
    }
}

/// Implements [`Raises`] as "never raises" for plain value types.
macro_rules! never_raises {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Raises for $ty {
                #[inline]
                fn raises(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_raises!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
);

/// A borrowed value is an ordinary result, whatever it points at.
impl<T: ?Sized> Raises for &T {
    #[inline]
    fn raises(&self) -> bool {
        false
    }
}

/// Implements [`Raises`] as "never raises" for tuples of the given arities.
macro_rules! tuples_never_raise {
    ($(($($name:ident),+)),* $(,)?) => {
        $(
            impl<$($name),+> Raises for ($($name,)+) {
                #[inline]
                fn raises(&self) -> bool {
                    false
                }
            }
        )*
    };
}

tuples_never_raise!((A), (A, B), (A, B, C), (A, B, C, D), (A, B, C, D, E), (A, B, C, D, E, F));

impl<T> Raises for Option<T> {
    #[inline]
    fn raises(&self) -> bool {
        false
    }
}

impl<T> Raises for Vec<T> {
    #[inline]
    fn raises(&self) -> bool {
        false
    }
}

impl<T> Raises for VecDeque<T> {
    #[inline]
    fn raises(&self) -> bool {
        false
    }
}

impl<K, V, S> Raises for HashMap<K, V, S> {
    #[inline]
    fn raises(&self) -> bool {
        false
    }
}

impl<T, S> Raises for HashSet<T, S> {
    #[inline]
    fn raises(&self) -> bool {
        false
    }
}

impl<K, V> Raises for BTreeMap<K, V> {
    #[inline]
    fn raises(&self) -> bool {
        false
    }
}

impl<T> Raises for BTreeSet<T> {
    #[inline]
    fn raises(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_raises_only_on_err() {
        assert!(Err::<(), _>("boom").raises());
        assert!(!Ok::<_, ()>(1).raises());
    }

    #[test]
    fn test_plain_values_never_raise() {
        assert!(!().raises());
        assert!(!false.raises());
        assert!(!0_i32.raises());
        assert!(!f64::NAN.raises());
        assert!(!"".raises());
        assert!(!None::<u8>.raises());
        assert!(!Vec::<u8>::new().raises());
        assert!(!HashMap::<u8, u8>::new().raises());
    }

    /// Classify `value` the way `assert_error!` classifies a closure's return.
    fn returned<R: Raises>(value: R) -> bool {
        value.raises()
    }

    #[test]
    fn test_references_and_tuples_never_raise() {
        let values = vec![1, 2];
        assert!(!returned(&values[0]));
        assert!(!returned(values.as_slice()));
        assert!(!returned(&Err::<(), _>("borrowed")));
        assert!(!returned((1,)));
        assert!(!returned((1, "two")));
        assert!(!returned((1, 2.0, '3', Err::<(), ()>(()))));
    }
}
