//! Length-bearing values for `assert_length!`.
//!
//! Using the command on a type without a [`HasLength`] impl is a compile
//! error rather than a runtime one.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// Values with an element count.
pub trait HasLength {
    /// Number of elements. Strings report their byte length.
    fn length(&self) -> usize;
}

impl HasLength for str {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl HasLength for String {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> HasLength for [T] {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> HasLength for [T; N] {
    #[inline]
    fn length(&self) -> usize {
        N
    }
}

impl<T> HasLength for Vec<T> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> HasLength for VecDeque<T> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> HasLength for HashMap<K, V, S> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, S> HasLength for HashSet<T, S> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V> HasLength for BTreeMap<K, V> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> HasLength for BTreeSet<T> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T: HasLength + ?Sized> HasLength for &T {
    #[inline]
    fn length(&self) -> usize {
        (**self).length()
    }
}
