#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A plain pair, yielded by [`zip`](crate::zip), [`zip_eq`](crate::zip_eq)
/// and [`product`](crate::product).
///
/// # Examples
///
/// ```
/// use seq_rail::Tuple;
///
/// let t = Tuple::new(1, "a");
/// assert_eq!(t.into_pair(), (1, "a"));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Default)]
pub struct Tuple<A, B> {
    pub a: A,
    pub b: B,
}

impl<A, B> Tuple<A, B> {
    #[inline]
    pub const fn new(a: A, b: B) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn into_pair(self) -> (A, B) {
        (self.a, self.b)
    }
}

impl<A, B> From<(A, B)> for Tuple<A, B> {
    #[inline]
    fn from((a, b): (A, B)) -> Self {
        Self { a, b }
    }
}

impl<A, B> From<Tuple<A, B>> for (A, B) {
    #[inline]
    fn from(tuple: Tuple<A, B>) -> Self {
        tuple.into_pair()
    }
}

/// A value paired with its zero-based position, yielded by
/// [`enumerate`](crate::SequenceExt::enumerate).
///
/// The index counts only values that were actually yielded downstream.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Enumerated<T> {
    pub index: usize,
    pub value: T,
}

impl<T> Enumerated<T> {
    #[inline]
    pub const fn new(index: usize, value: T) -> Self {
        Self { index, value }
    }

    #[inline]
    pub fn into_pair(self) -> (usize, T) {
        (self.index, self.value)
    }
}

impl<T> From<Enumerated<T>> for (usize, T) {
    #[inline]
    fn from(item: Enumerated<T>) -> Self {
        item.into_pair()
    }
}
