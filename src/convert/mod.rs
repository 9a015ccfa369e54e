//! Conversions between sequences and `std::iter`.
//!
//! These adapters make it straightforward to feed existing iterators into a
//! pipeline, or to hand a pipeline to code that expects an `Iterator`.
//!
//! - [`from_iter`] wraps an iterator that cannot fail
//! - [`from_results`] wraps an iterator of `Result`s; the first `Err` is final
//! - [`IntoResults`] goes the other way, created by
//!   [`ConsumeExt::into_results`](crate::ConsumeExt::into_results)
//!
//! # Examples
//!
//! ```
//! use seq_rail::prelude::*;
//!
//! let doubled: Vec<Result<i32, &str>> = from_results([Ok(1), Ok(2), Err("stop"), Ok(4)])
//!     .map(|v| Ok(v * 2))
//!     .into_results()
//!     .collect();
//!
//! assert_eq!(doubled, vec![Ok(2), Ok(4), Err("stop")]);
//! ```

use core::iter::FusedIterator;
use core::marker::PhantomData;

use crate::traits::Sequence;
use crate::types::latch::Latch;
use crate::types::Step;

/// Adapts an iterator as a sequence that never fails.
///
/// Created by [`from_iter`] and, for slices, by [`from_slice`](crate::from_slice)
/// and [`reversed`](crate::reversed).
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct FromIter<I, E> {
    iter: I,
    latch: Latch,
    _error: PhantomData<fn() -> E>,
}

impl<I, E> FromIter<I, E> {
    #[inline]
    pub(crate) fn new(iter: I) -> Self {
        Self { iter, latch: Latch::Ready, _error: PhantomData }
    }
}

impl<I: Iterator, E> Sequence for FromIter<I, E> {
    type Item = I::Item;
    type Error = E;

    #[inline]
    fn try_advance(&mut self) -> Step<I::Item, E> {
        self.latch.check();
        let step = match self.iter.next() {
            Some(value) => Step::Yield(value),
            None => Step::Done,
        };
        self.latch.observe(step)
    }
}

/// Creates a sequence from any iterator whose items cannot fail.
///
/// # Examples
///
/// ```
/// use seq_rail::prelude::*;
///
/// let chars = from_iter::<_, SequenceError>("abc".chars()).collect();
/// assert_eq!(chars, Ok(vec!['a', 'b', 'c']));
/// ```
#[inline]
pub fn from_iter<I, E>(iter: I) -> FromIter<I::IntoIter, E>
where
    I: IntoIterator,
{
    FromIter::new(iter.into_iter())
}

/// Adapts an iterator of `Result`s as a sequence.
///
/// Created by [`from_results`].
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct FromResults<I> {
    iter: I,
    latch: Latch,
}

impl<I, T, E> Sequence for FromResults<I>
where
    I: Iterator<Item = Result<T, E>>,
{
    type Item = T;
    type Error = E;

    #[inline]
    fn try_advance(&mut self) -> Step<T, E> {
        self.latch.check();
        let step = self.iter.next().into();
        self.latch.observe(step)
    }
}

/// Creates a sequence from an iterator of `Result`s.
///
/// The first `Err` becomes the final element; anything the iterator would
/// have produced after it is never requested.
#[inline]
pub fn from_results<I, T, E>(iter: I) -> FromResults<I::IntoIter>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    FromResults { iter: iter.into_iter(), latch: Latch::Ready }
}

/// Adapts a sequence as a standard [`Iterator`] of `Result`s.
///
/// The iterator is fused: after the sequence fails or is exhausted, `next`
/// keeps returning `None` without pulling the sequence again.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntoResults<S> {
    inner: S,
    latch: Latch,
}

impl<S> IntoResults<S> {
    #[inline]
    pub(crate) fn new(inner: S) -> Self {
        Self { inner, latch: Latch::Ready }
    }
}

impl<S: Sequence> Iterator for IntoResults<S> {
    type Item = Result<S::Item, S::Error>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.latch.is_halted() {
            return None;
        }
        let step = self.inner.try_advance();
        self.latch.observe(step).into_result()
    }
}

impl<S: Sequence> FusedIterator for IntoResults<S> {}
