//! Arithmetic progressions.

use core::marker::PhantomData;

use crate::traits::Sequence;
use crate::types::latch::Latch;
use crate::types::Step;

/// Integers in `[start, end)`. Created by [`range`].
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Range<E> {
    next: i64,
    end: i64,
    latch: Latch,
    _error: PhantomData<fn() -> E>,
}

impl<E> Sequence for Range<E> {
    type Item = i64;
    type Error = E;

    #[inline]
    fn try_advance(&mut self) -> Step<i64, E> {
        self.latch.check();
        let step = if self.next < self.end {
            let value = self.next;
            self.next += 1;
            Step::Yield(value)
        } else {
            Step::Done
        };
        self.latch.observe(step)
    }
}

/// Yields `start, start + 1, ..., end - 1`.
///
/// `start >= end` yields nothing.
///
/// # Examples
///
/// ```
/// use seq_rail::prelude::*;
///
/// assert_eq!(range::<SequenceError>(-2, 2).collect(), Ok(vec![-2, -1, 0, 1]));
/// assert_eq!(range::<SequenceError>(3, 1).count(), Ok(0));
/// ```
#[inline]
pub fn range<E>(start: i64, end: i64) -> Range<E> {
    Range { next: start, end, latch: Latch::Ready, _error: PhantomData }
}

/// An unbounded arithmetic progression. Created by [`increment`] and friends.
///
/// Values wrap around on overflow instead of panicking, so the sequence can be
/// pulled indefinitely.
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Increment<E> {
    next: i64,
    step: i64,
    latch: Latch,
    _error: PhantomData<fn() -> E>,
}

impl<E> Sequence for Increment<E> {
    type Item = i64;
    type Error = E;

    #[inline]
    fn try_advance(&mut self) -> Step<i64, E> {
        self.latch.check();
        let value = self.next;
        self.next = self.next.wrapping_add(self.step);
        Step::Yield(value)
    }
}

/// Yields `0, 1, 2, ...` forever.
#[inline]
pub fn increment<E>() -> Increment<E> {
    increment_from_by(0, 1)
}

/// Yields `0, step, 2 * step, ...` forever.
///
/// # Examples
///
/// ```
/// use seq_rail::prelude::*;
///
/// let out = increment_by::<SequenceError>(5).take(4).collect();
/// assert_eq!(out, Ok(vec![0, 5, 10, 15]));
/// ```
#[inline]
pub fn increment_by<E>(step: i64) -> Increment<E> {
    increment_from_by(0, step)
}

/// Yields `start, start + 1, ...` forever.
#[inline]
pub fn increment_from<E>(start: i64) -> Increment<E> {
    increment_from_by(start, 1)
}

/// Yields `start, start + step, start + 2 * step, ...` forever.
#[inline]
pub fn increment_from_by<E>(start: i64, step: i64) -> Increment<E> {
    Increment { next: start, step, latch: Latch::Ready, _error: PhantomData }
}
