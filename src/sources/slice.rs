//! Sources that borrow caller-owned slices.
//!
//! These sequences yield references into the slice rather than copies. The
//! borrow lasts as long as the sequence, so the backing storage cannot be
//! dropped or mutated while a pipeline over it is alive.

use core::iter::Rev;
use core::marker::PhantomData;
use core::slice;

use smallvec::SmallVec;

use crate::convert::FromIter;
use crate::traits::Sequence;
use crate::types::latch::Latch;
use crate::types::Step;

/// Sequence over a slice, front to back. Created by [`from_slice`].
pub type FromSlice<'a, T, E> = FromIter<slice::Iter<'a, T>, E>;

/// Sequence over a slice, back to front. Created by [`reversed`].
pub type Reversed<'a, T, E> = FromIter<Rev<slice::Iter<'a, T>>, E>;

/// Yields a reference to each element of `items` in order.
///
/// The sequence is finite. To traverse the slice again, call `from_slice`
/// again.
///
/// # Examples
///
/// ```
/// use seq_rail::prelude::*;
///
/// let values = vec![10, 20, 30];
/// let refs = from_slice::<_, SequenceError>(&values).collect().unwrap();
///
/// assert_eq!(refs, vec![&10, &20, &30]);
/// assert!(core::ptr::eq(refs[0], &values[0]));
/// ```
#[inline]
pub fn from_slice<T, E>(items: &[T]) -> FromSlice<'_, T, E> {
    FromIter::new(items.iter())
}

/// Yields a reference to each element of `items`, last first.
#[inline]
pub fn reversed<T, E>(items: &[T]) -> Reversed<'_, T, E> {
    FromIter::new(items.iter().rev())
}

/// Repeats the elements of a slice forever. Created by [`cycle`].
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Cycle<'a, T, E> {
    items: &'a [T],
    pos: usize,
    latch: Latch,
    _error: PhantomData<fn() -> E>,
}

impl<'a, T, E> Sequence for Cycle<'a, T, E> {
    type Item = &'a T;
    type Error = E;

    fn try_advance(&mut self) -> Step<&'a T, E> {
        self.latch.check();
        let items = self.items;
        let step = match items.get(self.pos) {
            Some(value) => {
                self.pos = (self.pos + 1) % items.len();
                Step::Yield(value)
            }
            None => Step::Done,
        };
        self.latch.observe(step)
    }
}

/// Yields the elements of `items` over and over.
///
/// An empty slice yields nothing rather than spinning forever.
///
/// # Examples
///
/// ```
/// use seq_rail::prelude::*;
///
/// let values = [1, 2, 3];
/// let out = cycle::<_, SequenceError>(&values).copied().take(7).collect();
/// assert_eq!(out, Ok(vec![1, 2, 3, 1, 2, 3, 1]));
///
/// let empty: [i32; 0] = [];
/// assert_eq!(cycle::<_, SequenceError>(&empty).count(), Ok(0));
/// ```
#[inline]
pub fn cycle<T, E>(items: &[T]) -> Cycle<'_, T, E> {
    Cycle { items, pos: 0, latch: Latch::Ready, _error: PhantomData }
}

/// Concatenates several slices. Created by [`chain`].
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Chain<'a, T, E> {
    slices: SmallVec<[&'a [T]; 4]>,
    slice: usize,
    pos: usize,
    latch: Latch,
    _error: PhantomData<fn() -> E>,
}

impl<'a, T, E> Sequence for Chain<'a, T, E> {
    type Item = &'a T;
    type Error = E;

    fn try_advance(&mut self) -> Step<&'a T, E> {
        self.latch.check();
        let step = loop {
            let Some(&current) = self.slices.get(self.slice) else {
                break Step::Done;
            };
            if let Some(value) = current.get(self.pos) {
                self.pos += 1;
                break Step::Yield(value);
            }
            self.slice += 1;
            self.pos = 0;
        };
        self.latch.observe(step)
    }
}

/// Yields the elements of every slice in `slices`, in argument order.
///
/// # Examples
///
/// ```
/// use seq_rail::prelude::*;
///
/// let a = [1, 2];
/// let b: [i32; 0] = [];
/// let c = [3];
/// let out = chain::<_, SequenceError>([&a[..], &b[..], &c[..]]).copied().collect();
///
/// assert_eq!(out, Ok(vec![1, 2, 3]));
/// ```
#[inline]
pub fn chain<'a, T, E>(slices: impl IntoIterator<Item = &'a [T]>) -> Chain<'a, T, E> {
    Chain {
        slices: slices.into_iter().collect(),
        slice: 0,
        pos: 0,
        latch: Latch::Ready,
        _error: PhantomData,
    }
}
