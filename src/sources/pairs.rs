//! Sources that pair up the elements of two slices.

use core::marker::PhantomData;

use crate::traits::Sequence;
use crate::types::latch::Latch;
use crate::types::{SequenceError, Step, Tuple};

/// Cartesian product of two slices. Created by [`product`].
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Product<'a, 'b, A, B, E> {
    left: &'a [A],
    right: &'b [B],
    row: usize,
    col: usize,
    latch: Latch,
    _error: PhantomData<fn() -> E>,
}

impl<'a, 'b, A, B, E> Sequence for Product<'a, 'b, A, B, E> {
    type Item = Tuple<&'a A, &'b B>;
    type Error = E;

    fn try_advance(&mut self) -> Step<Self::Item, E> {
        self.latch.check();
        let (left, right) = (self.left, self.right);
        let step = match (left.get(self.row), right.get(self.col)) {
            (Some(a), Some(b)) => {
                self.col += 1;
                if self.col == right.len() {
                    self.col = 0;
                    self.row += 1;
                }
                Step::Yield(Tuple::new(a, b))
            }
            _ => Step::Done,
        };
        self.latch.observe(step)
    }
}

/// Yields every pair `(a, b)` with `a` from `left` and `b` from `right`.
///
/// Row-major: for each element of `left`, all elements of `right`. If either
/// slice is empty the product is empty.
///
/// # Examples
///
/// ```
/// use seq_rail::prelude::*;
///
/// let left = [1, 2];
/// let right = ['a', 'b'];
/// let pairs = product::<_, _, SequenceError>(&left, &right)
///     .map(|t| Ok((*t.a, *t.b)))
///     .collect();
///
/// assert_eq!(pairs, Ok(vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]));
/// ```
#[inline]
pub fn product<'a, 'b, A, B, E>(left: &'a [A], right: &'b [B]) -> Product<'a, 'b, A, B, E> {
    Product { left, right, row: 0, col: 0, latch: Latch::Ready, _error: PhantomData }
}

/// Positional pairs of two slices. Created by [`zip`].
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Zip<'a, 'b, A, B, E> {
    left: &'a [A],
    right: &'b [B],
    pos: usize,
    latch: Latch,
    _error: PhantomData<fn() -> E>,
}

impl<'a, 'b, A, B, E> Zip<'a, 'b, A, B, E> {
    #[inline]
    fn pair_at(&mut self) -> Step<Tuple<&'a A, &'b B>, E> {
        let (left, right) = (self.left, self.right);
        match (left.get(self.pos), right.get(self.pos)) {
            (Some(a), Some(b)) => {
                self.pos += 1;
                Step::Yield(Tuple::new(a, b))
            }
            _ => Step::Done,
        }
    }
}

impl<'a, 'b, A, B, E> Sequence for Zip<'a, 'b, A, B, E> {
    type Item = Tuple<&'a A, &'b B>;
    type Error = E;

    fn try_advance(&mut self) -> Step<Self::Item, E> {
        self.latch.check();
        let step = self.pair_at();
        self.latch.observe(step)
    }
}

/// Pairs elements positionally, stopping at the end of the shorter slice.
///
/// # Examples
///
/// ```
/// use seq_rail::prelude::*;
///
/// let numbers = [1, 2, 3, 4, 5];
/// let letters = ["a", "b", "c"];
/// assert_eq!(zip::<_, _, SequenceError>(&numbers, &letters).count(), Ok(3));
/// ```
#[inline]
pub fn zip<'a, 'b, A, B, E>(left: &'a [A], right: &'b [B]) -> Zip<'a, 'b, A, B, E> {
    Zip { left, right, pos: 0, latch: Latch::Ready, _error: PhantomData }
}

/// Positional pairs of two slices that must be the same length. Created by
/// [`zip_eq`].
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct ZipEq<'a, 'b, A, B, E> {
    zip: Zip<'a, 'b, A, B, E>,
    checked: bool,
}

impl<'a, 'b, A, B, E> Sequence for ZipEq<'a, 'b, A, B, E>
where
    E: From<SequenceError>,
{
    type Item = Tuple<&'a A, &'b B>;
    type Error = E;

    fn try_advance(&mut self) -> Step<Self::Item, E> {
        self.zip.latch.check();
        let (left, right) = (self.zip.left.len(), self.zip.right.len());
        let step = if !self.checked && left != right {
            trace_event!(debug, left, right, "zip_eq length mismatch");
            Step::Fail(SequenceError::LengthMismatch { left, right }.into())
        } else {
            self.checked = true;
            self.zip.pair_at()
        };
        self.zip.latch.observe(step)
    }
}

/// Like [`zip`], but slices of different lengths are an error.
///
/// The length check happens on the first pull, not at construction: a
/// mismatch is delivered as a single [`SequenceError::LengthMismatch`]
/// element and nothing else is yielded.
///
/// # Examples
///
/// ```
/// use seq_rail::prelude::*;
///
/// let numbers = [1, 2, 3, 4, 5];
/// let letters = ["a", "b", "c"];
/// let err = zip_eq::<_, _, SequenceError>(&numbers, &letters).collect();
///
/// assert_eq!(err, Err(SequenceError::LengthMismatch { left: 5, right: 3 }));
/// ```
#[inline]
pub fn zip_eq<'a, 'b, A, B, E>(left: &'a [A], right: &'b [B]) -> ZipEq<'a, 'b, A, B, E>
where
    E: From<SequenceError>,
{
    ZipEq { zip: zip(left, right), checked: false }
}
