use core::marker::PhantomData;

use crate::traits::Sequence;
use crate::types::latch::Latch;
use crate::types::Step;

/// A sequence driven by a closure. Created by [`from_fn`].
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct FromFn<F, T, E> {
    f: F,
    latch: Latch,
    _step: PhantomData<fn() -> Step<T, E>>,
}

impl<F, T, E> Sequence for FromFn<F, T, E>
where
    F: FnMut() -> Step<T, E>,
{
    type Item = T;
    type Error = E;

    #[inline]
    fn try_advance(&mut self) -> Step<T, E> {
        self.latch.check();
        let step = (self.f)();
        self.latch.observe(step)
    }
}

/// Creates a sequence whose elements come from calling `f`.
///
/// The closure holds whatever cursor state it needs. It is never called again
/// once it has returned [`Step::Fail`] or [`Step::Done`].
///
/// # Examples
///
/// ```
/// use seq_rail::prelude::*;
///
/// let mut n = 1;
/// let powers = from_fn(move || {
///     let current = n;
///     n *= 2;
///     if current > 100 { Step::Fail("overflowed budget") } else { Step::Yield(current) }
/// });
///
/// let interrupted = powers.fold(0, |acc, v| acc + v).unwrap_err();
/// assert_eq!(interrupted.partial, 127);
/// ```
#[inline]
pub fn from_fn<F, T, E>(f: F) -> FromFn<F, T, E>
where
    F: FnMut() -> Step<T, E>,
{
    FromFn { f, latch: Latch::Ready, _step: PhantomData }
}
