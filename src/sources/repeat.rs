//! Sources that yield one value again and again.

use core::marker::PhantomData;

use crate::traits::Sequence;
use crate::types::latch::Latch;
use crate::types::Step;

/// Clones a value forever. Created by [`repeat`].
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Repeat<T, E> {
    value: T,
    latch: Latch,
    _error: PhantomData<fn() -> E>,
}

impl<T: Clone, E> Sequence for Repeat<T, E> {
    type Item = T;
    type Error = E;

    #[inline]
    fn try_advance(&mut self) -> Step<T, E> {
        self.latch.check();
        Step::Yield(self.value.clone())
    }
}

/// Yields clones of `value` forever.
///
/// # Examples
///
/// ```
/// use seq_rail::prelude::*;
///
/// let out = repeat::<_, SequenceError>("ab").take(3).join("");
/// assert_eq!(out.as_deref(), Ok("ababab"));
/// ```
#[inline]
pub fn repeat<T: Clone, E>(value: T) -> Repeat<T, E> {
    Repeat { value, latch: Latch::Ready, _error: PhantomData }
}

/// Yields a value a fixed number of times. Created by [`repeat_n`].
///
/// The last element is moved out rather than cloned.
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct RepeatN<T, E> {
    value: Option<T>,
    remaining: u64,
    latch: Latch,
    _error: PhantomData<fn() -> E>,
}

impl<T: Clone, E> Sequence for RepeatN<T, E> {
    type Item = T;
    type Error = E;

    fn try_advance(&mut self) -> Step<T, E> {
        self.latch.check();
        let step = match self.remaining {
            0 => Step::Done,
            1 => {
                self.remaining = 0;
                self.value.take().map_or(Step::Done, Step::Yield)
            }
            _ => {
                self.remaining -= 1;
                self.value.clone().map_or(Step::Done, Step::Yield)
            }
        };
        self.latch.observe(step)
    }
}

/// Yields `value` exactly `n` times.
///
/// Zero or negative `n` yields nothing.
///
/// # Examples
///
/// ```
/// use seq_rail::prelude::*;
///
/// assert_eq!(repeat_n::<_, SequenceError>('x', 3).collect(), Ok(vec!['x', 'x', 'x']));
/// assert_eq!(repeat_n::<_, SequenceError>('x', -1).count(), Ok(0));
/// ```
#[inline]
pub fn repeat_n<T: Clone, E>(value: T, n: i64) -> RepeatN<T, E> {
    let remaining = u64::try_from(n).unwrap_or(0);
    RepeatN {
        value: (remaining > 0).then_some(value),
        remaining,
        latch: Latch::Ready,
        _error: PhantomData,
    }
}
