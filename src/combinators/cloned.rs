use crate::traits::Sequence;
use crate::types::latch::Latch;
use crate::types::Step;

/// Clones borrowed values into owned ones.
///
/// Created by [`SequenceExt::cloned`](crate::SequenceExt::cloned).
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Cloned<S> {
    inner: S,
    latch: Latch,
}

impl<S> Cloned<S> {
    #[inline]
    pub(crate) fn new(inner: S) -> Self {
        Self { inner, latch: Latch::Ready }
    }
}

impl<'a, S, T> Sequence for Cloned<S>
where
    S: Sequence<Item = &'a T>,
    T: Clone + 'a,
{
    type Item = T;
    type Error = S::Error;

    fn try_advance(&mut self) -> Step<T, S::Error> {
        self.latch.check();
        let step = self.inner.try_advance().map(T::clone);
        self.latch.observe(step)
    }
}

/// Copies borrowed values into owned ones.
///
/// Created by [`SequenceExt::copied`](crate::SequenceExt::copied).
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Copied<S> {
    inner: S,
    latch: Latch,
}

impl<S> Copied<S> {
    #[inline]
    pub(crate) fn new(inner: S) -> Self {
        Self { inner, latch: Latch::Ready }
    }
}

impl<'a, S, T> Sequence for Copied<S>
where
    S: Sequence<Item = &'a T>,
    T: Copy + 'a,
{
    type Item = T;
    type Error = S::Error;

    fn try_advance(&mut self) -> Step<T, S::Error> {
        self.latch.check();
        let step = self.inner.try_advance().map(|value| *value);
        self.latch.observe(step)
    }
}
