use crate::traits::Sequence;
use crate::types::latch::Latch;
use crate::types::Step;

/// Applies a fallible function to every value.
///
/// Created by [`SequenceExt::map`](crate::SequenceExt::map). When `f` fails
/// its error becomes the final element of the sequence.
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Map<S, F> {
    inner: S,
    f: F,
    latch: Latch,
}

impl<S, F> Map<S, F> {
    #[inline]
    pub(crate) fn new(inner: S, f: F) -> Self {
        Self { inner, f, latch: Latch::Ready }
    }
}

impl<S, F, U> Sequence for Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> Result<U, S::Error>,
{
    type Item = U;
    type Error = S::Error;

    fn try_advance(&mut self) -> Step<U, S::Error> {
        self.latch.check();
        let step = match self.inner.try_advance() {
            Step::Yield(value) => (self.f)(value).into(),
            Step::Fail(error) => Step::Fail(error),
            Step::Done => Step::Done,
        };
        self.latch.observe(step)
    }
}

/// Transforms the error channel.
///
/// Created by [`SequenceExt::map_err`](crate::SequenceExt::map_err).
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct MapErr<S, F> {
    inner: S,
    f: F,
    latch: Latch,
}

impl<S, F> MapErr<S, F> {
    #[inline]
    pub(crate) fn new(inner: S, f: F) -> Self {
        Self { inner, f, latch: Latch::Ready }
    }
}

impl<S, F, E2> Sequence for MapErr<S, F>
where
    S: Sequence,
    F: FnMut(S::Error) -> E2,
{
    type Item = S::Item;
    type Error = E2;

    fn try_advance(&mut self) -> Step<S::Item, E2> {
        self.latch.check();
        let step = self.inner.try_advance().map_err(&mut self.f);
        self.latch.observe(step)
    }
}

/// Converts the error channel with [`Into`].
///
/// Created by [`SequenceExt::err_into`](crate::SequenceExt::err_into).
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct ErrInto<S, E2> {
    inner: S,
    latch: Latch,
    _error: core::marker::PhantomData<fn() -> E2>,
}

impl<S, E2> ErrInto<S, E2> {
    #[inline]
    pub(crate) fn new(inner: S) -> Self {
        Self { inner, latch: Latch::Ready, _error: core::marker::PhantomData }
    }
}

impl<S, E2> Sequence for ErrInto<S, E2>
where
    S: Sequence,
    S::Error: Into<E2>,
{
    type Item = S::Item;
    type Error = E2;

    fn try_advance(&mut self) -> Step<S::Item, E2> {
        self.latch.check();
        let step = self.inner.try_advance().map_err(Into::into);
        self.latch.observe(step)
    }
}
