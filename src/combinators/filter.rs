use crate::traits::Sequence;
use crate::types::latch::Latch;
use crate::types::Step;

/// Yields only the values accepted by a predicate.
///
/// Created by [`SequenceExt::filter`](crate::SequenceExt::filter). Upstream
/// errors bypass the predicate.
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Filter<S, P> {
    inner: S,
    predicate: P,
    latch: Latch,
}

impl<S, P> Filter<S, P> {
    #[inline]
    pub(crate) fn new(inner: S, predicate: P) -> Self {
        Self { inner, predicate, latch: Latch::Ready }
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;
    type Error = S::Error;

    fn try_advance(&mut self) -> Step<S::Item, S::Error> {
        self.latch.check();
        let step = loop {
            match self.inner.try_advance() {
                Step::Yield(value) if (self.predicate)(&value) => break Step::Yield(value),
                Step::Yield(_) => continue,
                terminal => break terminal,
            }
        };
        self.latch.observe(step)
    }
}

/// Filters and maps in a single pass.
///
/// Created by [`SequenceExt::filter_map`](crate::SequenceExt::filter_map).
/// `Ok(Some(u))` yields `u`, `Ok(None)` skips the value, `Err(e)` ends the
/// sequence with `e`.
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct FilterMap<S, F> {
    inner: S,
    f: F,
    latch: Latch,
}

impl<S, F> FilterMap<S, F> {
    #[inline]
    pub(crate) fn new(inner: S, f: F) -> Self {
        Self { inner, f, latch: Latch::Ready }
    }
}

impl<S, F, U> Sequence for FilterMap<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> Result<Option<U>, S::Error>,
{
    type Item = U;
    type Error = S::Error;

    fn try_advance(&mut self) -> Step<U, S::Error> {
        self.latch.check();
        let step = loop {
            match self.inner.try_advance() {
                Step::Yield(value) => match (self.f)(value) {
                    Ok(Some(mapped)) => break Step::Yield(mapped),
                    Ok(None) => continue,
                    Err(error) => break Step::Fail(error),
                },
                Step::Fail(error) => break Step::Fail(error),
                Step::Done => break Step::Done,
            }
        };
        self.latch.observe(step)
    }
}
