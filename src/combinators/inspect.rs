use crate::traits::Sequence;
use crate::types::latch::Latch;
use crate::types::Step;

/// Calls a function with a reference to each value before passing it on.
///
/// Created by [`SequenceExt::inspect`](crate::SequenceExt::inspect).
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Inspect<S, F> {
    inner: S,
    f: F,
    latch: Latch,
}

impl<S, F> Inspect<S, F> {
    #[inline]
    pub(crate) fn new(inner: S, f: F) -> Self {
        Self { inner, f, latch: Latch::Ready }
    }
}

impl<S, F> Sequence for Inspect<S, F>
where
    S: Sequence,
    F: FnMut(&S::Item),
{
    type Item = S::Item;
    type Error = S::Error;

    fn try_advance(&mut self) -> Step<S::Item, S::Error> {
        self.latch.check();
        let step = self.inner.try_advance();
        if let Step::Yield(value) = &step {
            (self.f)(value);
        }
        self.latch.observe(step)
    }
}
