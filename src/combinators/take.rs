use crate::traits::Sequence;
use crate::types::latch::Latch;
use crate::types::Step;

/// Yields at most `n` values.
///
/// Created by [`SequenceExt::take`](crate::SequenceExt::take). Once `n` values
/// have gone out the source is never pulled again.
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Take<S> {
    inner: S,
    remaining: usize,
    latch: Latch,
}

impl<S> Take<S> {
    #[inline]
    pub(crate) fn new(inner: S, n: usize) -> Self {
        Self { inner, remaining: n, latch: Latch::Ready }
    }
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;
    type Error = S::Error;

    fn try_advance(&mut self) -> Step<S::Item, S::Error> {
        self.latch.check();
        if self.remaining == 0 {
            return self.latch.observe(Step::Done);
        }
        let step = self.inner.try_advance();
        if step.is_yield() {
            self.remaining -= 1;
        }
        self.latch.observe(step)
    }
}
