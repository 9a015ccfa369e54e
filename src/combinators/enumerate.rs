use crate::traits::Sequence;
use crate::types::latch::Latch;
use crate::types::{Enumerated, Step};

/// Pairs every value with its zero-based position.
///
/// Created by [`SequenceExt::enumerate`](crate::SequenceExt::enumerate).
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Enumerate<S> {
    inner: S,
    index: usize,
    latch: Latch,
}

impl<S> Enumerate<S> {
    #[inline]
    pub(crate) fn new(inner: S) -> Self {
        Self { inner, index: 0, latch: Latch::Ready }
    }
}

impl<S: Sequence> Sequence for Enumerate<S> {
    type Item = Enumerated<S::Item>;
    type Error = S::Error;

    fn try_advance(&mut self) -> Step<Self::Item, S::Error> {
        self.latch.check();
        let step = match self.inner.try_advance() {
            Step::Yield(value) => {
                let item = Enumerated::new(self.index, value);
                self.index += 1;
                Step::Yield(item)
            }
            Step::Fail(error) => Step::Fail(error),
            Step::Done => Step::Done,
        };
        self.latch.observe(step)
    }
}
