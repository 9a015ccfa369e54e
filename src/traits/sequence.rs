//! The pull protocol.

use crate::types::alloc_type::Box;
use crate::types::Step;

/// A lazy, single-pass producer of values whose production may fail.
///
/// `try_advance` is the only primitive: ask for the next element and receive
/// a [`Step`]. Everything else (combinators, consumers) is layered on top via
/// [`SequenceExt`](crate::SequenceExt) and [`ConsumeExt`](crate::ConsumeExt).
///
/// The caller's answer to "continue?" is simply whether it pulls again.
/// Terminal consumers take the sequence by value, so a spent sequence cannot
/// be reused once they return.
///
/// # Contract
///
/// - After `try_advance` returns [`Step::Fail`] or [`Step::Done`] the sequence
///   is halted. An error is final even though the caller might want more.
/// - Each pull touches the upstream source only as far as needed to produce
///   one element. No stage buffers ahead.
///
/// # Panics
///
/// Every sequence provided by this crate panics if `try_advance` is called
/// after it halted. Implementations outside the crate should do the same.
///
/// # Examples
///
/// ```
/// use seq_rail::{range, Sequence, Step};
///
/// let mut seq = range::<()>(0, 2);
/// assert_eq!(seq.try_advance(), Step::Yield(0));
/// assert_eq!(seq.try_advance(), Step::Yield(1));
/// assert_eq!(seq.try_advance(), Step::Done);
/// ```
pub trait Sequence {
    /// The type of the values produced.
    type Item;
    /// The type carried by the error channel.
    type Error;

    /// Produces the next element.
    fn try_advance(&mut self) -> Step<Self::Item, Self::Error>;
}

impl<S> Sequence for Box<S>
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;
    type Error = S::Error;

    #[inline]
    fn try_advance(&mut self) -> Step<Self::Item, Self::Error> {
        (**self).try_advance()
    }
}
