//! Terminal operations that drive a sequence to a result.
//!
//! Every consumer takes the sequence by value and pulls until exhaustion, an
//! error, or its own decision to stop. After observing a terminal step no
//! consumer pulls again.
//!
//! What happens to partial results on error is part of each operation's
//! contract: [`collect`](ConsumeExt::collect), [`collect_reversed`](ConsumeExt::collect_reversed)
//! and [`join`](ConsumeExt::join) discard them, [`fold`](ConsumeExt::fold)
//! hands them back inside [`Interrupted`].

use core::convert::Infallible;
use core::ops::ControlFlow;

use crate::convert::IntoResults;
use crate::traits::Sequence;
use crate::types::alloc_type::{String, Vec};
use crate::types::{Interrupted, SequenceError, Step};

/// Terminal operations available on every [`Sequence`].
pub trait ConsumeExt: Sequence + Sized {
    /// Pushes every value into `f` until `f` breaks, the sequence fails, or it
    /// is exhausted.
    ///
    /// This is the continuation vote in push form: returning
    /// [`ControlFlow::Break`] answers "do not continue" and no further pull is
    /// made.
    ///
    /// Returns `Ok(Break(b))` if `f` stopped early, `Ok(Continue(()))` if the
    /// sequence was exhausted, and `Err(e)` if it failed.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::ops::ControlFlow;
    /// use seq_rail::prelude::*;
    ///
    /// let mut seen = Vec::new();
    /// let flow = increment::<()>().drive(|n| {
    ///     seen.push(n);
    ///     if n == 2 { ControlFlow::Break(n) } else { ControlFlow::Continue(()) }
    /// });
    ///
    /// assert_eq!(flow, Ok(ControlFlow::Break(2)));
    /// assert_eq!(seen, vec![0, 1, 2]);
    /// ```
    fn drive<B, F>(mut self, mut f: F) -> Result<ControlFlow<B>, Self::Error>
    where
        F: FnMut(Self::Item) -> ControlFlow<B>,
    {
        loop {
            match self.try_advance() {
                Step::Yield(value) => {
                    if let ControlFlow::Break(b) = f(value) {
                        return Ok(ControlFlow::Break(b));
                    }
                }
                Step::Fail(error) => {
                    trace_event!(trace, "sequence failed; consumer stopping");
                    return Err(error);
                }
                Step::Done => return Ok(ControlFlow::Continue(())),
            }
        }
    }

    /// Collects every value in production order.
    ///
    /// On error the values gathered so far are dropped and only the error is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_rail::prelude::*;
    ///
    /// let ok = from_results::<_, i32, &str>([Ok(1), Ok(2)]).collect();
    /// assert_eq!(ok, Ok(vec![1, 2]));
    ///
    /// let err = from_results([Ok(1), Err("boom"), Ok(3)]).collect();
    /// assert_eq!(err, Err("boom"));
    /// ```
    fn collect(self) -> Result<Vec<Self::Item>, Self::Error> {
        let mut output = Vec::new();
        self.drive(|value| {
            output.push(value);
            ControlFlow::<Infallible>::Continue(())
        })?;
        Ok(output)
    }

    /// Collects every value, last produced first.
    ///
    /// Error semantics match [`collect`](ConsumeExt::collect).
    fn collect_reversed(self) -> Result<Vec<Self::Item>, Self::Error> {
        let mut output = self.collect()?;
        output.reverse();
        Ok(output)
    }

    /// Threads an accumulator through every value.
    ///
    /// Unlike [`collect`](ConsumeExt::collect), a failure keeps the work done:
    /// the error comes back in an [`Interrupted`] together with the
    /// accumulator as it stood after the last successfully folded value.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_rail::prelude::*;
    ///
    /// let values = [1, 2, 3, 4, 5];
    /// let sum = from_slice::<_, SequenceError>(&values).fold(0, |acc, v| acc + v);
    /// assert_eq!(sum, Ok(15));
    ///
    /// let text = from_slice::<_, SequenceError>(&values)
    ///     .fold(String::from("result: "), |acc, v| acc + &v.to_string());
    /// assert_eq!(text.unwrap(), "result: 12345");
    /// ```
    fn fold<B, F>(mut self, init: B, mut f: F) -> Result<B, Interrupted<B, Self::Error>>
    where
        F: FnMut(B, Self::Item) -> B,
    {
        let mut acc = init;
        loop {
            match self.try_advance() {
                Step::Yield(value) => acc = f(acc, value),
                Step::Fail(error) => {
                    trace_event!(trace, "fold interrupted; keeping partial accumulator");
                    return Err(Interrupted::new(acc, error));
                }
                Step::Done => return Ok(acc),
            }
        }
    }

    /// Returns `true` as soon as a value satisfies `predicate`.
    ///
    /// The predicate is never called on values past the first match. An error
    /// seen before any match is returned immediately.
    fn any<P>(self, mut predicate: P) -> Result<bool, Self::Error>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let flow = self.drive(|value| {
            if predicate(&value) {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })?;
        Ok(flow.is_break())
    }

    /// Returns `false` as soon as a value fails `predicate`.
    ///
    /// An error seen before any failing value is returned immediately.
    fn all<P>(self, mut predicate: P) -> Result<bool, Self::Error>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let flow = self.drive(|value| {
            if predicate(&value) {
                ControlFlow::Continue(())
            } else {
                ControlFlow::Break(())
            }
        })?;
        Ok(flow.is_continue())
    }

    /// Returns the first value, pulling exactly once.
    ///
    /// An exhausted sequence yields [`SequenceError::Empty`].
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_rail::prelude::*;
    ///
    /// assert_eq!(range::<SequenceError>(5, 9).first(), Ok(5));
    /// assert_eq!(range::<SequenceError>(5, 5).first(), Err(SequenceError::Empty));
    /// ```
    fn first(mut self) -> Result<Self::Item, Self::Error>
    where
        Self::Error: From<SequenceError>,
    {
        match self.try_advance() {
            Step::Yield(value) => Ok(value),
            Step::Fail(error) => Err(error),
            Step::Done => Err(empty_sequence()),
        }
    }

    /// Drains the sequence and returns its final value.
    ///
    /// There is no short-circuit: every element is pulled. An exhausted
    /// sequence yields [`SequenceError::Empty`]; an error anywhere wins over
    /// the values seen before it.
    fn last(self) -> Result<Self::Item, Self::Error>
    where
        Self::Error: From<SequenceError>,
    {
        let mut last = None;
        self.drive(|value| {
            last = Some(value);
            ControlFlow::<Infallible>::Continue(())
        })?;
        last.ok_or_else(empty_sequence)
    }

    /// Returns the first value satisfying `predicate`, or `None`.
    ///
    /// Not finding anything is not an error.
    fn find<P>(self, mut predicate: P) -> Result<Option<Self::Item>, Self::Error>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let flow = self.drive(|value| {
            if predicate(&value) {
                ControlFlow::Break(value)
            } else {
                ControlFlow::Continue(())
            }
        })?;
        Ok(break_value(flow))
    }

    /// Returns the zero-based index of the first value satisfying `predicate`.
    fn position<P>(self, mut predicate: P) -> Result<Option<usize>, Self::Error>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut index = 0;
        let flow = self.drive(|value| {
            if predicate(&value) {
                ControlFlow::Break(index)
            } else {
                index += 1;
                ControlFlow::Continue(())
            }
        })?;
        Ok(break_value(flow))
    }

    /// Counts the values produced.
    fn count(self) -> Result<usize, Self::Error> {
        let mut count = 0;
        self.drive(|_| {
            count += 1;
            ControlFlow::<Infallible>::Continue(())
        })?;
        Ok(count)
    }

    /// Concatenates string values with `separator` between them.
    ///
    /// On error the partial string is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_rail::prelude::*;
    ///
    /// let letters = ["a", "b", "c"];
    /// let joined = from_slice::<_, SequenceError>(&letters).join(", ");
    /// assert_eq!(joined.as_deref(), Ok("a, b, c"));
    /// ```
    fn join(self, separator: &str) -> Result<String, Self::Error>
    where
        Self::Item: AsRef<str>,
    {
        let mut output = String::new();
        let mut first = true;
        self.drive(|value| {
            if !first {
                output.push_str(separator);
            }
            first = false;
            output.push_str(value.as_ref());
            ControlFlow::<Infallible>::Continue(())
        })?;
        Ok(output)
    }

    /// Bridges into a standard iterator of `Result`s.
    ///
    /// The iterator ends right after yielding the first `Err`.
    #[inline]
    fn into_results(self) -> IntoResults<Self> {
        IntoResults::new(self)
    }
}

impl<S: Sequence> ConsumeExt for S {}

#[inline]
fn break_value<B>(flow: ControlFlow<B>) -> Option<B> {
    match flow {
        ControlFlow::Break(value) => Some(value),
        ControlFlow::Continue(()) => None,
    }
}

#[cold]
fn empty_sequence<E: From<SequenceError>>() -> E {
    trace_event!(debug, "sequence is empty");
    SequenceError::Empty.into()
}
