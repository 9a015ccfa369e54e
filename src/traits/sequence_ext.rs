//! Extension trait that builds combinator pipelines.
//!
//! Every method here is lazy: it wraps `self` and returns immediately. Nothing
//! is pulled until a terminal operation from [`ConsumeExt`](crate::ConsumeExt)
//! drives the pipeline.

use crate::combinators::{
    Cloned, Copied, Enumerate, ErrInto, Filter, FilterMap, Inspect, Map, MapErr, Take,
};
use crate::traits::Sequence;
use crate::types::alloc_type::Box;
use crate::types::BoxedSequence;

/// Combinators available on every [`Sequence`].
///
/// # Examples
///
/// ```
/// use seq_rail::prelude::*;
///
/// let evens: Result<Vec<i64>, &str> = range(0, 10)
///     .filter(|n| n % 2 == 0)
///     .map(|n| Ok(n * 10))
///     .take(3)
///     .collect();
///
/// assert_eq!(evens, Ok(vec![0, 20, 40]));
/// ```
pub trait SequenceExt: Sequence + Sized {
    /// Applies `f` to each value.
    ///
    /// If `f` returns an error, that error becomes the final element and the
    /// stage halts.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_rail::prelude::*;
    ///
    /// let values = ["1", "2", "x", "4"];
    /// let parsed = from_slice(&values)
    ///     .map(|s| s.parse::<i32>().map_err(|_| format!("not a number: {s}")))
    ///     .collect();
    ///
    /// assert_eq!(parsed, Err("not a number: x".to_string()));
    /// ```
    #[inline]
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        F: FnMut(Self::Item) -> Result<U, Self::Error>,
    {
        Map::new(self, f)
    }

    /// Yields only the values for which `predicate` returns `true`.
    #[inline]
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Filters and maps in one pass.
    ///
    /// `f` returns `Ok(Some(u))` to yield `u`, `Ok(None)` to skip the value,
    /// or `Err(e)` to end the sequence with `e`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_rail::prelude::*;
    ///
    /// let values = [1, 2, 3, 4, 5];
    /// let squares: Result<Vec<i32>, SequenceError> = from_slice(&values)
    ///     .filter_map(|v| Ok((v % 2 == 0).then(|| v * v)))
    ///     .collect();
    ///
    /// assert_eq!(squares, Ok(vec![4, 16]));
    /// ```
    #[inline]
    fn filter_map<U, F>(self, f: F) -> FilterMap<Self, F>
    where
        F: FnMut(Self::Item) -> Result<Option<U>, Self::Error>,
    {
        FilterMap::new(self, f)
    }

    /// Pairs each value with its zero-based position.
    #[inline]
    fn enumerate(self) -> Enumerate<Self> {
        Enumerate::new(self)
    }

    /// Yields at most `n` values, then halts without pulling the source again.
    ///
    /// `take(0)` yields nothing and never touches the source.
    #[inline]
    fn take(self, n: usize) -> Take<Self> {
        Take::new(self, n)
    }

    /// Calls `f` on each value as it passes through.
    #[inline]
    fn inspect<F>(self, f: F) -> Inspect<Self, F>
    where
        F: FnMut(&Self::Item),
    {
        Inspect::new(self, f)
    }

    /// Clones borrowed values, e.g. those yielded by [`from_slice`](crate::from_slice).
    #[inline]
    fn cloned<'a, T>(self) -> Cloned<Self>
    where
        Self: Sequence<Item = &'a T>,
        T: Clone + 'a,
    {
        Cloned::new(self)
    }

    /// Copies borrowed values.
    #[inline]
    fn copied<'a, T>(self) -> Copied<Self>
    where
        Self: Sequence<Item = &'a T>,
        T: Copy + 'a,
    {
        Copied::new(self)
    }

    /// Transforms the error channel.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_rail::prelude::*;
    ///
    /// let err = from_results([Ok(1), Err(404)])
    ///     .map_err(|code| format!("status {code}"))
    ///     .collect()
    ///     .unwrap_err();
    ///
    /// assert_eq!(err, "status 404");
    /// ```
    #[inline]
    fn map_err<E2, F>(self, f: F) -> MapErr<Self, F>
    where
        F: FnMut(Self::Error) -> E2,
    {
        MapErr::new(self, f)
    }

    /// Converts the error channel into `E2`.
    #[inline]
    fn err_into<E2>(self) -> ErrInto<Self, E2>
    where
        Self::Error: Into<E2>,
    {
        ErrInto::new(self)
    }

    /// Erases the concrete pipeline type.
    ///
    /// Useful when different branches build different pipelines over the same
    /// item and error types.
    #[inline]
    fn boxed<'a>(self) -> BoxedSequence<'a, Self::Item, Self::Error>
    where
        Self: 'a,
    {
        Box::new(self)
    }
}

impl<S: Sequence> SequenceExt for S {}
