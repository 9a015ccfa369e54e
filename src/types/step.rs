/// The outcome of a single pull on a [`Sequence`](crate::Sequence).
///
/// Exactly one of three things happens when a sequence is asked for its next
/// element: it produces a value, it fails, or it has nothing left. `Fail` and
/// `Done` are terminal: the sequence that returned them must not be pulled
/// again.
///
/// # Type Parameters
///
/// * `T` - The value type
/// * `E` - The error type
///
/// # Examples
///
/// ```
/// use seq_rail::Step;
///
/// let step: Step<i32, &str> = Step::Yield(7);
/// assert!(!step.is_terminal());
/// assert_eq!(step.into_result(), Some(Ok(7)));
///
/// let done: Step<i32, &str> = Step::Done;
/// assert!(done.is_terminal());
/// assert_eq!(done.into_result(), None);
/// ```
#[must_use]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum Step<T, E> {
    /// A value was produced; the sequence may be pulled again.
    Yield(T),
    /// Production failed; the error is the final element.
    Fail(E),
    /// The sequence is exhausted.
    Done,
}

impl<T, E> Step<T, E> {
    /// Returns `true` for [`Step::Yield`].
    #[must_use]
    #[inline]
    pub fn is_yield(&self) -> bool {
        matches!(self, Self::Yield(_))
    }

    /// Returns `true` for [`Step::Fail`].
    #[must_use]
    #[inline]
    pub fn is_fail(&self) -> bool {
        matches!(self, Self::Fail(_))
    }

    /// Returns `true` for [`Step::Done`].
    #[must_use]
    #[inline]
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Returns `true` if no further pull is allowed after this step.
    #[must_use]
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !self.is_yield()
    }

    /// Maps the yielded value, leaving errors and exhaustion untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_rail::Step;
    ///
    /// let step: Step<i32, &str> = Step::Yield(21);
    /// assert_eq!(step.map(|v| v * 2), Step::Yield(42));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Step<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Yield(value) => Step::Yield(f(value)),
            Self::Fail(error) => Step::Fail(error),
            Self::Done => Step::Done,
        }
    }

    /// Maps the error, leaving values and exhaustion untouched.
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Step<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Yield(value) => Step::Yield(value),
            Self::Fail(error) => Step::Fail(f(error)),
            Self::Done => Step::Done,
        }
    }

    /// Returns the yielded value, if any.
    #[must_use]
    #[inline]
    pub fn value(self) -> Option<T> {
        match self {
            Self::Yield(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the error, if any.
    #[must_use]
    #[inline]
    pub fn error(self) -> Option<E> {
        match self {
            Self::Fail(error) => Some(error),
            _ => None,
        }
    }

    /// Converts into the shape `std::iter` uses for fallible items.
    ///
    /// `Done` becomes `None`.
    #[must_use]
    #[inline]
    pub fn into_result(self) -> Option<Result<T, E>> {
        match self {
            Self::Yield(value) => Some(Ok(value)),
            Self::Fail(error) => Some(Err(error)),
            Self::Done => None,
        }
    }
}

impl<T, E> From<Result<T, E>> for Step<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Yield(value),
            Err(error) => Self::Fail(error),
        }
    }
}

impl<T, E> From<Option<Result<T, E>>> for Step<T, E> {
    #[inline]
    fn from(item: Option<Result<T, E>>) -> Self {
        match item {
            Some(result) => result.into(),
            None => Self::Done,
        }
    }
}
