use core::fmt::{self, Debug, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A fold that stopped on an error, together with what it had accumulated.
///
/// Returned by [`ConsumeExt::fold`](crate::ConsumeExt::fold). `partial` is the
/// accumulator after the last value that was folded successfully.
///
/// # Examples
///
/// ```
/// use seq_rail::{from_results, ConsumeExt};
///
/// let interrupted = from_results([Ok(1), Ok(2), Err("bad"), Ok(4)])
///     .fold(0, |acc, v| acc + v)
///     .unwrap_err();
///
/// assert_eq!(interrupted.partial, 3);
/// assert_eq!(interrupted.error, "bad");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Interrupted<B, E> {
    pub partial: B,
    pub error: E,
}

impl<B, E> Interrupted<B, E> {
    #[inline]
    pub const fn new(partial: B, error: E) -> Self {
        Self { partial, error }
    }

    /// Discards the partial result.
    #[inline]
    pub fn into_error(self) -> E {
        self.error
    }

    #[inline]
    pub fn into_parts(self) -> (B, E) {
        (self.partial, self.error)
    }
}

impl<B, E: Display> Display for Interrupted<B, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fold interrupted: {}", self.error)
    }
}

impl<B, E> core::error::Error for Interrupted<B, E>
where
    B: Debug,
    E: core::error::Error + 'static,
{
    #[inline]
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.error)
    }
}
