use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Structural errors raised by the engine itself.
///
/// Caller-supplied functions fail with their own error type; these variants
/// are produced only where a constructor or consumer has a precondition of its
/// own. Sequences that can raise them require `E: From<SequenceError>` so the
/// error travels through the same channel as every other failure.
///
/// # Examples
///
/// ```
/// use seq_rail::{zip_eq, ConsumeExt, SequenceError};
///
/// let left = [1, 2, 3];
/// let right = ["a"];
/// let err = zip_eq::<_, _, SequenceError>(&left, &right).collect().unwrap_err();
///
/// assert_eq!(err, SequenceError::LengthMismatch { left: 3, right: 1 });
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum SequenceError {
    /// [`zip_eq`](crate::zip_eq) was given slices of different lengths.
    LengthMismatch { left: usize, right: usize },
    /// [`first`](crate::ConsumeExt::first) or [`last`](crate::ConsumeExt::last)
    /// found nothing to return.
    Empty,
}

impl Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { left, right } => {
                write!(f, "sequences are not the same length (left: {left}, right: {right})")
            }
            Self::Empty => f.write_str("sequence is empty"),
        }
    }
}

impl core::error::Error for SequenceError {}
