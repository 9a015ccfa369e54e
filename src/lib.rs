//! Lazy, fallible sequences: iteration primitives where every step may fail.
//!
//! A [`Sequence`] is a single-pass, pull-based producer of values. Each pull
//! returns a [`Step`]: a value, a terminal error, or exhaustion. Combinators
//! thread the error channel through every stage, so a failure anywhere in a
//! pipeline stops the whole pipeline and reaches the consumer unchanged.
//!
//! The crate is organised in layers:
//!
//! - [`sources`] - constructors over slices, numeric progressions, repeated
//!   values, and pairings of two slices
//! - [`combinators`] - lazy stages built through [`SequenceExt`]
//! - [`ConsumeExt`] - terminal operations that drive a pipeline to a result
//! - [`convert`] - bridges to and from `std::iter`
//!
//! # Examples
//!
//! ## Pipeline over a borrowed slice
//!
//! ```
//! use seq_rail::prelude::*;
//!
//! let values = [1, 2, 3, 4, 5];
//! let squares: Result<Vec<i32>, SequenceError> = from_slice(&values)
//!     .filter_map(|v| Ok((v % 2 == 0).then(|| v * v)))
//!     .collect();
//!
//! assert_eq!(squares, Ok(vec![4, 16]));
//! ```
//!
//! ## Errors short-circuit
//!
//! ```
//! use seq_rail::prelude::*;
//!
//! let result = increment()
//!     .map(|n| if n < 3 { Ok(n) } else { Err("too large") })
//!     .collect();
//!
//! assert_eq!(result, Err("too large"));
//! ```
//!
//! ## Infinite sources are bounded with `take`
//!
//! ```
//! use seq_rail::prelude::*;
//!
//! let total = increment_by::<SequenceError>(10)
//!     .take(4)
//!     .fold(0, |acc, n| acc + n);
//!
//! assert_eq!(total.ok(), Some(60));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;

/// Lazy stages that wrap a sequence
pub mod combinators;
/// Bridges between sequences and `std::iter`
pub mod convert;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Functions that create sequences
pub mod sources;
/// The pull protocol and its extension traits
pub mod traits;
/// Step outcomes, pairs, and structural errors
pub mod types;

pub use sources::*;
pub use traits::{ConsumeExt, Sequence, SequenceExt};
pub use types::{BoxedSequence, Enumerated, Interrupted, SequenceError, Step, Tuple};
