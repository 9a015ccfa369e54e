//! Value types shared by every stage of a pipeline.
//!
//! - [`Step`] - the outcome of one pull
//! - [`Tuple`] and [`Enumerated`] - pairs produced by sources and combinators
//! - [`SequenceError`] - structural errors raised by the engine
//! - [`Interrupted`] - a fold's partial result plus the error that stopped it
//!
//! # Examples
//!
//! ```
//! use seq_rail::types::{Step, Tuple};
//!
//! let step: Step<Tuple<i32, char>, ()> = Step::Yield(Tuple::new(1, 'a'));
//! assert_eq!(step.value().map(Tuple::into_pair), Some((1, 'a')));
//! ```
pub mod alloc_type;
pub mod interrupted;
pub(crate) mod latch;
pub mod sequence_error;
pub mod step;
pub mod tuple;

pub use interrupted::Interrupted;
pub use sequence_error::SequenceError;
pub use step::Step;
pub use tuple::{Enumerated, Tuple};

use crate::traits::Sequence;
use alloc_type::Box;

/// A type-erased sequence, produced by [`SequenceExt::boxed`](crate::SequenceExt::boxed).
///
/// # Type Parameters
///
/// * `T` - The value type
/// * `E` - The error type
pub type BoxedSequence<'a, T, E> = Box<dyn Sequence<Item = T, Error = E> + 'a>;
