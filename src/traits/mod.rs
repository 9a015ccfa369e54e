//! Core traits of the sequence engine.
//!
//! - [`Sequence`]: the pull primitive every source and combinator implements
//! - [`SequenceExt`]: lazy combinators (`map`, `filter`, `take`, ...)
//! - [`ConsumeExt`]: terminal operations (`collect`, `fold`, `any`, ...)
//!
//! Both extension traits are blanket-implemented for every `Sequence`.
//!
//! # Examples
//!
//! ```
//! use seq_rail::traits::{ConsumeExt, SequenceExt};
//! use seq_rail::range;
//!
//! let found = range::<()>(0, 100).map(|n| Ok(n * n)).position(|sq| *sq > 50);
//! assert_eq!(found, Ok(Some(8)));
//! ```

pub mod consume_ext;
pub mod sequence;
pub mod sequence_ext;

pub use consume_ext::ConsumeExt;
pub use sequence::Sequence;
pub use sequence_ext::SequenceExt;
