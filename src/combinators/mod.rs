//! Lazy stages that wrap a [`Sequence`](crate::Sequence).
//!
//! Building a combinator performs no work; the wrapped sequence is pulled
//! only when the combinator itself is pulled, one element at a time. Every
//! stage forwards upstream errors unchanged and halts after its first
//! terminal step.
//!
//! The types here are constructed through [`SequenceExt`](crate::SequenceExt).
//!
//! # Examples
//!
//! ```
//! use seq_rail::prelude::*;
//!
//! let words = ["x", "y", "z"];
//! let pairs: Vec<(usize, &str)> = from_slice::<_, SequenceError>(&words)
//!     .copied()
//!     .enumerate()
//!     .map(|item| Ok(item.into_pair()))
//!     .collect()
//!     .unwrap();
//!
//! assert_eq!(pairs, vec![(0, "x"), (1, "y"), (2, "z")]);
//! ```
pub mod cloned;
pub mod enumerate;
pub mod filter;
pub mod inspect;
pub mod map;
pub mod take;

pub use cloned::{Cloned, Copied};
pub use enumerate::Enumerate;
pub use filter::{Filter, FilterMap};
pub use inspect::Inspect;
pub use map::{ErrInto, Map, MapErr};
pub use take::Take;
