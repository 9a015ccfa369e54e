//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use seq_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Traits**: [`Sequence`], [`SequenceExt`], [`ConsumeExt`]
//! - **Types**: [`Step`], [`Tuple`], [`Enumerated`], [`SequenceError`], [`Interrupted`]
//! - **Sources**: every constructor from [`crate::sources`]
//!
//! # Examples
//!
//! ```
//! use seq_rail::prelude::*;
//!
//! let names = ["ada", "grace", "barbara"];
//! let long = from_slice::<_, SequenceError>(&names)
//!     .filter(|name| name.len() > 3)
//!     .join(" & ");
//!
//! assert_eq!(long.as_deref(), Ok("grace & barbara"));
//! ```

pub use crate::sources::*;
pub use crate::traits::{ConsumeExt, Sequence, SequenceExt};
pub use crate::types::{BoxedSequence, Enumerated, Interrupted, SequenceError, Step, Tuple};
