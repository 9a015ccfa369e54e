//! Functions that create sequences.
//!
//! Every constructor returns a fresh, unpulled sequence. Sources are generic
//! over the error type `E`; it is usually inferred from a later combinator or
//! from the consumer's result type, and can be named with a turbofish
//! otherwise.
//!
//! | Constructor | Yields | Finite |
//! |---|---|---|
//! | [`from_slice`], [`reversed`] | `&T` | yes |
//! | [`range`] | `i64` | yes |
//! | [`repeat`] / [`repeat_n`] | clones of one value | no / yes |
//! | [`increment`], [`increment_by`], [`increment_from`], [`increment_from_by`] | `i64` | no |
//! | [`cycle`] | `&T` | no, unless empty |
//! | [`chain`] | `&T` | yes |
//! | [`product`], [`zip`], [`zip_eq`] | [`Tuple`](crate::Tuple) of references | yes |
//! | [`from_iter`], [`from_results`], [`from_fn`] | whatever the input produces | depends |
//!
//! Infinite sources never grow the stack or allocate per element; bound them
//! with [`take`](crate::SequenceExt::take) before consuming.
mod generator;
mod numeric;
mod pairs;
mod repeat;
mod slice;

pub use crate::convert::{from_iter, from_results};
pub use generator::{from_fn, FromFn};
pub use numeric::{
    increment, increment_by, increment_from, increment_from_by, range, Increment, Range,
};
pub use pairs::{product, zip, zip_eq, Product, Zip, ZipEq};
pub use repeat::{repeat, repeat_n, Repeat, RepeatN};
pub use slice::{chain, cycle, from_slice, reversed, Chain, Cycle, FromSlice, Reversed};
