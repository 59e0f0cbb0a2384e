//! Scalar predicate and comparator helpers.
//!
//! Small, pure building blocks for [`filter`](crate::sequence::filter),
//! [`find`](crate::sequence::find), [`drop_while`](crate::sequence::drop_while)
//! and [`take_while`](crate::sequence::take_while):
//!
//! - [`not`]: negate a predicate
//! - [`odd`], [`even`]: parity with truncating remainder
//! - [`gt`], [`lt`], [`gte`], [`lte`], [`eq`]: curried comparators
//! - [`len`]: length of a string or collection, `0` when absent
//!
//! Predicates receive their argument by reference, the same shape
//! [`Iterator::filter`] uses.

mod comparison;
mod length;
mod logic;
mod parity;

pub use comparison::{eq, gt, gte, lt, lte};
pub use length::{Length, len};
pub use logic::not;
pub use parity::{even, odd};
