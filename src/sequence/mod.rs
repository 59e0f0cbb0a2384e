//! Lazy, single-pass sequences.
//!
//! A sequence is any [`Iterator`]. This module supplies:
//!
//! - **Producers**: [`range`], [`range_to`], [`range_with_step`],
//!   [`try_range_with_step`]
//! - **Transformers**: [`map`], [`filter`], [`take`], [`drop`],
//!   [`drop_while`], [`take_while`]
//! - **Terminators**: [`collect`], [`head`], [`tail`], [`elem_at`], [`find`]
//!
//! Transformers are configured first and applied to a sequence second, so
//! they slot directly into [`compose!`](crate::compose!) and
//! [`pipe!`](crate::pipe!). Nothing is evaluated until a terminator pulls,
//! and every adapter pulls only what its consumer asks for.
//!
//! A sequence value is consumed once. `Range` and the adapter types do not
//! implement `Clone`; build the pipeline again to iterate again.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::pipe;
//! use lazyseq::predicate::{gt, odd};
//! use lazyseq::sequence::{collect, drop_while, map, range, take};
//!
//! let result = pipe!(
//!     range(0, 1_000_000_000),
//!     drop_while(|x: &i64| *x < 10),
//!     map(|x: i64| x * x),
//!     take(3),
//!     collect
//! );
//! assert_eq!(result, vec![100, 121, 144]);
//!
//! assert!(gt(5)(&6) && odd(&7));
//! ```
//!
//! # The latch in `drop_while` and `take_while`
//!
//! Both transformers stop consulting their predicate after it first fails.
//! `drop_while` then passes every remaining element through, and
//! `take_while` ends the sequence:
//!
//! ```rust
//! use lazyseq::predicate::odd;
//! use lazyseq::sequence::{collect, drop_while, take_while};
//!
//! let input = vec![1, 3, 5, 2, 7, 9];
//! assert_eq!(collect(drop_while(odd)(input.clone())), vec![2, 7, 9]);
//! assert_eq!(collect(take_while(odd)(input)), vec![1, 3, 5]);
//! ```

mod adapters;
mod error;
mod range;
mod terminal;
mod transform;

pub use adapters::{DropFirst, DropWhile, Filter, Map, Take, TakeWhile};
pub use error::RangeError;
pub use range::{Range, range, range_to, range_with_step, try_range_with_step};
pub use terminal::{collect, elem_at, find, head, tail};
pub use transform::{drop, drop_while, filter, map, take, take_while};
