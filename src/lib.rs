//! # lazyseq
//!
//! Lazily-evaluated, composable sequence transformations and right-to-left
//! function composition.
//!
//! ## Overview
//!
//! - **Sequences**: `range` producers, `map`/`filter`/`take`/`drop`/
//!   `drop_while`/`take_while` transformers and `collect`/`head`/`tail`/
//!   `elem_at`/`find` terminators, all pull-based and single-pass
//! - **Function Composition**: `compose!`, `pipe!` and [`compose::Composed`]
//! - **Predicates**: `not`, `odd`, `even`, `gt`, `lt`, `gte`, `lte`, `eq`, `len`
//!
//! A pipeline is built from configured transformers and only evaluated when
//! a terminator pulls from it, so only the elements actually consumed are
//! computed.
//!
//! ## Feature Flags
//!
//! - `sequence`: Lazy sequences (enables `compose`)
//! - `compose`: Function composition utilities
//! - `predicate`: Predicate and comparator helpers
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let first_large_square = compose!(head, filter(gt(50)), map(|x: u32| x * x));
//! assert_eq!(first_large_square(range(1, 100)), Some(64));
//!
//! let evens = pipe!(range(0, 10), filter(even), collect);
//! assert_eq!(evens, vec![0, 2, 4, 6, 8]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports everything except [`sequence::drop`], which would shadow
/// [`std::mem::drop`] in a glob import. Use [`tail`](sequence::tail) or the
/// full path for it.
///
/// # Usage
///
/// ```rust
/// use lazyseq::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::{
        DropFirst, DropWhile, Filter, Map, Range, RangeError, Take, TakeWhile, collect,
        drop_while, elem_at, filter, find, head, map, range, range_to, range_with_step, tail,
        take, take_while, try_range_with_step,
    };

    #[cfg(feature = "predicate")]
    pub use crate::predicate::*;

    pub use crate::numeric::{Integer, Numeric};
}

pub mod numeric;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "predicate")]
pub mod predicate;
