//! Sequence terminators.
//!
//! [`collect`] drains a sequence. [`head`], [`elem_at`] and [`find`] are
//! compositions of the transformers with [`collect`] and stop pulling as soon
//! as they have their answer. An empty answer is `None`; no terminator
//! panics on a short or empty sequence.

use super::adapters::DropFirst;
use super::transform::{drop, filter, take};
use crate::compose;

/// Drains a sequence into a `Vec`, preserving order.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{collect, range};
///
/// assert_eq!(collect(range(0, 3)), vec![0, 1, 2]);
/// assert!(collect(range(3, 0)).is_empty());
/// ```
pub fn collect<I: IntoIterator>(sequence: I) -> Vec<I::Item> {
    sequence.into_iter().collect()
}

fn first<T>(elements: Vec<T>) -> Option<T> {
    elements.into_iter().next()
}

/// Returns the first element of a sequence, or `None` when it is empty.
///
/// Equivalent to `compose!(first, collect, take(1))`: at most one element is
/// pulled from the source.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{head, range};
///
/// assert_eq!(head(range(0, 5)), Some(0));
/// assert_eq!(head(Vec::<i32>::new()), None);
/// ```
pub fn head<I: IntoIterator>(sequence: I) -> Option<I::Item> {
    let first_of = compose!(first, collect, take::<I>(1));
    first_of(sequence)
}

/// Returns the sequence without its first element.
///
/// Equivalent to `drop(1)`. An empty source gives an empty sequence.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{collect, range, tail};
///
/// assert_eq!(collect(tail(range(0, 4))), vec![1, 2, 3]);
/// assert!(collect(tail(Vec::<u8>::new())).is_empty());
/// ```
pub fn tail<I: IntoIterator>(sequence: I) -> DropFirst<I::IntoIter> {
    drop(1)(sequence)
}

/// Configures a terminator returning the element at zero-based `index`.
///
/// Equivalent to `compose!(head, drop(index))`. Out of range gives `None`.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{elem_at, range};
///
/// assert_eq!(elem_at(2)(range(0, 10)), Some(2));
/// assert_eq!(elem_at(20)(range(0, 10)), None);
/// ```
pub fn elem_at<I: IntoIterator>(index: usize) -> impl Fn(I) -> Option<I::Item> {
    compose!(head, drop::<I>(index))
}

/// Configures a terminator returning the first element satisfying `predicate`.
///
/// Equivalent to `compose!(head, filter(predicate))`. Elements are examined
/// only up to the first match; `None` when nothing matches.
///
/// # Examples
///
/// ```rust
/// use lazyseq::predicate::{even, gt};
/// use lazyseq::sequence::{find, range};
///
/// assert_eq!(find(even)(range(1, 10)), Some(2));
/// assert_eq!(find(gt(100))(range(1, 10)), None);
/// ```
pub fn find<I, P>(predicate: P) -> impl Fn(I) -> Option<I::Item>
where
    I: IntoIterator,
    P: Fn(&I::Item) -> bool + Clone,
{
    compose!(head, filter::<I, P>(predicate))
}
