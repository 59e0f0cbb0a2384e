//! Sequence transformers.
//!
//! Each transformer is configured first and applied second:
//! `take(3)` returns a function, and that function turns any source into a
//! lazy [`Take`]. The configured function is `Fn`, so the same
//! configuration can be applied to several sources; closures passed in are
//! cloned once per application and therefore need to be `Clone`.
//!
//! Applying a transformer never pulls from the source. Work happens only
//! when the returned sequence is iterated.

use super::adapters::{DropFirst, DropWhile, Filter, Map, Take, TakeWhile};

/// Configures a transformer that yields `function(element)` for every element.
///
/// Order and length are preserved.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{collect, map, range};
///
/// let squares = map(|x: i32| x * x);
/// assert_eq!(collect(squares(range(1, 4))), vec![1, 4, 9]);
/// assert_eq!(collect(squares(range(10, 11))), vec![100]);
/// ```
pub fn map<I, B, F>(function: F) -> impl Fn(I) -> Map<I::IntoIter, F>
where
    I: IntoIterator,
    F: Fn(I::Item) -> B + Clone,
{
    move |sequence| Map::new(sequence.into_iter(), function.clone())
}

/// Configures a transformer that yields only the elements satisfying `predicate`.
///
/// Relative order is preserved.
///
/// # Examples
///
/// ```rust
/// use lazyseq::predicate::odd;
/// use lazyseq::sequence::{collect, filter, range};
///
/// assert_eq!(collect(filter(odd)(range(0, 8))), vec![1, 3, 5, 7]);
/// ```
pub fn filter<I, P>(predicate: P) -> impl Fn(I) -> Filter<I::IntoIter, P>
where
    I: IntoIterator,
    P: Fn(&I::Item) -> bool + Clone,
{
    move |sequence| Filter::new(sequence.into_iter(), predicate.clone())
}

/// Configures a transformer that yields at most the first `count` elements.
///
/// Once `count` elements have been yielded the source is not pulled again,
/// so `take` bounds infinite sequences. `take(0)` yields nothing and never
/// touches the source.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{collect, range_with_step, take};
///
/// // An infinite sequence: the step never moves past the bound.
/// let ones = range_with_step(1, 2, 0);
/// assert_eq!(collect(take(3)(ones)), vec![1, 1, 1]);
/// ```
pub fn take<I>(count: usize) -> impl Fn(I) -> Take<I::IntoIter>
where
    I: IntoIterator,
{
    move |sequence| Take::new(sequence.into_iter(), count)
}

/// Configures a transformer that skips the first `count` elements and yields
/// the rest.
///
/// `drop(0)` yields the source unchanged. Skipping happens on the first
/// pull, not when the transformer is applied.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{collect, drop, range};
///
/// assert_eq!(collect(drop(2)(range(0, 5))), vec![2, 3, 4]);
/// assert_eq!(collect(drop(9)(range(0, 5))), Vec::<i32>::new());
/// ```
pub fn drop<I>(count: usize) -> impl Fn(I) -> DropFirst<I::IntoIter>
where
    I: IntoIterator,
{
    move |sequence| DropFirst::new(sequence.into_iter(), count)
}

/// Configures a transformer that skips elements while `predicate` holds.
///
/// The first element for which `predicate` is false, and every element
/// after it, is yielded unconditionally. The predicate is not consulted
/// again once it has failed.
///
/// # Examples
///
/// ```rust
/// use lazyseq::predicate::odd;
/// use lazyseq::sequence::{collect, drop_while};
///
/// // 7 and 9 are odd, but the predicate already failed on 2.
/// assert_eq!(collect(drop_while(odd)(vec![1, 3, 5, 2, 7, 9])), vec![2, 7, 9]);
/// ```
pub fn drop_while<I, P>(predicate: P) -> impl Fn(I) -> DropWhile<I::IntoIter, P>
where
    I: IntoIterator,
    P: Fn(&I::Item) -> bool + Clone,
{
    move |sequence| DropWhile::new(sequence.into_iter(), predicate.clone())
}

/// Configures a transformer that yields elements while `predicate` holds.
///
/// The first element for which `predicate` is false is discarded and the
/// sequence ends permanently; nothing further is pulled from the source.
///
/// # Examples
///
/// ```rust
/// use lazyseq::predicate::odd;
/// use lazyseq::sequence::{collect, take_while};
///
/// assert_eq!(collect(take_while(odd)(vec![1, 3, 5, 2, 7, 9])), vec![1, 3, 5]);
/// ```
pub fn take_while<I, P>(predicate: P) -> impl Fn(I) -> TakeWhile<I::IntoIter, P>
where
    I: IntoIterator,
    P: Fn(&I::Item) -> bool + Clone,
{
    move |sequence| TakeWhile::new(sequence.into_iter(), predicate.clone())
}
