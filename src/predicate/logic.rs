//! Logical combinators over predicates.

/// Negates a predicate.
///
/// # Examples
///
/// ```rust
/// use lazyseq::predicate::{even, not};
/// use lazyseq::sequence::{collect, filter, range};
///
/// assert_eq!(collect(filter(not(even))(range(0, 6))), vec![1, 3, 5]);
/// assert!(not(|text: &&str| text.is_empty())(&"lazy"));
/// ```
pub fn not<T, P>(predicate: P) -> impl Fn(&T) -> bool + Clone
where
    T: ?Sized,
    P: Fn(&T) -> bool + Clone,
{
    move |value: &T| !predicate(value)
}
