//! Parity predicates.
//!
//! Both predicates use Rust's `%`, which truncates toward zero. A negative
//! odd number therefore has remainder `-1`, so [`odd`] is `false` for it
//! while [`even`] still recognises negative even numbers.

use crate::numeric::Integer;

/// Returns `true` when `value % 2 == 1`.
///
/// # Examples
///
/// ```rust
/// use lazyseq::predicate::odd;
///
/// assert!(odd(&7_u32));
/// assert!(!odd(&8));
/// // -3 % 2 == -1
/// assert!(!odd(&-3));
/// ```
pub fn odd<T: Integer>(value: &T) -> bool {
    *value % T::TWO == T::ONE
}

/// Returns `true` when `value % 2 == 0`.
///
/// # Examples
///
/// ```rust
/// use lazyseq::predicate::even;
///
/// assert!(even(&0));
/// assert!(even(&-4_i64));
/// assert!(!even(&-3));
/// ```
pub fn even<T: Integer>(value: &T) -> bool {
    *value % T::TWO == T::ZERO
}
