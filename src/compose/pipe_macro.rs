//! The `pipe!` macro for left-to-right function application.
//!
//! This module provides the [`pipe!`] macro which applies functions
//! from left to right, so a sequence pipeline reads in the order data flows.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`, and therefore to
/// `compose!(h, g, f)(x)`.
///
/// While [`compose!`](crate::compose!) creates a new function, `pipe!`
/// immediately applies the functions to a value. Each function is called
/// exactly once, so [`FnOnce`] is enough.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g, ...)` - Returns `...g(f(x))`
///
/// # Examples
///
/// ## Basic pipeline
///
/// ```
/// use lazyseq::pipe;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// let result = pipe!(5, double, add_one);
/// assert_eq!(result, 11);
/// ```
///
/// ## Sequence pipeline
///
/// ```
/// use lazyseq::pipe;
/// use lazyseq::predicate::even;
/// use lazyseq::sequence::{collect, filter, map, range};
///
/// let doubled_evens = pipe!(
///     range(0, 10),
///     filter(even),
///     map(|x: i32| x * 2),
///     collect
/// );
/// assert_eq!(doubled_evens, vec![0, 4, 8, 12, 16]);
/// ```
///
/// ## Equivalence with compose
///
/// ```
/// use lazyseq::{compose, pipe};
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
/// fn h(x: i32) -> i32 { x - 3 }
///
/// assert_eq!(pipe!(10, f, g, h), compose!(h, g, f)(10));
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}
