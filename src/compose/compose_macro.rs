//! The `compose!` macro for function composition.
//!
//! This module provides the [`compose!`] macro which composes functions
//! from right to left, following the mathematical notation for function composition.

/// Composes two or more functions from right to left.
///
/// `compose!(f, g, h)(x)` is equivalent to `f(g(h(x)))`: the last function
/// listed sees the input first and the first function listed produces the
/// final output.
///
/// At least two functions are required. `compose!(f)` and `compose!()` do not
/// compile; there is no implicit identity.
///
/// # Type Requirements
///
/// All functions must implement [`Fn`]. The output type of each function
/// must match the input type of the function listed before it. The composed
/// closure is `Fn` as well, so it can be called any number of times.
///
/// # Examples
///
/// ## Basic composition
///
/// ```
/// use lazyseq::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// // compose!(f, g)(x) = f(g(x)) = add_one(double(5)) = add_one(10) = 11
/// let composed = compose!(add_one, double);
/// assert_eq!(composed(5), 11);
/// ```
///
/// ## Three-function composition
///
/// ```
/// use lazyseq::compose;
///
/// // ((5 - 3) * 2) + 1 = 5
/// let composed = compose!(|x: i32| x + 1, |x: i32| x * 2, |x: i32| x - 3);
/// assert_eq!(composed(5), 5);
/// ```
///
/// ## Type conversion
///
/// ```
/// use lazyseq::compose;
///
/// fn to_string(x: i32) -> String { x.to_string() }
/// fn get_length(s: String) -> usize { s.len() }
///
/// let composed = compose!(get_length, to_string);
/// assert_eq!(composed(12345), 5);
/// ```
///
/// ## Composing sequence operations
///
/// ```
/// use lazyseq::compose;
/// use lazyseq::sequence::{collect, map, range, take};
///
/// let first_squares = compose!(collect, take(3), map(|x: u32| x * x));
/// assert_eq!(first_squares(range(1, 100)), vec![1, 4, 9]);
/// ```
///
/// A single function is rejected:
///
/// ```compile_fail
/// use lazyseq::compose;
///
/// let only = compose!(|x: i32| x + 1);
/// ```
#[macro_export]
macro_rules! compose {
    // compose!(f, g)(x) = f(g(x))
    ($outer_function:expr, $inner_function:expr $(,)?) => {{
        let outer = $outer_function;
        let inner = $inner_function;
        move |input| outer(inner(input))
    }};

    // compose!(f, g, h, ...) = compose!(f, compose!(g, h, ...))
    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::compose!($($remaining_functions),+);
        move |input| outer(inner_composed(input))
    }};
}
