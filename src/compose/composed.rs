//! Runtime composition of same-typed functions.
//!
//! [`compose!`](crate::compose!) fixes the list of functions at compile
//! time. [`Composed`] holds the list as data, so it can be built from a
//! configuration loop or from an iterator of boxed functions, at the cost of
//! requiring every function to map `T` to `T`.

use std::fmt;

type Unary<'a, T> = Box<dyn Fn(T) -> T + 'a>;

/// An ordered list of at least two unary functions, applied right to left.
///
/// `Composed::new(f, g).then_inner(h).apply(x)` is `f(g(h(x)))`, the same
/// order as `compose!(f, g, h)(x)`.
///
/// # Examples
///
/// ```rust
/// use lazyseq::compose::Composed;
///
/// let composed = Composed::new(|x: i32| x + 1, |x: i32| x * 2).then_inner(|x: i32| x - 3);
/// assert_eq!(composed.len(), 3);
/// assert_eq!(composed.apply(5), 5);
/// ```
pub struct Composed<'a, T> {
    // Listed order; applied from the back.
    functions: Vec<Unary<'a, T>>,
}

impl<'a, T> Composed<'a, T> {
    /// Creates a composition of two functions: `outer(inner(x))`.
    pub fn new<F, G>(outer: F, inner: G) -> Self
    where
        F: Fn(T) -> T + 'a,
        G: Fn(T) -> T + 'a,
    {
        Self {
            functions: vec![Box::new(outer), Box::new(inner)],
        }
    }

    /// Appends a function that runs before every function already listed.
    #[must_use]
    pub fn then_inner<F>(mut self, function: F) -> Self
    where
        F: Fn(T) -> T + 'a,
    {
        self.functions.push(Box::new(function));
        self
    }

    /// Applies the functions to `input`, last-listed first.
    pub fn apply(&self, input: T) -> T {
        self.functions
            .iter()
            .rev()
            .fold(input, |accumulator, function| function(accumulator))
    }

    /// Returns the number of functions in the composition. Always at least two.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Converts the composition into a plain closure.
    pub fn into_fn(self) -> impl Fn(T) -> T + 'a
    where
        T: 'a,
    {
        move |input| self.apply(input)
    }
}

impl<T> fmt::Debug for Composed<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Composed")
            .field("functions", &self.functions.len())
            .finish()
    }
}

/// Builds a [`Composed`] from two mandatory functions and any number of
/// further boxed functions, in listed order.
///
/// # Examples
///
/// ```rust
/// use lazyseq::compose::compose_all;
///
/// let rest: Vec<Box<dyn Fn(i32) -> i32>> = vec![Box::new(|x| x - 3)];
/// let composed = compose_all(|x: i32| x + 1, |x: i32| x * 2, rest);
/// assert_eq!(composed.apply(5), 5);
/// ```
pub fn compose_all<'a, T, F, G, I>(first: F, second: G, rest: I) -> Composed<'a, T>
where
    F: Fn(T) -> T + 'a,
    G: Fn(T) -> T + 'a,
    I: IntoIterator<Item = Box<dyn Fn(T) -> T + 'a>>,
{
    let mut composed = Composed::new(first, second);
    composed.functions.extend(rest);
    composed
}
