//! Function composition utilities.
//!
//! - [`compose!`]: Compose two or more functions right-to-left (mathematical composition)
//! - [`pipe!`]: Apply functions to a value left-to-right (data flow style)
//! - [`Composed`] / [`compose_all`]: Right-to-left composition of a runtime
//!   list of `T -> T` functions
//!
//! # Examples
//!
//! ## Function Composition (right-to-left)
//!
//! ```
//! use lazyseq::compose;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // compose!(f, g)(x) = f(g(x))
//! let composed = compose!(add_one, double);
//! assert_eq!(composed(5), 11);
//! ```
//!
//! ## Pipeline (left-to-right)
//!
//! ```
//! use lazyseq::pipe;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // pipe!(x, f, g) = g(f(x))
//! let result = pipe!(5, double, add_one);
//! assert_eq!(result, 11);
//! ```
//!
//! # Mathematical Background
//!
//! Given `f: B -> C` and `g: A -> B`, the composition `(f . g): A -> C` is
//! defined as:
//!
//! ```text
//! (f . g)(x) = f(g(x))
//! ```
//!
//! Pipeline is the reverse notation, reading left-to-right:
//!
//! ```text
//! x |> f |> g |> h = h(g(f(x)))
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Flattening**: `compose!(f, g, h) == compose!(f, compose!(g, h))`
//! - **Pipe consistency**: `pipe!(x, f, g) == compose!(g, f)(x)`

mod compose_macro;
mod composed;
mod pipe_macro;

pub use composed::{Composed, compose_all};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::pipe;
