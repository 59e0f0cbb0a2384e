//! Numeric element support for sequence producers and parity helpers.
//!
//! [`Numeric`] is what [`range`](crate::sequence::range) needs from its
//! element type: ordering, addition and the constants `0` and `1`.
//! [`Integer`] adds the remainder operation used by
//! [`odd`](crate::predicate::odd) and [`even`](crate::predicate::even).
//!
//! Both traits are implemented for every primitive integer type, and
//! [`Numeric`] also for `f32` and `f64`.

use std::ops::{Add, Rem};

/// A number that can be counted up from a start value by a step.
///
/// # Examples
///
/// ```rust
/// use lazyseq::numeric::Numeric;
///
/// assert_eq!(<i32 as Numeric>::ONE, 1);
/// assert_eq!(3_u8.advance(4), Some(7));
/// assert_eq!(250_u8.advance(10), None);
/// ```
pub trait Numeric: Copy + PartialOrd + Add<Output = Self> {
    /// The additive identity.
    const ZERO: Self;

    /// The default step of a range.
    const ONE: Self;

    /// Adds `step` to `self`, returning `None` when the result does not fit
    /// in `Self`.
    ///
    /// Floating point values saturate to infinity instead of overflowing, so
    /// for them this always returns `Some`.
    fn advance(self, step: Self) -> Option<Self>;
}

/// An integral [`Numeric`] supporting truncating remainder.
pub trait Integer: Numeric + Rem<Output = Self> {
    /// The divisor used by parity checks.
    const TWO: Self;
}

macro_rules! impl_integer {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Numeric for $integer {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn advance(self, step: Self) -> Option<Self> {
                    self.checked_add(step)
                }
            }

            impl Integer for $integer {
                const TWO: Self = 2;
            }
        )*
    };
}

macro_rules! impl_float {
    ($($float:ty),* $(,)?) => {
        $(
            impl Numeric for $float {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                #[inline]
                fn advance(self, step: Self) -> Option<Self> {
                    Some(self + step)
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float!(f32, f64);
