//! The numeric sequence producer.

use std::iter::FusedIterator;

use super::error::RangeError;
use crate::numeric::Numeric;

/// A lazy arithmetic progression `start, start + step, ...` bounded above
/// (exclusively) by `stop`.
///
/// Created by [`range`], [`range_to`], [`range_with_step`] and
/// [`try_range_with_step`]. Nothing is computed until the first call to
/// [`Iterator::next`].
///
/// A `Range` is consumed once; it is not `Clone`. Call the constructor again
/// for a fresh sequence.
#[derive(Debug)]
pub struct Range<T> {
    // `None` once the progression overflowed `T` or reached `stop`.
    current: Option<T>,
    stop: T,
    step: T,
}

impl<T: Numeric> Range<T> {
    const fn new(start: T, stop: T, step: T) -> Self {
        Self {
            current: Some(start),
            stop,
            step,
        }
    }

    /// Returns the exclusive upper bound.
    pub const fn stop(&self) -> T {
        self.stop
    }

    /// Returns the distance between consecutive values.
    pub const fn step(&self) -> T {
        self.step
    }
}

impl<T: Numeric> Iterator for Range<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let value = self.current.take()?;
        if value < self.stop {
            self.current = value.advance(self.step);
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.current {
            Some(value) if value < self.stop => (1, None),
            _ => (0, Some(0)),
        }
    }
}

impl<T: Numeric> FusedIterator for Range<T> {}

/// Produces `start, start + 1, start + 2, ...` while the value is below `stop`.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{collect, range};
///
/// assert_eq!(collect(range(0, 5)), vec![0, 1, 2, 3, 4]);
/// assert_eq!(collect(range(5, 5)), Vec::<i32>::new());
/// assert_eq!(collect(range(0.5, 2.0)), vec![0.5, 1.5]);
/// ```
pub const fn range<T: Numeric>(start: T, stop: T) -> Range<T> {
    Range::new(start, stop, T::ONE)
}

/// Produces `0, 1, 2, ...` while the value is below `stop`.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{collect, range_to};
///
/// assert_eq!(collect(range_to(3_u8)), vec![0, 1, 2]);
/// ```
pub const fn range_to<T: Numeric>(stop: T) -> Range<T> {
    Range::new(T::ZERO, stop, T::ONE)
}

/// Produces `start, start + step, start + 2 * step, ...` while the value is
/// below `stop`.
///
/// `step` must be greater than zero. This is not checked: with a zero or
/// negative step the sequence never reaches `stop` and is infinite whenever
/// `start < stop`. Use [`try_range_with_step`] to have the step validated.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{collect, range_with_step};
///
/// assert_eq!(collect(range_with_step(1, 10, 3)), vec![1, 4, 7]);
/// ```
pub const fn range_with_step<T: Numeric>(start: T, stop: T, step: T) -> Range<T> {
    Range::new(start, stop, step)
}

/// Like [`range_with_step`] but rejects a step that is not greater than zero.
///
/// # Errors
///
/// Returns [`RangeError::NonPositiveStep`] when `step <= 0` or when `step`
/// cannot be compared with zero.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{RangeError, collect, try_range_with_step};
///
/// let evens = try_range_with_step(0, 7, 2)?;
/// assert_eq!(collect(evens), vec![0, 2, 4, 6]);
///
/// assert!(try_range_with_step(0.0, 1.0, f64::NAN).is_err());
/// # Ok::<(), RangeError>(())
/// ```
pub fn try_range_with_step<T: Numeric>(start: T, stop: T, step: T) -> Result<Range<T>, RangeError> {
    if step > T::ZERO {
        Ok(Range::new(start, stop, step))
    } else {
        Err(RangeError::NonPositiveStep)
    }
}

static_assertions::assert_impl_all!(Range<i32>: Iterator, FusedIterator, Send, Sync);
static_assertions::assert_not_impl_any!(Range<i32>: Clone, Copy);
