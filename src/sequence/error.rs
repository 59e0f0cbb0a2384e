//! Error types for sequence construction.

/// Represents an invalid argument to a checked range constructor.
///
/// Only [`try_range_with_step`](super::try_range_with_step) reports this
/// error. The unchecked constructors leave the step precondition to the
/// caller.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{RangeError, try_range_with_step};
///
/// let error = try_range_with_step(0, 10, 0).unwrap_err();
/// assert_eq!(error, RangeError::NonPositiveStep);
/// assert_eq!(format!("{error}"), "range step must be greater than zero");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// The step was zero, negative, or not comparable with zero (NaN).
    NonPositiveStep,
}

impl std::fmt::Display for RangeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveStep => write!(formatter, "range step must be greater than zero"),
        }
    }
}

impl std::error::Error for RangeError {}
