//! Length of strings and collections, with absence counting as empty.

use std::collections::VecDeque;

/// Values that have a length.
///
/// `Option<L>` is a `Length` whose `None` has length `0`, so an absent
/// value and an empty one measure the same.
pub trait Length {
    /// Returns the number of elements, or bytes for strings.
    fn length(&self) -> usize;
}

impl Length for str {
    fn length(&self) -> usize {
        self.len()
    }
}

impl Length for String {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Length for [T] {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Length for [T; N] {
    fn length(&self) -> usize {
        N
    }
}

impl<T> Length for Vec<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Length for VecDeque<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<L: Length> Length for Option<L> {
    fn length(&self) -> usize {
        self.as_ref().map_or(0, Length::length)
    }
}

impl<L: Length + ?Sized> Length for &L {
    fn length(&self) -> usize {
        (**self).length()
    }
}

impl<L: Length + ?Sized> Length for Box<L> {
    fn length(&self) -> usize {
        (**self).length()
    }
}

/// Returns the length of `value`, or `0` when it is absent.
///
/// # Examples
///
/// ```rust
/// use lazyseq::predicate::len;
///
/// assert_eq!(len(&None::<&str>), 0);
/// assert_eq!(len(""), 0);
/// assert_eq!(len(&[1, 2, 3]), 3);
/// assert_eq!(len(&Some(vec!['a', 'b'])), 2);
/// ```
pub fn len<L: Length + ?Sized>(value: &L) -> usize {
    value.length()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_absent_agree() {
        let absent: Option<String> = None;
        assert_eq!(len(&absent), len(&String::new()));
        assert_eq!(len(&Some(Vec::<u8>::new())), 0);
    }

    #[test]
    fn test_string_length_is_in_bytes() {
        assert_eq!(len("héllo"), 6);
    }

    #[test]
    fn test_boxed_and_borrowed_forward() {
        let boxed: Box<[i32]> = vec![1, 2].into_boxed_slice();
        assert_eq!(len(&boxed), 2);
        let slice: &[i32] = &[4, 5, 6];
        assert_eq!(len(&slice), 3);
        assert_eq!(len(&VecDeque::from([1, 2, 3, 4])), 4);
    }
}
