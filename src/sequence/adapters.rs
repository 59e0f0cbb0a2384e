//! Lazy sequence adapters returned by the transformers.
//!
//! Every adapter owns its source iterator and pulls from it only inside
//! [`Iterator::next`]. None of them is `Clone`: an adapter is consumed once.

use std::iter::FusedIterator;

/// Yields `function(element)` for every element. See [`map`](super::map).
#[derive(Debug)]
pub struct Map<I, F> {
    source: I,
    function: F,
}

impl<I, F> Map<I, F> {
    pub(super) const fn new(source: I, function: F) -> Self {
        Self { source, function }
    }
}

impl<B, I, F> Iterator for Map<I, F>
where
    I: Iterator,
    F: Fn(I::Item) -> B,
{
    type Item = B;

    #[inline]
    fn next(&mut self) -> Option<B> {
        self.source.next().map(&self.function)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<B, I, F> FusedIterator for Map<I, F>
where
    I: FusedIterator,
    F: Fn(I::Item) -> B,
{
}

/// Yields the elements for which the predicate holds. See [`filter`](super::filter).
#[derive(Debug)]
pub struct Filter<I, P> {
    source: I,
    predicate: P,
}

impl<I, P> Filter<I, P> {
    pub(super) const fn new(source: I, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<I, P> Iterator for Filter<I, P>
where
    I: Iterator,
    P: Fn(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            let element = self.source.next()?;
            if (self.predicate)(&element) {
                return Some(element);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

impl<I, P> FusedIterator for Filter<I, P>
where
    I: FusedIterator,
    P: Fn(&I::Item) -> bool,
{
}

/// Yields at most a fixed number of elements. See [`take`](super::take).
#[derive(Debug)]
pub struct Take<I> {
    source: I,
    remaining: usize,
}

impl<I> Take<I> {
    pub(super) const fn new(source: I, remaining: usize) -> Self {
        Self { source, remaining }
    }
}

impl<I: Iterator> Iterator for Take<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.remaining == 0 {
            return None;
        }
        match self.source.next() {
            Some(element) => {
                self.remaining -= 1;
                Some(element)
            }
            None => {
                self.remaining = 0;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining == 0 {
            return (0, Some(0));
        }
        let (lower, upper) = self.source.size_hint();
        let upper = upper.map_or(self.remaining, |upper| upper.min(self.remaining));
        (lower.min(self.remaining), Some(upper))
    }
}

impl<I: Iterator> FusedIterator for Take<I> {}

/// Skips a fixed number of leading elements. See [`drop`](super::drop).
#[derive(Debug)]
pub struct DropFirst<I> {
    source: I,
    // Elements still to skip; skipped on the first pull.
    pending: usize,
}

impl<I> DropFirst<I> {
    pub(super) const fn new(source: I, pending: usize) -> Self {
        Self { source, pending }
    }
}

impl<I: Iterator> Iterator for DropFirst<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        while self.pending > 0 {
            self.pending -= 1;
            self.source.next()?;
        }
        self.source.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.source.size_hint();
        (
            lower.saturating_sub(self.pending),
            upper.map(|upper| upper.saturating_sub(self.pending)),
        )
    }
}

impl<I: FusedIterator> FusedIterator for DropFirst<I> {}

/// Skips leading elements while the predicate holds, then yields everything.
/// See [`drop_while`](super::drop_while).
#[derive(Debug)]
pub struct DropWhile<I, P> {
    source: I,
    predicate: P,
    // Latch: flips to false on the first rejected element and never back.
    dropping: bool,
}

impl<I, P> DropWhile<I, P> {
    pub(super) const fn new(source: I, predicate: P) -> Self {
        Self {
            source,
            predicate,
            dropping: true,
        }
    }
}

impl<I, P> Iterator for DropWhile<I, P>
where
    I: Iterator,
    P: Fn(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if !self.dropping {
            return self.source.next();
        }
        loop {
            let element = self.source.next()?;
            if !(self.predicate)(&element) {
                self.dropping = false;
                return Some(element);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.source.size_hint();
        if self.dropping { (0, upper) } else { (lower, upper) }
    }
}

impl<I, P> FusedIterator for DropWhile<I, P>
where
    I: FusedIterator,
    P: Fn(&I::Item) -> bool,
{
}

/// Yields leading elements while the predicate holds, then ends for good.
/// See [`take_while`](super::take_while).
#[derive(Debug)]
pub struct TakeWhile<I, P> {
    source: I,
    predicate: P,
    finished: bool,
}

impl<I, P> TakeWhile<I, P> {
    pub(super) const fn new(source: I, predicate: P) -> Self {
        Self {
            source,
            predicate,
            finished: false,
        }
    }
}

impl<I, P> Iterator for TakeWhile<I, P>
where
    I: Iterator,
    P: Fn(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.finished {
            return None;
        }
        match self.source.next() {
            Some(element) if (self.predicate)(&element) => Some(element),
            _ => {
                self.finished = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            (0, Some(0))
        } else {
            (0, self.source.size_hint().1)
        }
    }
}

impl<I, P> FusedIterator for TakeWhile<I, P>
where
    I: Iterator,
    P: Fn(&I::Item) -> bool,
{
}

static_assertions::assert_not_impl_any!(Map<std::vec::IntoIter<i32>, fn(i32) -> i32>: Clone);
static_assertions::assert_not_impl_any!(Filter<std::vec::IntoIter<i32>, fn(&i32) -> bool>: Clone);
static_assertions::assert_not_impl_any!(Take<std::vec::IntoIter<i32>>: Clone);
static_assertions::assert_not_impl_any!(DropFirst<std::vec::IntoIter<i32>>: Clone);
static_assertions::assert_not_impl_any!(DropWhile<std::vec::IntoIter<i32>, fn(&i32) -> bool>: Clone);
static_assertions::assert_not_impl_any!(TakeWhile<std::vec::IntoIter<i32>, fn(&i32) -> bool>: Clone);
static_assertions::assert_impl_all!(TakeWhile<std::vec::IntoIter<i32>, fn(&i32) -> bool>: FusedIterator);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_does_not_pull_past_limit() {
        let mut source = vec![1, 2, 3].into_iter();
        let taken: Vec<i32> = Take::new(&mut source, 2).collect();
        assert_eq!(taken, vec![1, 2]);
        assert_eq!(source.next(), Some(3));
    }

    #[test]
    fn test_take_size_hint_is_bounded_by_count() {
        let taken = Take::new(0..100, 3);
        assert_eq!(taken.size_hint(), (3, Some(3)));
        let short = Take::new(0..2, 3);
        assert_eq!(short.size_hint(), (2, Some(2)));
    }

    #[test]
    fn test_drop_skips_lazily() {
        let mut source = vec![1, 2, 3, 4].into_iter();
        let mut dropped = DropFirst::new(&mut source, 2);
        assert_eq!(dropped.size_hint(), (2, Some(2)));
        assert_eq!(dropped.next(), Some(3));
    }

    #[test]
    fn test_drop_past_end_is_empty() {
        let mut dropped = DropFirst::new(vec![1, 2].into_iter(), 5);
        assert_eq!(dropped.next(), None);
    }

    #[test]
    fn test_drop_while_latch_stops_calling_predicate() {
        let calls = std::cell::Cell::new(0);
        let predicate = |element: &i32| {
            calls.set(calls.get() + 1);
            *element < 3
        };
        let yielded: Vec<i32> =
            DropWhile::new(vec![1, 2, 3, 1, 2].into_iter(), predicate).collect();
        assert_eq!(yielded, vec![3, 1, 2]);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_take_while_stays_finished() {
        let mut taken =
            TakeWhile::new(vec![2, 4, 5, 6].into_iter(), |element: &i32| element % 2 == 0);
        assert_eq!(taken.next(), Some(2));
        assert_eq!(taken.next(), Some(4));
        assert_eq!(taken.next(), None);
        assert_eq!(taken.next(), None);
        assert_eq!(taken.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_filter_size_hint_lower_bound_is_zero() {
        let filtered = Filter::new(0..10, |element: &i32| *element > 4);
        assert_eq!(filtered.size_hint(), (0, Some(10)));
    }

    #[test]
    fn test_map_preserves_size_hint() {
        let mapped = Map::new(0..4, |element: i32| element * 2);
        assert_eq!(mapped.size_hint(), (4, Some(4)));
        assert_eq!(mapped.collect::<Vec<_>>(), vec![0, 2, 4, 6]);
    }
}
