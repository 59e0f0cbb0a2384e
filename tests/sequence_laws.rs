#![cfg(feature = "sequence")]
//! Property-based tests for lazy sequence laws.
//!
//! ## Filter Laws
//! - **Selection**: `collect(filter(p)(s))` is exactly the elements of `s`
//!   satisfying `p`, in order
//!
//! ## Take/Drop Laws
//! - **Length**: `len(collect(take(n)(s))) == min(n, len(s))`
//! - **Split**: `collect(take(n)(s)) ++ collect(drop(n)(s)) == collect(s)`
//!
//! ## Latch Laws
//! - **Split**: `collect(take_while(p)(s)) ++ collect(drop_while(p)(s)) == collect(s)`
//! - **Prefix**: every element of `take_while(p)(s)` satisfies `p`
//!
//! ## Terminator Laws
//! - **Head**: `head(s) == collect(s).first()`
//! - **Index**: `elem_at(i)(s) == collect(s).get(i)`
//! - **Find**: `find(p)(s) == collect(s).into_iter().find(p)`

use lazyseq::sequence::{
    collect, drop, drop_while, elem_at, filter, find, head, map, range, tail, take, take_while,
};
use proptest::prelude::*;

// =============================================================================
// Strategy Definitions
// =============================================================================

fn arb_elements() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-100..100_i32, 0..40)
}

fn is_positive(value: &i32) -> bool {
    *value > 0
}

// =============================================================================
// Filter Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_filter_selects_matching_in_order(elements in arb_elements(), threshold in -100..100_i32) {
        let above = move |value: &i32| *value > threshold;

        let filtered = collect(filter(above)(elements.clone()));
        let expected: Vec<i32> = elements.into_iter().filter(above).collect();

        prop_assert_eq!(filtered, expected);
    }

    #[test]
    fn prop_map_preserves_length(elements in arb_elements()) {
        let mapped = collect(map(|value: i32| i64::from(value) * 2)(elements.clone()));

        prop_assert_eq!(mapped.len(), elements.len());
    }
}

// =============================================================================
// Take/Drop Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_take_length_is_min(elements in arb_elements(), count in 0..60_usize) {
        let taken = collect(take(count)(elements.clone()));

        prop_assert_eq!(taken.len(), count.min(elements.len()));
    }

    #[test]
    fn prop_take_then_drop_reproduces_source(elements in arb_elements(), count in 0..60_usize) {
        let mut rebuilt = collect(take(count)(elements.clone()));
        rebuilt.extend(drop(count)(elements.clone()));

        prop_assert_eq!(rebuilt, elements);
    }

    #[test]
    fn prop_tail_is_drop_one(elements in arb_elements()) {
        prop_assert_eq!(collect(tail(elements.clone())), collect(drop(1)(elements)));
    }

    #[test]
    fn prop_range_length(start in -50..50_i32, stop in -50..50_i32) {
        let expected = usize::try_from(stop - start).unwrap_or(0);

        prop_assert_eq!(collect(range(start, stop)).len(), expected);
    }
}

// =============================================================================
// Latch Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_take_while_then_drop_while_reproduces_source(elements in arb_elements()) {
        let mut rebuilt = collect(take_while(is_positive)(elements.clone()));
        rebuilt.extend(drop_while(is_positive)(elements.clone()));

        prop_assert_eq!(rebuilt, elements);
    }

    #[test]
    fn prop_take_while_prefix_satisfies_predicate(elements in arb_elements()) {
        let prefix = collect(take_while(is_positive)(elements));

        prop_assert!(prefix.iter().all(is_positive));
    }

    #[test]
    fn prop_drop_while_starts_with_failure(elements in arb_elements()) {
        let rest = collect(drop_while(is_positive)(elements));

        prop_assert!(rest.first().is_none_or(|first| !is_positive(first)));
    }
}

// =============================================================================
// Terminator Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_head_is_first(elements in arb_elements()) {
        prop_assert_eq!(head(elements.clone()), elements.first().copied());
    }

    #[test]
    fn prop_elem_at_is_get(elements in arb_elements(), index in 0..60_usize) {
        prop_assert_eq!(elem_at(index)(elements.clone()), elements.get(index).copied());
    }

    #[test]
    fn prop_find_is_first_match(elements in arb_elements(), target in -100..100_i32) {
        let matches = move |value: &i32| *value == target;

        prop_assert_eq!(find(matches)(elements.clone()), elements.into_iter().find(matches));
    }
}
