//! Integration tests combining sequences, composition and predicates.
//!
//! These tests build whole pipelines the way callers do: producers,
//! configured transformers and a terminator glued together with
//! `compose!` or `pipe!`, using the predicate helpers as building blocks.

use lazyseq::prelude::*;
use rstest::rstest;
use std::cell::Cell;

#[rstest]
fn find_even_and_find_absent() {
    assert_eq!(find(even)(range(1, 10)), Some(2));
    assert_eq!(find(gt(100))(range(1, 10)), None);
}

#[rstest]
fn latch_examples_with_helpers() {
    let input = vec![1, 3, 5, 2, 7, 9];
    assert_eq!(collect(drop_while(odd)(input.clone())), vec![2, 7, 9]);
    assert_eq!(collect(take_while(odd)(input)), vec![1, 3, 5]);
}

#[rstest]
fn composed_terminator_built_from_transformers() {
    let third_odd_square = compose!(elem_at(2), map(|x: i64| x * x), filter(odd));
    assert_eq!(third_odd_square(range(0, 100)), Some(25));
    assert_eq!(third_odd_square(range(0, 4)), None);
}

#[rstest]
fn pipe_reads_in_data_flow_order() {
    let result = pipe!(
        range_with_step(0, 100, 5),
        filter(not(eq(50))),
        drop_while(lt(20)),
        take_while(lte(70)),
        collect
    );
    assert_eq!(result, vec![20, 25, 30, 35, 40, 45, 55, 60, 65, 70]);
}

#[rstest]
fn pipe_and_compose_agree() {
    let composed = compose!(collect, take(3), filter(gte(10)), map(|x: u32| x * 3));
    let piped = pipe!(range(0, 50), map(|x: u32| x * 3), filter(gte(10)), take(3), collect);
    assert_eq!(composed(range(0, 50)), piped);
    assert_eq!(piped, vec![12, 15, 18]);
}

#[rstest]
fn words_by_length() {
    let words = vec!["", "lazy", "seq", "", "compose"];
    let non_empty = filter(|word: &&str| len(*word) > 0);
    let lengths: Vec<usize> = collect(map(|word: &str| len(word))(non_empty(words)));
    assert_eq!(lengths, vec![4, 3, 7]);
}

#[rstest]
fn head_and_tail_decompose_a_sequence() {
    let elements = collect(range(10, 14));
    assert_eq!(head(elements.clone()), Some(10));
    assert_eq!(collect(tail(elements)), vec![11, 12, 13]);
}

#[rstest]
fn whole_pipeline_is_lazy() {
    let mapped = Cell::new(0);
    let tracked = map(|x: i32| {
        mapped.set(mapped.get() + 1);
        x * 2
    });
    let pipeline = compose!(head, filter(gt(30)), tracked);

    assert_eq!(mapped.get(), 0);
    assert_eq!(pipeline(range(0, i32::MAX)), Some(32));
    assert_eq!(mapped.get(), 17);
}

#[rstest]
fn checked_range_feeds_pipeline() -> Result<(), RangeError> {
    let steps = try_range_with_step(0.0, 2.0, 0.5)?;
    let halves = collect(map(|x: f64| x * 2.0)(steps));
    assert_eq!(halves, vec![0.0, 1.0, 2.0, 3.0]);
    Ok(())
}
