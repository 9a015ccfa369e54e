use seq_rail::prelude::*;

use crate::support::{counted_naturals, failing_after, Calls};

#[test]
fn into_results_yields_values_then_the_error() {
    let items: Vec<_> = failing_after(vec![1, 2], "boom").into_results().collect();
    assert_eq!(items, vec![Ok(1), Ok(2), Err("boom")]);
}

#[test]
fn into_results_is_fused() {
    let mut iter = range::<SequenceError>(0, 1).into_results();

    assert_eq!(iter.next(), Some(Ok(0)));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn into_results_respects_std_short_circuiting() {
    let pulls = Calls::default();
    let first_big = counted_naturals(pulls.clone())
        .into_results()
        .find(|item| matches!(item, Ok(n) if *n > 3));

    assert_eq!(first_big, Some(Ok(4)));
    assert_eq!(pulls.get(), 5);
}

#[test]
fn std_collect_into_result_stops_at_error() {
    let out: Result<Vec<i32>, &str> = failing_after(vec![1, 2], "bad").into_results().collect();
    assert_eq!(out, Err("bad"));
}

#[test]
fn from_results_then_into_results_round_trips() {
    let source = vec![Ok(1), Ok(2), Err("x")];
    let back: Vec<_> = from_results(source.clone()).into_results().collect();
    assert_eq!(back, source);
}

#[test]
fn step_converts_to_and_from_results() {
    assert_eq!(Step::<i32, &str>::from(Ok(1)), Step::Yield(1));
    assert_eq!(Step::<i32, &str>::from(Err("e")), Step::Fail("e"));
    assert_eq!(Step::<i32, &str>::from(None), Step::Done);
    assert_eq!(Step::<i32, &str>::Fail("e").into_result(), Some(Err("e")));
}
