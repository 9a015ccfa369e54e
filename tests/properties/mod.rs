//! Behaviour that must hold across whole pipelines rather than single stages.

use seq_rail::prelude::*;

use crate::support::{failing_after, Calls};

#[test]
fn take_bounds_every_upstream_function_on_an_infinite_source() {
    for n in [0, 1, 5, 32] {
        let mapped = Calls::default();
        let filtered = Calls::default();
        let (m, f) = (mapped.clone(), filtered.clone());

        let out = increment::<SequenceError>()
            .map(move |v| {
                m.hit();
                Ok(v * 3)
            })
            .filter(move |_| {
                f.hit();
                true
            })
            .take(n)
            .count();

        assert_eq!(out, Ok(n));
        assert_eq!(mapped.get(), n, "map ran past element {n}");
        assert_eq!(filtered.get(), n, "filter ran past element {n}");
    }
}

#[test]
fn any_calls_predicate_exactly_k_plus_one_times() {
    let values: Vec<i32> = (0..20).collect();
    for k in [0usize, 1, 7, 19] {
        let calls = Calls::default();
        let seen = calls.clone();
        let target = values[k];

        let out = from_slice::<_, SequenceError>(&values).any(move |v| {
            seen.hit();
            **v == target
        });

        assert_eq!(out, Ok(true));
        assert_eq!(calls.get(), k + 1);
    }
}

#[test]
fn errors_at_position_m_propagate_through_any_chain() {
    for m in [0usize, 1, 4] {
        let prefix: Vec<i64> = (1..=m as i64).collect();
        let expected_sum: i64 = prefix.iter().sum();

        let collected = failing_after(prefix.clone(), "m-th")
            .map(Ok)
            .filter(|_| true)
            .enumerate()
            .collect();
        assert_eq!(collected, Err("m-th"));

        let folded = failing_after(prefix, "m-th")
            .map(Ok)
            .fold(0, |acc, v| acc + v);
        assert_eq!(folded, Err(Interrupted::new(expected_sum, "m-th")));
    }
}

#[test]
fn collect_then_from_slice_round_trips() {
    let first = range::<SequenceError>(0, 10)
        .filter(|n| n % 3 != 0)
        .map(|n| Ok(n * 2))
        .collect()
        .unwrap();
    let second = from_slice::<_, SequenceError>(&first).copied().collect().unwrap();

    assert_eq!(first, second);
}

#[test]
fn zip_and_zip_eq_disagree_on_uneven_input() {
    let numbers = [1, 2, 3, 4, 5];
    let letters = ["a", "b", "c"];

    let pairs = zip::<_, _, SequenceError>(&numbers, &letters).collect().unwrap();
    assert_eq!(pairs.len(), 3);

    let strict = zip_eq::<_, _, SequenceError>(&numbers, &letters).collect();
    assert_eq!(strict, Err(SequenceError::LengthMismatch { left: 5, right: 3 }));
}

#[test]
fn enumerate_ordinals_start_at_zero() {
    let letters = ["x", "y", "z"];
    let out = from_slice::<_, SequenceError>(&letters)
        .copied()
        .enumerate()
        .map(|item| Ok(item.into_pair()))
        .collect();

    assert_eq!(out, Ok(vec![(0, "x"), (1, "y"), (2, "z")]));
}

#[test]
fn filter_map_is_not_called_past_an_injected_error() {
    let calls = Calls::default();
    let seen = calls.clone();

    let out = failing_after(vec![1, 2, 3], "injected")
        .filter_map(move |v| {
            seen.hit();
            Ok((v % 2 == 0).then(|| v * v))
        })
        .collect();

    assert_eq!(out, Err("injected"));
    assert_eq!(calls.get(), 3);
}

#[test]
fn empty_sources_behave_at_the_edges() {
    let empty: [i32; 0] = [];
    assert_eq!(from_slice::<_, SequenceError>(&empty).first(), Err(SequenceError::Empty));
    assert_eq!(from_slice::<_, SequenceError>(&empty).last(), Err(SequenceError::Empty));
    assert_eq!(repeat_n::<_, SequenceError>(1, 0).count(), Ok(0));
    assert_eq!(repeat_n::<_, SequenceError>(1, -5).count(), Ok(0));
}
