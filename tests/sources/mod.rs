use seq_rail::prelude::*;

use crate::support::TestError;

#[test]
fn from_slice_yields_references_in_order() {
    let values = vec![1, 2, 3, 4, 5];
    let output = from_slice::<_, SequenceError>(&values).collect().unwrap();

    assert_eq!(output.len(), values.len());
    for (i, v) in output.iter().enumerate() {
        assert_eq!(**v, values[i]);
        assert!(std::ptr::eq(*v, &values[i]), "element {i} was copied");
    }
}

#[test]
fn from_slice_is_restartable_by_calling_again() {
    let values = ["a", "b"];
    let first = from_slice::<_, SequenceError>(&values).collect().unwrap();
    let second = from_slice::<_, SequenceError>(&values).collect().unwrap();
    assert_eq!(first, second);
}

#[test]
fn reversed_yields_back_to_front_without_copying() {
    let values = [1, 2, 3, 4, 5];
    let output = reversed::<_, SequenceError>(&values).collect().unwrap();

    assert_eq!(output, vec![&5, &4, &3, &2, &1]);
    assert!(std::ptr::eq(output[0], &values[4]));
}

#[test]
fn range_is_half_open() {
    assert_eq!(range::<SequenceError>(0, 5).collect(), Ok(vec![0, 1, 2, 3, 4]));
    assert_eq!(range::<SequenceError>(5, 5).collect(), Ok(vec![]));
    assert_eq!(range::<SequenceError>(5, 0).collect(), Ok(vec![]));
}

#[test]
fn range_reaching_i64_max_does_not_overflow() {
    let out = range::<SequenceError>(i64::MAX - 2, i64::MAX).collect();
    assert_eq!(out, Ok(vec![i64::MAX - 2, i64::MAX - 1]));
}

#[test]
fn repeat_is_infinite() {
    let out = repeat::<_, SequenceError>(7).take(1_000).collect().unwrap();
    assert_eq!(out.len(), 1_000);
    assert!(out.iter().all(|v| *v == 7));
}

#[test]
fn repeat_n_yields_exactly_n_values() {
    let out = repeat_n::<_, SequenceError>(String::from("x"), 3).collect();
    assert_eq!(out, Ok(vec!["x".to_string(), "x".to_string(), "x".to_string()]));
}

#[test]
fn repeat_n_yields_nothing_for_zero_or_negative() {
    for n in [0, -1, -2, i64::MIN] {
        assert_eq!(repeat_n::<_, SequenceError>(1, n).count(), Ok(0), "n = {n}");
    }
}

#[test]
fn increment_family_counts_up() {
    assert_eq!(increment::<SequenceError>().take(4).collect(), Ok(vec![0, 1, 2, 3]));
    assert_eq!(increment_by::<SequenceError>(3).take(4).collect(), Ok(vec![0, 3, 6, 9]));
    assert_eq!(increment_from::<SequenceError>(10).take(3).collect(), Ok(vec![10, 11, 12]));
    assert_eq!(
        increment_from_by::<SequenceError>(10, -5).take(3).collect(),
        Ok(vec![10, 5, 0])
    );
}

#[test]
fn increment_wraps_instead_of_panicking() {
    let out = increment_from::<SequenceError>(i64::MAX).take(2).collect();
    assert_eq!(out, Ok(vec![i64::MAX, i64::MIN]));
}

#[test]
fn cycle_repeats_the_slice() {
    let values = [1, 2, 3];
    let out = cycle::<_, SequenceError>(&values).copied().take(8).collect();
    assert_eq!(out, Ok(vec![1, 2, 3, 1, 2, 3, 1, 2]));
}

#[test]
fn cycle_over_empty_slice_terminates() {
    let empty: Vec<u8> = Vec::new();
    assert_eq!(cycle::<_, SequenceError>(&empty).collect(), Ok(vec![]));
}

#[test]
fn chain_concatenates_in_argument_order() {
    let a = [1, 2, 3];
    let b: [i32; 0] = [];
    let c = [4, 5];
    let d = [6];
    let e = [7, 8, 9];
    let out = chain::<_, SequenceError>([&a[..], &b[..], &c[..], &d[..], &e[..]])
        .copied()
        .collect();

    assert_eq!(out, Ok(vec![1, 2, 3, 4, 5, 6, 7, 8, 9]));
}

#[test]
fn chain_of_nothing_is_empty() {
    let out = chain::<i32, SequenceError>(std::iter::empty()).count();
    assert_eq!(out, Ok(0));
}

#[test]
fn product_is_row_major() {
    let p = [1, 2, 3];
    let q = ["a", "b"];
    let out = product::<_, _, SequenceError>(&p, &q)
        .map(|t| Ok(t.into_pair()))
        .collect()
        .unwrap();

    assert_eq!(
        out,
        vec![
            (&1, &"a"),
            (&1, &"b"),
            (&2, &"a"),
            (&2, &"b"),
            (&3, &"a"),
            (&3, &"b"),
        ]
    );
}

#[test]
fn product_with_empty_side_is_empty() {
    let p = [1, 2, 3];
    let q: [char; 0] = [];
    assert_eq!(product::<_, _, SequenceError>(&p, &q).count(), Ok(0));
    assert_eq!(product::<_, _, SequenceError>(&q, &p).count(), Ok(0));
}

#[test]
fn zip_stops_at_the_shorter_slice() {
    let numbers = [1, 2, 3, 4, 5];
    let letters = ["a", "b", "c"];

    let out = zip::<_, _, SequenceError>(&numbers, &letters)
        .map(|t| Ok((*t.a, *t.b)))
        .collect();
    assert_eq!(out, Ok(vec![(1, "a"), (2, "b"), (3, "c")]));

    let out = zip::<_, _, SequenceError>(&letters, &numbers).count();
    assert_eq!(out, Ok(3));
}

#[test]
fn zip_eq_pairs_equal_slices() {
    let numbers = [1, 2, 3];
    let letters = ["a", "b", "c"];
    let out = zip_eq::<_, _, TestError>(&numbers, &letters).count();
    assert_eq!(out, Ok(3));
}

#[test]
fn zip_eq_reports_mismatch_on_first_pull() {
    let numbers = [1, 2, 3, 4, 5];
    let letters = ["a", "b", "c"];

    let mut seq = zip_eq::<_, _, TestError>(&numbers, &letters);
    assert_eq!(
        seq.try_advance(),
        Step::Fail(TestError::Structural(SequenceError::LengthMismatch { left: 5, right: 3 }))
    );
}

#[test]
fn zip_eq_mismatch_collects_nothing() {
    let numbers = [1, 2, 3, 4, 5];
    let letters = ["a", "b", "c"];

    let out = zip_eq::<_, _, SequenceError>(&numbers, &letters).collect();
    assert_eq!(out, Err(SequenceError::LengthMismatch { left: 5, right: 3 }));
}

#[test]
fn from_iter_wraps_infallible_iterators() {
    let out = from_iter::<_, SequenceError>(vec![3, 1, 2]).collect();
    assert_eq!(out, Ok(vec![3, 1, 2]));
}

#[test]
fn from_results_ends_at_the_first_error() {
    let source = vec![Ok(1), Err(TestError::Custom("bad")), Ok(3)];
    let mut seq = from_results(source);

    assert_eq!(seq.try_advance(), Step::Yield(1));
    assert_eq!(seq.try_advance(), Step::Fail(TestError::Custom("bad")));
}

#[test]
fn from_fn_runs_a_handwritten_state_machine() {
    let mut state = 0;
    let seq = from_fn(move || {
        state += 1;
        if state <= 3 {
            Step::Yield(state * state)
        } else {
            Step::<i32, SequenceError>::Done
        }
    });

    assert_eq!(seq.collect(), Ok(vec![1, 4, 9]));
}

#[test]
#[should_panic(expected = "sequence pulled after it halted")]
fn pulling_an_exhausted_source_panics() {
    let mut seq = range::<SequenceError>(0, 1);
    let _ = seq.try_advance();
    let _ = seq.try_advance();
    let _ = seq.try_advance();
}

#[test]
#[should_panic(expected = "sequence pulled after it halted")]
fn pulling_a_failed_source_panics() {
    let numbers = [1];
    let letters: [char; 0] = [];
    let mut seq = zip_eq::<_, _, SequenceError>(&numbers, &letters);
    let _ = seq.try_advance();
    let _ = seq.try_advance();
}
