//! End-to-end pipeline tests through the public facade

use std::cell::Cell;

use pipeq::prelude::*;
use pipeq::values;

fn sample() -> Vec<i32> {
    vec![5, 3, 8, 1, 9, 2, 7]
}

#[test]
fn test_where_always_true_is_identity() {
    let out = Query::new(sample())
        .where_(|_| Ok(true))
        .results()
        .expect("where failed");
    assert_eq!(out, sample());
}

#[test]
fn test_select_identity_is_identity() {
    let out = Query::new(sample())
        .select(|v| Ok(*v))
        .results()
        .expect("select failed");
    assert_eq!(out, sample());
}

#[test]
fn test_order_ints_sorts_and_is_idempotent() {
    let once = Query::new(vec![3, 1, 2]).order_ints().results().unwrap();
    assert_eq!(once, vec![1, 2, 3]);

    let twice = Query::new(vec![3, 1, 2])
        .order_ints()
        .order_ints()
        .results()
        .unwrap();
    assert_eq!(twice, once);
}

#[test]
fn test_typed_sorts_over_values() {
    let out = Query::new(values![3i64, -1i8, 2i32])
        .order_ints()
        .results()
        .unwrap();
    assert_eq!(out, values![-1i8, 2i32, 3i64]);

    let out = Query::new(values!["pear", "apple", "fig"])
        .order_strings()
        .results()
        .unwrap();
    assert_eq!(out, values!["apple", "fig", "pear"]);

    let err = Query::new(values![1, "two"]).order_ints().results();
    assert_eq!(err, Err(QueryError::TypeMismatch));
}

#[test]
fn test_take_count_is_clamped_and_partitions() {
    let s = sample();
    for n in 0..10isize {
        let taken = Query::new(s.clone()).take(n).count().unwrap();
        assert_eq!(taken, (n as usize).min(s.len()));

        let mut joined = Query::new(s.clone()).take(n).results().unwrap();
        joined.extend(Query::new(s.clone()).skip(n).results().unwrap());
        assert_eq!(joined, s);
    }
}

#[test]
fn test_take_while_skip_while() {
    let head = Query::new(sample()).take_while(|v| Ok(*v > 2)).results();
    assert_eq!(head, Ok(vec![5, 3, 8]));

    let tail = Query::new(sample()).skip_while(|v| Ok(*v > 2)).results();
    assert_eq!(tail, Ok(vec![1, 9, 2, 7]));
}

#[test]
fn test_range() {
    assert_eq!(pipeq::range(0, 5).results(), Ok(vec![0, 1, 2, 3, 4]));
    assert_eq!(pipeq::range(7, -1).results(), Err(QueryError::NegativeParam));
    assert_eq!(pipeq::range(-2, 3).sum(), Ok(-3.0));
}

#[test]
fn test_sum_over_mixed_values() {
    let sum = Query::new(values![1, 2.5, 3i32]).sum().unwrap();
    assert!((sum - 6.5).abs() < f64::EPSILON);

    assert_eq!(
        Query::new(values!["a"]).sum(),
        Err(QueryError::NonNumeric)
    );
}

#[test]
fn test_average_and_bounds() {
    assert_eq!(pipeq::from(vec![2u8, 4, 9]).average(), Ok(5.0));
    assert_eq!(
        pipeq::from(Vec::<u8>::new()).average(),
        Err(QueryError::EmptySequence)
    );
    assert_eq!(pipeq::from(vec![2u8, 4, 9]).min_uint(), Ok(2));
    assert_eq!(pipeq::from(vec![-2i64, 4, 9]).max_int(), Ok(9));
    assert_eq!(pipeq::from(vec![0.5, -1.5, 3.0]).max_float(), Ok(3.0));
    assert_eq!(
        pipeq::from(Vec::<f64>::new()).min_float(),
        Err(QueryError::EmptySequence)
    );
}

#[test]
fn test_first_on_empty() {
    let empty = || Query::new(Vec::<String>::new());
    assert_eq!(empty().first(), Err(QueryError::NoElement));
    assert_eq!(empty().first_or_none(), Ok(None));
    assert_eq!(empty().last(), Err(QueryError::NoElement));
    assert_eq!(empty().element_at_or_none(0), Ok(None));
}

#[test]
fn test_faulted_pipeline_never_calls_callables() {
    let calls = Cell::new(0);
    let bump = |_: &i32| {
        calls.set(calls.get() + 1);
        Ok(true)
    };

    let q = Query::new(sample()).element_at(-3).map(|_| ());
    let fault = q.expect_err("negative index must fault");

    let faulted = || Query::<i32>::faulted(fault.clone());
    assert_eq!(faulted().where_(bump).results(), Err(fault.clone()));
    assert_eq!(faulted().count_by(bump), Err(fault.clone()));
    assert_eq!(faulted().any_with(bump), Err(fault.clone()));
    assert_eq!(faulted().all(bump), Err(fault.clone()));
    assert_eq!(faulted().take_while(bump).count(), Err(fault.clone()));
    assert_eq!(faulted().first_by(bump), Err(fault.clone()));
    assert_eq!(
        faulted()
            .distinct_by(|_, _| {
                calls.set(calls.get() + 1);
                Ok(true)
            })
            .results(),
        Err(fault.clone())
    );
    assert_eq!(faulted().order_by(|a, b| a < b).results(), Err(fault.clone()));
    assert_eq!(
        faulted()
            .select(|v| {
                calls.set(calls.get() + 1);
                Ok(*v)
            })
            .results(),
        Err(fault.clone())
    );
    assert_eq!(faulted().skip_while(bump).results(), Err(fault.clone()));
    assert_eq!(faulted().last_by(bump), Err(fault.clone()));
    assert_eq!(faulted().single(bump), Err(fault.clone()));
    assert_eq!(calls.get(), 0);

    assert_eq!(
        faulted().union(vec![1, 2]).order_ints().results(),
        Err(fault.clone())
    );
    assert_eq!(faulted().sum(), Err(fault));
}

#[test]
fn test_faulted_pipeline_skips_join_callables() {
    let calls = Cell::new(0);
    let key = |v: &i32| {
        calls.set(calls.get() + 1);
        *v
    };

    let fault = QueryError::callback("upstream");
    let out = Query::<i32>::faulted(fault.clone())
        .join(vec![1, 2, 3], key, key, |o: &i32, i: &i32| {
            calls.set(calls.get() + 1);
            o + i
        })
        .group_join(vec![4, 5], key, key, |o: i32, group: Vec<i32>| {
            calls.set(calls.get() + 1);
            (o, group.len())
        })
        .results();
    assert_eq!(out, Err(fault));
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_callback_fault_is_identical_at_terminal() {
    let boom = QueryError::callback("boom");
    let raised = boom.clone();
    let out = Query::new(sample())
        .select(move |v| if *v == 8 { Err(raised.clone()) } else { Ok(*v) })
        .order_ints()
        .take(2)
        .results();
    assert_eq!(out, Err(boom));
}

#[test]
fn test_reverse_and_last_by() {
    let q = || Query::new(sample());
    assert_eq!(q().reverse().first(), Ok(7));
    assert_eq!(q().last_by(|v| Ok(*v < 3)), Ok(2));
    assert_eq!(q().last_or_none_by(|v| Ok(*v > 100)), Ok(None));
}
