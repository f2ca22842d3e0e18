//! The reference fixture run through every backend.

#![allow(clippy::float_cmp)]

use std::collections::{LinkedList, VecDeque};

use listxt_core::prelude::*;
use pretty_assertions::assert_eq;

const FIXTURE: [i32; 8] = [3, 10, -2, 1, 7, 6, 6, 15];

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn to_vec<C: OrderedContainer>(c: &C) -> Vec<C::Item>
where
    C::Item: Clone,
{
    c.iter().cloned().collect()
}

fn check_functional<C: OrderedContainer<Item = i32>>() {
    let c = C::from_elements(FIXTURE);

    assert!(c.all_match(|&x| x > -3));
    assert!(c.any_match(|&x| x == 15));
    assert!(c.none_match(|&x| x > 15));
    assert_eq!(c.find(|&x| x > 5), Some(&10));
    assert_eq!(c.find_index(|&x| x < 0), Some(2));
    assert_eq!(to_vec(&c.filter(|&x| x % 2 == 0)), vec![10, -2, 6, 6]);
    assert_eq!(to_vec(&c.map(|&x| x * x)), vec![9, 100, 4, 1, 49, 36, 36, 225]);
    assert_eq!(c.reduce(|a, b| a + b), Some(46));
    assert_eq!(c.distinct().len(), 7);
    assert_eq!(c.min_element().unwrap(), Some(&-2));
    assert_eq!(c.max_by(|a, b| a.abs().cmp(&b.abs())), Some(&15));
    assert_eq!(to_vec(&c.sorted().unwrap()), vec![-2, 1, 3, 6, 6, 7, 10, 15]);
    assert_eq!(
        to_vec(&c.sorted_by(|a, b| b.cmp(a))),
        vec![15, 10, 7, 6, 6, 3, 1, -2]
    );
    assert_eq!(c.try_sum(), Ok(46.0));

    // Nothing above touched the receiver.
    assert_eq!(to_vec(&c), FIXTURE.to_vec());
}

fn check_numeric<C: OrderedContainer<Item = i32>>() {
    let c = C::from_elements(FIXTURE);

    assert_eq!(c.sum(), 46.0);
    assert_eq!(c.product(), -226_800.0);
    assert_eq!(c.avg(), Ok(5.75));
    assert!((c.norm() - 21.4476).abs() < 1e-3);
    assert!((c.sigma().unwrap() - 13.9821).abs() < 1e-3);
    assert_eq!(c.dot(&c), Ok(460.0));

    let doubled = c.sum_pairwise(&c).unwrap();
    assert_eq!(to_vec(&doubled), to_vec(&c.scalar_mul(2)));

    let squares = c.mul_pairwise(&c).unwrap();
    assert_eq!(
        to_vec(&squares),
        vec![9.0, 100.0, 4.0, 1.0, 49.0, 36.0, 36.0, 225.0]
    );
}

fn check_empty<C: OrderedContainer<Item = i32>>() {
    let e = C::with_capacity(0);

    assert!(e.all_match(|_| false));
    assert!(!e.any_match(|_| true));
    assert_eq!(e.find(|_| true), None);
    assert_eq!(e.reduce(|a, b| a + b), None);
    assert_eq!(e.min_element().unwrap(), None);
    assert!(e.sorted().unwrap().is_empty());
    assert_eq!(e.sum(), 0.0);
    assert_eq!(e.product(), 1.0);
    assert_eq!(e.norm(), 0.0);
    assert_eq!(e.dot(&e), Ok(0.0));
    assert_eq!(e.avg(), Err(CoreError::EmptyCollection { operation: "avg" }));
    assert_eq!(
        e.sigma(),
        Err(CoreError::EmptyCollection { operation: "sigma" })
    );
}

#[test]
fn vec_backend() {
    init_logging();
    check_functional::<Vec<i32>>();
    check_numeric::<Vec<i32>>();
    check_empty::<Vec<i32>>();
}

#[test]
fn vec_deque_backend() {
    init_logging();
    check_functional::<VecDeque<i32>>();
    check_numeric::<VecDeque<i32>>();
    check_empty::<VecDeque<i32>>();
}

#[test]
fn linked_list_backend() {
    init_logging();
    check_functional::<LinkedList<i32>>();
    check_numeric::<LinkedList<i32>>();
    check_empty::<LinkedList<i32>>();
}

#[test]
fn operands_may_use_different_backends() {
    init_logging();
    let a: LinkedList<i32> = FIXTURE.into_iter().collect();
    let b: VecDeque<f32> = FIXTURE.iter().map(|&x| x as f32).collect();

    assert_eq!(a.dot(&b), Ok(460.0));
    let short = vec![1_u8; 3];
    assert_eq!(
        a.sum_pairwise(&short).unwrap_err(),
        CoreError::SizeMismatch {
            operation: "sum_pairwise",
            expected: 8,
            got: 3,
        }
    );
}

#[test]
fn heterogeneous_values_fail_at_the_offending_element() {
    init_logging();
    let values: Vec<Value> = vec![1_i64.into(), 2.5.into(), "three".into(), true.into()];

    assert_eq!(
        values.try_sum(),
        Err(CoreError::TypeMismatch {
            operation: "try_sum",
            index: 2,
            reason: "element is not numeric",
        })
    );
    assert!(matches!(
        values.sorted(),
        Err(CoreError::TypeMismatch { operation: "sorted", .. })
    ));

    let numbers = values.filter(Value::is_numeric);
    assert_eq!(numbers.try_product(), Ok(2.5));
    assert_eq!(numbers.max_element().unwrap(), Some(&Value::Float(2.5)));
}
