//! Comparator contract scenarios
//!
//! Exercises the key-mapped comparator through the public API only.

use docfixture::compare::{compare, try_compare, Comparison, IncomparablePolicy, KeyComparator};
use docfixture::Error;

#[test]
fn test_identity_numbers() {
    assert_eq!(compare(|x: &i32| *x, &3, &5), -1);
}

#[test]
fn test_identity_strings() {
    assert_eq!(compare(|s: &&str| s.to_string(), &"b", &"a"), 1);
}

#[test]
fn test_length_ties_distinct_strings() {
    assert_eq!(compare(|s: &&str| s.len(), &"cat", &"dog"), 0);
}

#[test]
fn test_reflexive_for_mixed_items() {
    let items = ["", "a", "hello", "ZZZ"];
    for item in &items {
        assert_eq!(compare(|s: &&str| s.len(), item, item), 0);
        assert_eq!(compare(|s: &&str| s.to_lowercase(), item, item), 0);
    }
}

#[test]
fn test_antisymmetric_pairs() {
    let items = [7, -2, 7, 0, 100];
    for a in &items {
        for b in &items {
            assert_eq!(compare(|x: &i32| *x, a, b), -compare(|x: &i32| *x, b, a));
        }
    }
}

#[test]
fn test_reverse_key_flips_order() {
    assert_eq!(compare(|x: &i32| std::cmp::Reverse(*x), &3, &5), 1);
}

#[test]
fn test_tuple_keys() {
    let key = |p: &(&str, u32)| (p.1, p.0.to_string());
    assert_eq!(compare(key, &("bob", 30), &("alice", 30)), 1);
    assert_eq!(compare(key, &("bob", 29), &("alice", 30)), -1);
}

#[test]
fn test_inputs_not_mutated() {
    let a = vec![3, 1, 2];
    let b = vec![1];
    let before = (a.clone(), b.clone());
    assert_eq!(compare(Vec::len, &a, &b), 1);
    assert_eq!((a, b), before);
}

#[test]
fn test_partial_keys_policy() {
    assert!(matches!(
        try_compare(|x: &f64| *x, &f64::NAN, &0.0),
        Err(Error::Incomparable)
    ));

    let lenient = KeyComparator::new(|x: &f64| *x).with_policy(IncomparablePolicy::TreatAsEqual);
    assert_eq!(lenient.compare(&f64::NAN, &0.0).unwrap(), 0);
    assert_eq!(lenient.comparison(&1.0, &0.0).unwrap(), Comparison::Greater);
}

#[test]
fn test_concurrent_callers() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                (0..1000).all(|j| compare(|x: &i32| *x, &i, &(j + 8)) == -1)
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn test_sorting_with_comparator() {
    let by_len = KeyComparator::new(|s: &String| s.len());
    let mut words: Vec<String> = ["pear", "fig", "banana", "kiwi"]
        .iter()
        .map(ToString::to_string)
        .collect();
    by_len.sort(&mut words);
    assert_eq!(words, vec!["fig", "pear", "kiwi", "banana"]);
}
