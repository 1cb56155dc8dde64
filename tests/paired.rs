mod common;

use std::cmp::Ordering;

use common::{init_tracing, snapshot, Probe};
use lockstep::prelude::*;

#[test]
fn compare_scenarios() {
    assert_eq!(compare(vec![1, 2], vec![1, 2, 3]), Ordering::Less);
    assert_eq!(compare(vec![1, 2, 3], vec![1, 2]), Ordering::Greater);
    assert_eq!(compare(vec![1, 2, 3], vec![1, 2, 3]), Ordering::Equal);
}

#[test]
fn zip_scenario() {
    let pairs: Vec<(i32, &str)> = zip(vec![1, 2, 3], vec!["a", "b"]).collect();
    assert_eq!(pairs, vec![(1, "a"), (2, "b")]);
}

#[test]
fn extrema_scenarios() {
    assert_eq!(max_by(vec![3, 1, 4, 1, 5, 9], |a, b| a.cmp(b)), Some(9));
    assert_eq!(max_by(empty::<i32>(), |a, b| a.cmp(b)), None);
    assert_eq!(min(vec![3, 1, 4, 1, 5, 9]), Some(1));
}

#[test]
fn compare_short_circuit_releases_both_sides_once() {
    init_tracing();
    let left = Probe::new(0..100);
    let right = Probe::new((0..100).map(|n| if n == 1 { 50 } else { n }));
    let (lc, rc) = (left.counters(), right.counters());

    assert_eq!(compare(left, right), Ordering::Less);

    assert_eq!(lc.snapshot(), snapshot(1, 2, 1, 1));
    assert_eq!(rc.snapshot(), snapshot(1, 2, 1, 1));
}

#[test]
fn equal_short_circuit_releases_both_sides_once() {
    init_tracing();
    let left = Probe::new(["a", "b", "c", "d"]);
    let right = Probe::new(["a", "x", "c", "d"]);
    let (lc, rc) = (left.counters(), right.counters());

    assert!(!equal(left, right));

    assert_eq!(lc.snapshot(), snapshot(1, 2, 1, 1));
    assert_eq!(rc.snapshot(), snapshot(1, 2, 1, 1));
}

#[test]
fn shorter_side_exhausts_without_stop() {
    init_tracing();
    let left = Probe::new([1, 2]);
    let right = Probe::new([1, 2, 3, 4]);
    let (lc, rc) = (left.counters(), right.counters());

    assert_eq!(compare(left, right), Ordering::Less);

    assert_eq!(lc.snapshot(), snapshot(1, 2, 0, 1));
    assert_eq!(rc.snapshot(), snapshot(1, 3, 1, 1));
}

#[test]
fn zip_stops_finite_side_and_infinite_side() {
    init_tracing();
    let left = Probe::new([1, 2]);
    let lc = left.counters();

    let pairs: Vec<(i32, u64)> = zip(left, range_step(0, u64::MAX, 1)).collect();

    assert_eq!(pairs, vec![(1, 0), (2, 1)]);
    assert_eq!(lc.snapshot(), snapshot(1, 2, 0, 1));
}

#[test]
fn zip_with_downstream_take_releases_both_sides() {
    init_tracing();
    let left = Probe::new(0..100);
    let right = Probe::new(100..200);
    let (lc, rc) = (left.counters(), right.counters());

    let sums: Vec<i32> = zip_with(left, right, |a, b| a + b).take(3).collect();

    assert_eq!(sums, vec![100, 102, 104]);
    assert_eq!(lc.snapshot(), snapshot(1, 3, 1, 1));
    assert_eq!(rc.snapshot(), snapshot(1, 3, 1, 1));
}

#[test]
fn is_sorted_stops_at_first_contradiction() {
    init_tracing();
    let probe = Probe::new([1, 3, 2, 4, 5, 6]);
    let counters = probe.counters();

    assert!(!is_sorted(probe));

    assert_eq!(counters.snapshot(), snapshot(1, 3, 1, 1));
}

#[test]
fn max_reads_everything_once() {
    init_tracing();
    let probe = Probe::new([4, 8, 15, 16, 23, 42]);
    let counters = probe.counters();

    assert_eq!(max(probe), Some(42));

    assert_eq!(counters.snapshot(), snapshot(1, 6, 0, 1));
}

#[test]
fn keyed_compare_and_equal() {
    let inventory = vec![("apple", 3), ("kiwi", 0)];
    assert_eq!(compare2(inventory.clone(), vec![("apple", 3), ("kiwi", 1)]), Ordering::Less);
    assert_eq!(compare2(inventory.clone(), vec![("apple", 3)]), Ordering::Greater);
    assert_eq!(compare2(inventory.clone(), vec![("banana", 0)]), Ordering::Less);
    assert!(equal2(inventory.clone(), iter([("apple", 3), ("kiwi", 0)])));
    assert!(!equal2(inventory.clone(), vec![("apple", 3), ("kiwi", 2)]));

    let loose = equal_by2(inventory, vec![("APPLE", 3.0), ("KIWI", 0.0)], |k1, v1, k2, v2| {
        k1.eq_ignore_ascii_case(k2) && f64::from(v1) == v2
    });
    assert!(loose);
}

#[test]
fn keyed_zip_builds_keyed_sequence() {
    let names = vec![(1, "ada"), (2, "brian")];
    let langs = vec![(1, "analytical engine"), (2, "c"), (3, "unused")];
    let joined = zip_with2(names, langs, |id, name, _, lang| (id, format!("{name}: {lang}")));

    let by_id: Vec<(i32, String)> = joined.collect();
    assert_eq!(
        by_id,
        vec![(1, "ada: analytical engine".to_string()), (2, "brian: c".to_string())]
    );

    let keys: Vec<i32> = zip_with2(vec![(1, 'a')], vec![(2, 'b')], |k1, _, k2, _| (k1 + k2, ()))
        .keys()
        .collect();
    assert_eq!(keys, vec![3]);
}
