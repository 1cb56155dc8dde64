//! Lexicographic comparison and equality of two sequences.
//!
//! Both inputs are walked in lock-step through a pair of [`Puller`]s: one
//! element from each side per step, the first decisive step ends the walk.
//! Whatever the outcome, both producers have been stopped and cleaned up by
//! the time a result is returned.
//!
//! A sequence that runs out first compares as [`Ordering::Less`], so a
//! proper prefix is less than the longer sequence.
//!
//! The keyed variants (`compare2`, `equal2` and their `_by` forms) treat a
//! key/value sequence as a sequence of pairs.
//!
//! Every function here panics if a producer thread cannot be spawned, and
//! resumes panics raised by a producer or by the comparator once both
//! producers have been released.
//!
//! [`Puller`]: crate::Puller

use std::cmp::Ordering;

use crate::{
    pull::pull_pair,
    seq::{Seq, Seq2},
};

/// Compare two sequences lexicographically.
///
/// # Panics
///
/// Panics if a producer thread cannot be spawned, and resumes any panic raised
/// by either producer or by the comparator.
///
/// ```rust
/// use lockstep::prelude::*;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare(vec![1, 2], vec![1, 2, 3]), Ordering::Less);
/// assert_eq!(compare(vec![1, 3], vec![1, 2, 3]), Ordering::Greater);
/// assert_eq!(compare(empty::<u8>(), empty()), Ordering::Equal);
/// ```
pub fn compare<A, B>(x: A, y: B) -> Ordering
where
    A: Seq + Send,
    B: Seq<Item = A::Item> + Send,
    A::Item: Ord + Send,
{
    compare_by(x, y, |a, b| a.cmp(&b))
}

/// Compare two sequences lexicographically with `f`.
///
/// The element types may differ. `f` is not called once either side is
/// exhausted.
///
/// # Panics
///
/// Same as [`compare`].
pub fn compare_by<A, B, F>(x: A, y: B, mut f: F) -> Ordering
where
    A: Seq + Send,
    B: Seq + Send,
    A::Item: Send,
    B::Item: Send,
    F: FnMut(A::Item, B::Item) -> Ordering,
{
    pull_pair(x, y, |xs, ys| loop {
        match (xs.fetch(), ys.fetch()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(a), Some(b)) => match f(a, b) {
                Ordering::Equal => {}
                decided => return decided,
            },
        }
    })
}

/// Whether two sequences have equal elements in the same order.
///
/// # Panics
///
/// Panics if a producer thread cannot be spawned, and resumes any panic raised
/// by either producer or by the comparator.
///
/// ```rust
/// use lockstep::prelude::*;
///
/// assert!(equal(vec!["a", "b"], iter(["a", "b"])));
/// assert!(!equal(vec![1, 2], vec![1, 2, 3]));
/// ```
pub fn equal<A, B>(x: A, y: B) -> bool
where
    A: Seq + Send,
    B: Seq + Send,
    A::Item: PartialEq<B::Item> + Send,
    B::Item: Send,
{
    equal_by(x, y, |a, b| a == b)
}

/// Whether `f` accepts every pair and both sequences have the same length.
///
/// # Panics
///
/// Same as [`equal`].
pub fn equal_by<A, B, F>(x: A, y: B, mut f: F) -> bool
where
    A: Seq + Send,
    B: Seq + Send,
    A::Item: Send,
    B::Item: Send,
    F: FnMut(A::Item, B::Item) -> bool,
{
    pull_pair(x, y, |xs, ys| loop {
        match (xs.fetch(), ys.fetch()) {
            (None, None) => return true,
            (Some(a), Some(b)) => {
                if !f(a, b) {
                    return false;
                }
            }
            _ => return false,
        }
    })
}

/// Compare two key/value sequences, ordering by key and then by value.
///
/// ```rust
/// use lockstep::prelude::*;
/// use std::cmp::Ordering;
///
/// let x = vec![("a", 1), ("b", 2)];
/// let y = vec![("a", 1), ("b", 3)];
/// assert_eq!(compare2(x, y), Ordering::Less);
/// ```
pub fn compare2<A, B, K, V>(x: A, y: B) -> Ordering
where
    A: Seq2<K, V> + Send,
    B: Seq2<K, V> + Send,
    K: Ord + Send,
    V: Ord + Send,
{
    compare_by(x, y, |(k1, v1), (k2, v2)| k1.cmp(&k2).then_with(|| v1.cmp(&v2)))
}

/// Compare two key/value sequences with `f(k1, v1, k2, v2)`.
pub fn compare_by2<A, B, K1, V1, K2, V2, F>(x: A, y: B, mut f: F) -> Ordering
where
    A: Seq2<K1, V1> + Send,
    B: Seq2<K2, V2> + Send,
    K1: Send,
    V1: Send,
    K2: Send,
    V2: Send,
    F: FnMut(K1, V1, K2, V2) -> Ordering,
{
    compare_by(x, y, |(k1, v1), (k2, v2)| f(k1, v1, k2, v2))
}

/// Whether two key/value sequences hold the same pairs in the same order.
pub fn equal2<A, B, K, V>(x: A, y: B) -> bool
where
    A: Seq2<K, V> + Send,
    B: Seq2<K, V> + Send,
    K: PartialEq + Send,
    V: PartialEq + Send,
{
    equal_by(x, y, |(k1, v1), (k2, v2)| k1 == k2 && v1 == v2)
}

/// Whether `f(k1, v1, k2, v2)` accepts every pair and the lengths match.
pub fn equal_by2<A, B, K1, V1, K2, V2, F>(x: A, y: B, mut f: F) -> bool
where
    A: Seq2<K1, V1> + Send,
    B: Seq2<K2, V2> + Send,
    K1: Send,
    V1: Send,
    K2: Send,
    V2: Send,
    F: FnMut(K1, V1, K2, V2) -> bool,
{
    equal_by(x, y, |(k1, v1), (k2, v2)| f(k1, v1, k2, v2))
}
