//! Monotonicity checks.
//!
//! A sequence is sorted when it never changes direction: all adjacent pairs
//! are non-decreasing, or all are non-increasing. The direction is not fixed
//! by the first pair but by the first pair that is not a tie, so `[2, 2, 1]`
//! is sorted (descending) while `[1, 1, 2, 1]` is not.

use std::cmp::Ordering;

use crate::{pull::pull, seq::Seq};

/// Whether `seq` is non-decreasing or non-increasing.
///
/// # Panics
///
/// Panics if the producer thread cannot be spawned, and resumes any panic
/// raised by the producer.
///
/// ```rust
/// use lockstep::prelude::*;
///
/// assert!(is_sorted(vec![1, 1, 2, 3]));
/// assert!(is_sorted(vec![3, 2, 1]));
/// assert!(!is_sorted(vec![1, 3, 2]));
/// assert!(is_sorted(empty::<i32>()));
/// ```
pub fn is_sorted<S>(seq: S) -> bool
where
    S: Seq + Send,
    S::Item: Ord + Send,
{
    is_sorted_by(seq, Ord::cmp)
}

/// Whether `seq` keeps a single direction under `f`.
///
/// Stops pulling at the first pair that contradicts the established
/// direction.
///
/// # Panics
///
/// Same as [`is_sorted`], and also resumes a panic raised by `f`.
pub fn is_sorted_by<S, F>(seq: S, mut f: F) -> bool
where
    S: Seq + Send,
    S::Item: Send,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    pull(seq, |items| {
        let Some(mut prev) = items.fetch() else {
            return true;
        };
        let mut direction = Ordering::Equal;
        while let Some(next) = items.fetch() {
            let order = f(&prev, &next);
            if direction == Ordering::Equal {
                direction = order;
            } else if order != Ordering::Equal && order != direction {
                return false;
            }
            prev = next;
        }
        true
    })
}
