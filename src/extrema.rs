//! Largest and smallest elements.
//!
//! Empty sequences yield `None`. A later element only replaces the current
//! best when it is strictly better, so among tied extremes the earliest one
//! is returned.
//!
//! All four functions panic if the producer thread cannot be spawned, and
//! resume panics raised by the producer or the comparator.

use std::cmp::Ordering;

use crate::{pull::pull, seq::Seq};

/// Keep the first element, then every element `f` ranks as `wanted` against
/// the current best.
fn select_by<S, F>(seq: S, wanted: Ordering, mut f: F) -> Option<S::Item>
where
    S: Seq + Send,
    S::Item: Send,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    pull(seq, |items| {
        let mut best = items.fetch()?;
        while let Some(next) = items.fetch() {
            if f(&next, &best) == wanted {
                best = next;
            }
        }
        Some(best)
    })
}

/// Largest element of `seq`.
///
/// # Panics
///
/// Panics if the producer thread cannot be spawned.
///
/// ```rust
/// use lockstep::prelude::*;
///
/// assert_eq!(max(vec![3, 1, 4, 1, 5, 9]), Some(9));
/// assert_eq!(max(empty::<i32>()), None);
/// ```
pub fn max<S>(seq: S) -> Option<S::Item>
where
    S: Seq + Send,
    S::Item: Ord + Send,
{
    max_by(seq, Ord::cmp)
}

/// Largest element of `seq` according to `f`; the first one wins ties.
pub fn max_by<S, F>(seq: S, f: F) -> Option<S::Item>
where
    S: Seq + Send,
    S::Item: Send,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    select_by(seq, Ordering::Greater, f)
}

/// Smallest element of `seq`.
///
/// # Panics
///
/// Panics if the producer thread cannot be spawned.
pub fn min<S>(seq: S) -> Option<S::Item>
where
    S: Seq + Send,
    S::Item: Ord + Send,
{
    min_by(seq, Ord::cmp)
}

/// Smallest element of `seq` according to `f`; the first one wins ties.
///
/// ```rust
/// use lockstep::prelude::*;
///
/// let shortest = min_by(vec!["pear", "fig", "kiwi", "yam"], |a, b| a.len().cmp(&b.len()));
/// assert_eq!(shortest, Some("fig"));
/// ```
pub fn min_by<S, F>(seq: S, f: F) -> Option<S::Item>
where
    S: Seq + Send,
    S::Item: Send,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    select_by(seq, Ordering::Less, f)
}
