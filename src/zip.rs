//! Positional pairing of two sequences.
//!
//! [`Zip`], [`ZipWith`] and [`ZipWith2`] are sequences themselves. Driving
//! one opens a puller on each input, fetches the left side and then the
//! right side for every output element, and stops the moment either side
//! runs dry. The combining function is only called once both sides have
//! produced, so zipping an infinite sequence with a finite one terminates.
//!
//! Driving any of them panics if a producer thread cannot be spawned. Panics
//! from a producer or from the combining function are resumed after both
//! pullers have been released.

use crate::{flow::Flow, pull::pull_pair, seq::Seq};

/// Shared driving loop of the zip family.
fn drive_lockstep<A, B, O>(
    left: A,
    right: B,
    mut combine: impl FnMut(A::Item, B::Item) -> O,
    sink: &mut dyn FnMut(O) -> Flow,
) -> Flow
where
    A: Seq + Send,
    B: Seq + Send,
    A::Item: Send,
    B::Item: Send,
{
    pull_pair(left, right, |xs, ys| loop {
        let Some(x) = xs.fetch() else {
            return Flow::Continue;
        };
        let Some(y) = ys.fetch() else {
            return Flow::Continue;
        };
        if sink(combine(x, y)).is_break() {
            return Flow::Break;
        }
    })
}

/// Pairs of elements taken from two sequences at the same position.
///
/// Created via [`zip()`] or [`Seq::zip`].
pub struct Zip<A, B> {
    left: A,
    right: B,
}

/// Pair up the elements of `left` and `right` until either runs out.
///
/// # Panics
///
/// Driving the result panics if a producer thread cannot be spawned.
///
/// ```rust
/// use lockstep::prelude::*;
///
/// let pairs: Vec<(i32, &str)> = zip(vec![1, 2, 3], vec!["a", "b"]).collect();
/// assert_eq!(pairs, vec![(1, "a"), (2, "b")]);
/// ```
pub fn zip<A, B>(left: A, right: B) -> Zip<A, B>
where
    A: Seq,
    B: Seq,
{
    Zip { left, right }
}

impl<A, B> Seq for Zip<A, B>
where
    A: Seq + Send,
    B: Seq + Send,
    A::Item: Send,
    B::Item: Send,
{
    type Item = (A::Item, B::Item);

    fn drive(self, sink: &mut dyn FnMut(Self::Item) -> Flow) -> Flow {
        drive_lockstep(self.left, self.right, |x, y| (x, y), sink)
    }
}

/// Elements of two sequences combined position by position.
///
/// Created via [`zip_with()`] or [`Seq::zip_with`].
pub struct ZipWith<A, B, F> {
    left: A,
    right: B,
    f: F,
}

/// Combine the elements of `left` and `right` with `f` until either runs out.
///
/// # Panics
///
/// Driving the result panics if a producer thread cannot be spawned, and
/// resumes any panic raised by `f`.
///
/// ```rust
/// use lockstep::prelude::*;
///
/// let sums: Vec<u32> = zip_with(repeat(100), vec![1, 2, 3], |a, b| a + b).collect();
/// assert_eq!(sums, vec![101, 102, 103]);
/// ```
pub fn zip_with<A, B, O, F>(left: A, right: B, f: F) -> ZipWith<A, B, F>
where
    A: Seq,
    B: Seq,
    F: FnMut(A::Item, B::Item) -> O,
{
    ZipWith { left, right, f }
}

impl<A, B, O, F> Seq for ZipWith<A, B, F>
where
    A: Seq + Send,
    B: Seq + Send,
    A::Item: Send,
    B::Item: Send,
    F: FnMut(A::Item, B::Item) -> O,
{
    type Item = O;

    fn drive(self, sink: &mut dyn FnMut(O) -> Flow) -> Flow {
        drive_lockstep(self.left, self.right, self.f, sink)
    }
}

/// Two key/value sequences merged position by position into a third.
///
/// Created via [`zip_with2()`].
pub struct ZipWith2<A, B, F> {
    left: A,
    right: B,
    f: F,
}

/// Combine two key/value sequences with `f(k1, v1, k2, v2) -> (k, v)`.
///
/// # Panics
///
/// Same as [`zip_with()`].
///
/// ```rust
/// use lockstep::prelude::*;
///
/// let stock = vec![("apple", 3), ("pear", 0)];
/// let price = vec![("apple", 2), ("pear", 5)];
/// let value: Vec<(&str, i32)> =
///     zip_with2(stock, price, |name, count, _, cents| (name, count * cents)).collect();
/// assert_eq!(value, vec![("apple", 6), ("pear", 0)]);
/// ```
pub fn zip_with2<A, B, K1, V1, K2, V2, K, V, F>(left: A, right: B, f: F) -> ZipWith2<A, B, F>
where
    A: Seq<Item = (K1, V1)>,
    B: Seq<Item = (K2, V2)>,
    F: FnMut(K1, V1, K2, V2) -> (K, V),
{
    ZipWith2 { left, right, f }
}

impl<A, B, K1, V1, K2, V2, K, V, F> Seq for ZipWith2<A, B, F>
where
    A: Seq<Item = (K1, V1)> + Send,
    B: Seq<Item = (K2, V2)> + Send,
    K1: Send,
    V1: Send,
    K2: Send,
    V2: Send,
    F: FnMut(K1, V1, K2, V2) -> (K, V),
{
    type Item = (K, V);

    fn drive(self, sink: &mut dyn FnMut((K, V)) -> Flow) -> Flow {
        let mut f = self.f;
        drive_lockstep(
            self.left,
            self.right,
            |(k1, v1), (k2, v2)| f(k1, v1, k2, v2),
            sink,
        )
    }
}
