//! Element-wise relays: transforming, filtering, indexing, and splitting pairs.
//!
//! This module provides [`Map`], [`Filter`], [`Enumerate`], [`Keys`] and
//! [`Values`]. Each one forwards the downstream sink's [`Flow`] straight back
//! to its upstream, so a downstream `Break` stops the source immediately.

use crate::{flow::Flow, seq::Seq};

/// Transforms every element of the wrapped sequence.
pub struct Map<S, F> {
    seq: S,
    f: F,
}

/// Create a sequence that applies `f` to every element of `seq`.
///
/// # Examples
///
/// ```
/// use lockstep::prelude::*;
///
/// let doubled: Vec<i32> = map(vec![1, 2, 3], |n| n * 2).collect();
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub fn map<S, B, F>(seq: S, f: F) -> Map<S, F>
where
    S: Seq,
    F: FnMut(S::Item) -> B,
{
    Map { seq, f }
}

impl<S, B, F> Seq for Map<S, F>
where
    S: Seq,
    F: FnMut(S::Item) -> B,
{
    type Item = B;

    fn drive(self, sink: &mut dyn FnMut(B) -> Flow) -> Flow {
        let Map { seq, mut f } = self;
        seq.drive(&mut |item| sink(f(item)))
    }
}

/// Forwards only the elements matching a predicate.
pub struct Filter<S, P> {
    seq: S,
    predicate: P,
}

/// Create a sequence that keeps the elements of `seq` for which `predicate` holds.
///
/// # Examples
///
/// ```
/// use lockstep::prelude::*;
///
/// let odd: Vec<i32> = filter(vec![1, 2, 3, 4, 5], |n| n % 2 == 1).collect();
/// assert_eq!(odd, vec![1, 3, 5]);
/// ```
pub fn filter<S, P>(seq: S, predicate: P) -> Filter<S, P>
where
    S: Seq,
    P: FnMut(&S::Item) -> bool,
{
    Filter { seq, predicate }
}

impl<S, P> Seq for Filter<S, P>
where
    S: Seq,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn drive(self, sink: &mut dyn FnMut(S::Item) -> Flow) -> Flow {
        let Filter { seq, mut predicate } = self;
        seq.drive(&mut |item| {
            if predicate(&item) {
                sink(item)
            } else {
                Flow::Continue
            }
        })
    }
}

/// Pairs every element with its position.
pub struct Enumerate<S> {
    seq: S,
}

/// Create a key/value sequence of `(index, element)`.
///
/// ```
/// use lockstep::prelude::*;
///
/// let indexed: Vec<(usize, char)> = enumerate(vec!['a', 'b']).collect();
/// assert_eq!(indexed, vec![(0, 'a'), (1, 'b')]);
/// ```
pub fn enumerate<S: Seq>(seq: S) -> Enumerate<S> {
    Enumerate { seq }
}

impl<S: Seq> Seq for Enumerate<S> {
    type Item = (usize, S::Item);

    fn drive(self, sink: &mut dyn FnMut(Self::Item) -> Flow) -> Flow {
        let mut index = 0;
        self.seq.drive(&mut |item| {
            let flow = sink((index, item));
            index += 1;
            flow
        })
    }
}

/// Keys of a key/value sequence.
pub struct Keys<S> {
    seq: S,
}

/// Create a sequence of the keys of a key/value sequence.
///
/// ```
/// use lockstep::prelude::*;
///
/// let names: Vec<&str> = keys(vec![("ada", 36), ("alan", 41)]).collect();
/// assert_eq!(names, vec!["ada", "alan"]);
/// ```
pub fn keys<S, K, V>(seq: S) -> Keys<S>
where
    S: Seq<Item = (K, V)>,
{
    Keys { seq }
}

impl<S, K, V> Seq for Keys<S>
where
    S: Seq<Item = (K, V)>,
{
    type Item = K;

    fn drive(self, sink: &mut dyn FnMut(K) -> Flow) -> Flow {
        self.seq.drive(&mut |(k, _)| sink(k))
    }
}

/// Values of a key/value sequence.
pub struct Values<S> {
    seq: S,
}

/// Create a sequence of the values of a key/value sequence.
pub fn values<S, K, V>(seq: S) -> Values<S>
where
    S: Seq<Item = (K, V)>,
{
    Values { seq }
}

impl<S, K, V> Seq for Values<S>
where
    S: Seq<Item = (K, V)>,
{
    type Item = V;

    fn drive(self, sink: &mut dyn FnMut(V) -> Flow) -> Flow {
        self.seq.drive(&mut |(_, v)| sink(v))
    }
}
