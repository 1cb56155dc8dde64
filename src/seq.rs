//! Core trait for push-style lazy sequences.
//!
//! This module defines the [`Seq`] trait, the building block every other part
//! of the library consumes. A [`Seq`] is a producer that pushes its elements
//! into a sink and stops as soon as the sink answers [`Flow::Break`].
//!
//! # The Seq contract
//!
//! A `Seq` driven with a sink:
//! - invokes the sink with elements in order,
//! - never invokes the sink again after it returned `Break`,
//! - never invokes the sink after running out of elements,
//! - returns `Break` if it was stopped and `Continue` if it was exhausted.
//!
//! `drive` consumes the sequence. Whether a clone replays the same elements
//! is up to each source and is documented on it.
//!
//! # Examples
//!
//! ```rust
//! use lockstep::prelude::*;
//!
//! let evens: Vec<i32> = range_step(0, 10, 1)
//!     .filter(|n| n % 2 == 0)
//!     .map(|n| n * 10)
//!     .collect();
//! assert_eq!(evens, vec![0, 20, 40, 60, 80]);
//! ```

use either::Either;

use crate::{
    compose::{Chain, Enumerate, Filter, Keys, Map, Skip, Take, Values},
    error::PullError,
    flow::Flow,
    pull::Puller,
    zip::{Zip, ZipWith},
};

/// A lazy, possibly infinite producer that pushes elements into a sink.
///
/// ```rust
/// use lockstep::prelude::*;
///
/// let mut seen = Vec::new();
/// let flow = vec![1, 2, 3, 4].drive(&mut |n| {
///     seen.push(n);
///     Flow::from(n < 2)
/// });
/// assert_eq!(seen, vec![1, 2]);
/// assert_eq!(flow, Flow::Break);
/// ```
pub trait Seq {
    /// Type of the elements pushed into the sink
    type Item;

    /// Push elements into `sink` until it breaks or the sequence is exhausted.
    fn drive(self, sink: &mut dyn FnMut(Self::Item) -> Flow) -> Flow;

    /// Erase the concrete type behind a [`BoxSeq`].
    fn boxed<'a>(self) -> BoxSeq<'a, Self::Item>
    where
        Self: Sized + Send + 'a,
    {
        Box::new(self)
    }

    /// Transform each element.
    fn map<B, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> B,
    {
        crate::compose::map(self, f)
    }

    /// Keep only the elements matching `predicate`.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        crate::compose::filter(self, predicate)
    }

    /// Stop after `n` elements.
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        crate::compose::take(self, n)
    }

    /// Drop the first `n` elements.
    fn skip(self, n: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        crate::compose::skip(self, n)
    }

    /// Pair each element with its zero-based position.
    fn enumerate(self) -> Enumerate<Self>
    where
        Self: Sized,
    {
        crate::compose::enumerate(self)
    }

    /// Drive this sequence to exhaustion, then `next`.
    fn chain<R>(self, next: R) -> Chain<Self, R>
    where
        Self: Sized,
        R: Seq<Item = Self::Item>,
    {
        crate::compose::chain(self, next)
    }

    /// Keys of a key/value sequence.
    fn keys<K, V>(self) -> Keys<Self>
    where
        Self: Sized + Seq<Item = (K, V)>,
    {
        crate::compose::keys(self)
    }

    /// Values of a key/value sequence.
    fn values<K, V>(self) -> Values<Self>
    where
        Self: Sized + Seq<Item = (K, V)>,
    {
        crate::compose::values(self)
    }

    /// Pair elements positionally with `other`, see [`zip`](crate::zip()).
    fn zip<B>(self, other: B) -> Zip<Self, B>
    where
        Self: Sized,
        B: Seq,
    {
        crate::zip::zip(self, other)
    }

    /// Combine elements positionally with `other`, see [`zip_with`](crate::zip_with()).
    fn zip_with<B, O, F>(self, other: B, f: F) -> ZipWith<Self, B, F>
    where
        Self: Sized,
        B: Seq,
        F: FnMut(Self::Item, B::Item) -> O,
    {
        crate::zip::zip_with(self, other, f)
    }

    /// Bridge into an owned demand iterator running on its own worker thread.
    ///
    /// For a borrowed, scoped bridge use [`pull`](crate::pull()).
    fn into_puller(self) -> Result<Puller<'static, Self::Item>, PullError>
    where
        Self: Sized + Send + 'static,
        Self::Item: Send + 'static,
    {
        Puller::spawn(self)
    }

    /// Reduce every element into an accumulator.
    fn fold<A, F>(self, init: A, mut f: F) -> A
    where
        Self: Sized,
        F: FnMut(A, Self::Item) -> A,
    {
        let mut acc = Some(init);
        self.drive(&mut |item| {
            acc = acc.take().map(|a| f(a, item));
            Flow::Continue
        });
        match acc {
            Some(acc) => acc,
            None => unreachable!("fold accumulator is restored after every element"),
        }
    }

    /// Call `f` on every element.
    fn for_each<F>(self, mut f: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        self.drive(&mut |item| {
            f(item);
            Flow::Continue
        });
    }

    /// Number of elements.
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.fold(0, |n, _| n + 1)
    }

    /// Last element, if any.
    fn last(self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        let mut last = None;
        self.drive(&mut |item| {
            last = Some(item);
            Flow::Continue
        });
        last
    }

    /// Extend a fresh container with every element.
    fn collect<C>(self) -> C
    where
        Self: Sized,
        C: Default + Extend<Self::Item>,
    {
        let mut out = C::default();
        self.drive(&mut |item| {
            out.extend(Some(item));
            Flow::Continue
        });
        out
    }
}

/// A [`Seq`] of key/value pairs.
///
/// Keyed sequences are ordinary sequences over `(K, V)`; this alias exists so
/// bounds such as `S: Seq2<K, V>` read the way the keyed algorithms are named.
pub trait Seq2<K, V>: Seq<Item = (K, V)> {}

impl<K, V, S> Seq2<K, V> for S where S: Seq<Item = (K, V)> {}

/// Object-safe companion of [`Seq`], used behind [`BoxSeq`].
pub trait DynSeq {
    type Item;

    fn drive_boxed(self: Box<Self>, sink: &mut dyn FnMut(Self::Item) -> Flow) -> Flow;
}

impl<S: Seq> DynSeq for S {
    type Item = S::Item;

    fn drive_boxed(self: Box<Self>, sink: &mut dyn FnMut(Self::Item) -> Flow) -> Flow {
        (*self).drive(sink)
    }
}

/// A type-erased, sendable sequence.
pub type BoxSeq<'a, T> = Box<dyn DynSeq<Item = T> + Send + 'a>;

impl<'a, T> Seq for Box<dyn DynSeq<Item = T> + Send + 'a> {
    type Item = T;

    fn drive(self, sink: &mut dyn FnMut(Self::Item) -> Flow) -> Flow {
        self.drive_boxed(sink)
    }
}

impl<L, R> Seq for Either<L, R>
where
    L: Seq,
    R: Seq<Item = L::Item>,
{
    type Item = L::Item;

    fn drive(self, sink: &mut dyn FnMut(Self::Item) -> Flow) -> Flow {
        match self {
            Either::Left(l) => l.drive(sink),
            Either::Right(r) => r.drive(sink),
        }
    }
}
