//! Value-backed sources.
//!
//! Every source here is pure: cloning it and driving the clone replays the
//! same elements.

use crate::{flow::Flow, seq::Seq};

/// Pushes the items of a standard iterator.
///
/// Pure when the wrapped iterator is `Clone`.
#[derive(Debug, Clone)]
pub struct Iter<I>(I);

/// Create a sequence from anything iterable.
///
/// ```rust
/// use lockstep::prelude::*;
///
/// let letters: String = iter("abc".chars()).map(|c| c.to_ascii_uppercase()).collect();
/// assert_eq!(letters, "ABC");
/// ```
pub fn iter<I: IntoIterator>(items: I) -> Iter<I::IntoIter> {
    Iter(items.into_iter())
}

impl<I: Iterator> Seq for Iter<I> {
    type Item = I::Item;

    fn drive(self, sink: &mut dyn FnMut(I::Item) -> Flow) -> Flow {
        for item in self.0 {
            if sink(item).is_break() {
                return Flow::Break;
            }
        }
        Flow::Continue
    }
}

impl<T> Seq for Vec<T> {
    type Item = T;

    fn drive(self, sink: &mut dyn FnMut(T) -> Flow) -> Flow {
        iter(self).drive(sink)
    }
}

impl<T, const N: usize> Seq for [T; N] {
    type Item = T;

    fn drive(self, sink: &mut dyn FnMut(T) -> Flow) -> Flow {
        iter(self).drive(sink)
    }
}

/// A sequence of exactly one element.
#[derive(Debug, Clone)]
pub struct Once<T>(T);

/// Create a sequence containing only `item`.
pub fn once<T>(item: T) -> Once<T> {
    Once(item)
}

impl<T> Seq for Once<T> {
    type Item = T;

    fn drive(self, sink: &mut dyn FnMut(T) -> Flow) -> Flow {
        sink(self.0)
    }
}

/// A sequence with no elements.
#[derive(Debug, Clone, Copy)]
pub struct Empty<T>(std::marker::PhantomData<fn() -> T>);

/// Create an empty sequence.
pub fn empty<T>() -> Empty<T> {
    Empty(std::marker::PhantomData)
}

impl<T> Seq for Empty<T> {
    type Item = T;

    fn drive(self, _sink: &mut dyn FnMut(T) -> Flow) -> Flow {
        Flow::Continue
    }
}

/// Repeats one element forever.
#[derive(Debug, Clone)]
pub struct Repeat<T>(T);

/// Create an infinite sequence of clones of `item`.
///
/// Only a sink that eventually breaks will ever return from driving it.
///
/// ```rust
/// use lockstep::prelude::*;
///
/// assert_eq!(repeat('z').take(2).collect::<String>(), "zz");
/// ```
pub fn repeat<T: Clone>(item: T) -> Repeat<T> {
    Repeat(item)
}

impl<T: Clone> Seq for Repeat<T> {
    type Item = T;

    fn drive(self, sink: &mut dyn FnMut(T) -> Flow) -> Flow {
        loop {
            if sink(self.0.clone()).is_break() {
                return Flow::Break;
            }
        }
    }
}

/// Integers a [`RangeStep`] can walk over.
pub trait Stride: Copy + Ord {
    const ZERO: Self;

    /// `self + step`, or `None` on overflow.
    fn checked_step(self, step: Self) -> Option<Self>;
}

macro_rules! impl_stride {
    ($($t:ty),* $(,)?) => {
        $(
            impl Stride for $t {
                const ZERO: Self = 0;

                #[inline]
                fn checked_step(self, step: Self) -> Option<Self> {
                    self.checked_add(step)
                }
            }
        )*
    };
}

impl_stride!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Walks from `start` towards `end` (excluded) by `step`.
#[derive(Debug, Clone, Copy)]
pub struct RangeStep<N> {
    start: N,
    end: N,
    step: N,
}

/// Create an integer sequence from `start` to `end` (excluded) moving by `step`.
///
/// A positive step counts up, a negative step counts down. A zero step, or a
/// step pointing away from `end`, yields nothing. The sequence also ends if
/// the next value would overflow.
///
/// ```rust
/// use lockstep::prelude::*;
///
/// assert_eq!(range_step(0, 10, 3).collect::<Vec<_>>(), vec![0, 3, 6, 9]);
/// assert_eq!(range_step(5, 0, -2).collect::<Vec<_>>(), vec![5, 3, 1]);
/// assert_eq!(range_step(0, 5, 0).count(), 0);
/// ```
pub fn range_step<N: Stride>(start: N, end: N, step: N) -> RangeStep<N> {
    RangeStep { start, end, step }
}

impl<N: Stride> Seq for RangeStep<N> {
    type Item = N;

    fn drive(self, sink: &mut dyn FnMut(N) -> Flow) -> Flow {
        let ascending = self.step > N::ZERO;
        if self.step == N::ZERO {
            return Flow::Continue;
        }
        let mut current = self.start;
        while (ascending && current < self.end) || (!ascending && current > self.end) {
            if sink(current).is_break() {
                return Flow::Break;
            }
            match current.checked_step(self.step) {
                Some(next) => current = next,
                None => break,
            }
        }
        Flow::Continue
    }
}
