use std::marker::PhantomData;

use crate::{flow::Flow, seq::Seq};

/// Pulls elements out of a closure until it returns `None`.
///
/// Stateful: the closure is consumed by the first `drive`.
pub struct FromFn<F>(F);

/// Create a sequence from a closure returning the next element.
///
/// ```rust
/// use lockstep::prelude::*;
///
/// let mut n = 0;
/// let counter = from_fn(move || {
///     n += 1;
///     (n <= 3).then_some(n)
/// });
/// assert_eq!(counter.collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    FromFn(f)
}

impl<T, F> Seq for FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    type Item = T;

    fn drive(mut self, sink: &mut dyn FnMut(T) -> Flow) -> Flow {
        while let Some(item) = (self.0)() {
            if sink(item).is_break() {
                return Flow::Break;
            }
        }
        Flow::Continue
    }
}

/// A producer written directly against the sink.
///
/// Created via [`generate`]. The body may hold resources across yields;
/// whatever it owns is dropped when it returns, including when a
/// [`Puller`](crate::Puller) releases it early.
pub struct Generate<T, F>(F, PhantomData<fn(T)>);

/// Create a sequence from a closure that pushes into the sink itself.
///
/// The body receives the sink and should return as soon as the sink answers
/// [`Flow::Break`]. The adapter tracks the sink's answers, so the body does
/// not have to report how it finished.
///
/// ```rust
/// use lockstep::prelude::*;
///
/// let squares = generate(|sink: &mut dyn FnMut(u64) -> Flow| {
///     for n in 1.. {
///         if sink(n * n).is_break() {
///             return;
///         }
///     }
/// });
/// assert_eq!(squares.take(4).collect::<Vec<_>>(), vec![1, 4, 9, 16]);
/// ```
pub fn generate<T, F>(body: F) -> Generate<T, F>
where
    F: FnOnce(&mut dyn FnMut(T) -> Flow),
{
    Generate(body, PhantomData)
}

impl<T, F> Seq for Generate<T, F>
where
    F: FnOnce(&mut dyn FnMut(T) -> Flow),
{
    type Item = T;

    fn drive(self, sink: &mut dyn FnMut(T) -> Flow) -> Flow {
        let mut flow = Flow::Continue;
        (self.0)(&mut |item| {
            if flow.is_break() {
                // body ignored a previous Break
                return Flow::Break;
            }
            flow = sink(item);
            flow
        });
        flow
    }
}
