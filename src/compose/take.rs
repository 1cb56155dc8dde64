//! Positional truncation: [`Take`] and [`Skip`].

use crate::{flow::Flow, seq::Seq};

/// Yields at most `n` elements, then stops its upstream.
pub struct Take<S> {
    seq: S,
    n: usize,
}

/// Create a sequence of the first `n` elements of `seq`.
///
/// The upstream is stopped right after the `n`th element is delivered, so an
/// infinite source is never asked for element `n + 1`. `take(seq, 0)` does not
/// drive `seq` at all.
///
/// # Examples
///
/// ```
/// use lockstep::prelude::*;
///
/// let first: Vec<i32> = take(repeat(7), 3).collect();
/// assert_eq!(first, vec![7, 7, 7]);
/// ```
pub fn take<S: Seq>(seq: S, n: usize) -> Take<S> {
    Take { seq, n }
}

impl<S: Seq> Seq for Take<S> {
    type Item = S::Item;

    fn drive(self, sink: &mut dyn FnMut(S::Item) -> Flow) -> Flow {
        let mut remaining = self.n;
        if remaining == 0 {
            return Flow::Continue;
        }
        let mut stopped = false;
        self.seq.drive(&mut |item| {
            remaining -= 1;
            if sink(item).is_break() {
                stopped = true;
                return Flow::Break;
            }
            Flow::from(remaining > 0)
        });
        Flow::from(!stopped)
    }
}

/// Drops the first `n` elements.
pub struct Skip<S> {
    seq: S,
    n: usize,
}

/// Create a sequence that skips the first `n` elements of `seq`.
///
/// ```
/// use lockstep::prelude::*;
///
/// let rest: Vec<i32> = skip(vec![0, 1, 2, 3, 4], 2).collect();
/// assert_eq!(rest, vec![2, 3, 4]);
/// ```
pub fn skip<S: Seq>(seq: S, n: usize) -> Skip<S> {
    Skip { seq, n }
}

impl<S: Seq> Seq for Skip<S> {
    type Item = S::Item;

    fn drive(self, sink: &mut dyn FnMut(S::Item) -> Flow) -> Flow {
        let mut to_skip = self.n;
        self.seq.drive(&mut |item| {
            if to_skip > 0 {
                to_skip -= 1;
                return Flow::Continue;
            }
            sink(item)
        })
    }
}
