use crate::{flow::Flow, seq::Seq};

/// Run the first sequence to exhaustion, then the second.
///
/// The second sequence is never driven if the sink broke during the first.
///
/// ```rust
/// use lockstep::prelude::*;
///
/// let all: Vec<i32> = chain(vec![1, 2], once(3)).collect();
/// assert_eq!(all, vec![1, 2, 3]);
/// ```
pub fn chain<L, R>(first: L, second: R) -> Chain<L, R>
where
    L: Seq,
    R: Seq<Item = L::Item>,
{
    Chain { first, second }
}

/// Concatenates two sequences.
///
/// Created via [`chain()`] or [`Seq::chain`].
pub struct Chain<L, R> {
    first: L,
    second: R,
}

impl<L, R> Seq for Chain<L, R>
where
    L: Seq,
    R: Seq<Item = L::Item>,
{
    type Item = L::Item;

    fn drive(self, sink: &mut dyn FnMut(Self::Item) -> Flow) -> Flow {
        if self.first.drive(sink).is_break() {
            return Flow::Break;
        }
        self.second.drive(sink)
    }
}
