//! Demand-driven iteration over push-style sequences.
//!
//! A [`Seq`] keeps control while it runs: it loops and pushes into a sink.
//! Algorithms that walk two sequences side by side, or that want to stop
//! after looking at a few elements, need the opposite. [`Puller`] provides it
//! by parking the producer on its own thread and handing elements across one
//! at a time:
//!
//! - [`fetch`](Puller::fetch) resumes the producer until it yields its next
//!   element (or finishes), then parks it again.
//! - [`release`](Puller::release) answers the parked producer's pending yield
//!   with [`Flow::Break`] and joins its thread, so the producer's own cleanup
//!   has run by the time `release` returns.
//!
//! Producer and consumer never run at the same time; every hand-off goes
//! through a blocking single-slot rendezvous.
//!
//! # Scoped pulling
//!
//! [`pull`] and [`pull_pair`] open pullers for the duration of a closure and
//! release them on every exit path, including early returns and panics.
//! Sequences only need to be `Send`, not `'static`.
//!
//! ```rust
//! use lockstep::prelude::*;
//!
//! let (a, b) = pull(vec![10, 20, 30], |items| (items.fetch(), items.fetch()));
//! assert_eq!((a, b), (Some(10), Some(20)));
//! ```
//!
//! # Owned pulling
//!
//! [`Puller::spawn`] (or [`Seq::into_puller`]) builds a `'static` puller that
//! can be stored and passed around; it is released on drop.
//!
//! ```rust
//! use lockstep::prelude::*;
//!
//! let mut squares = range_step(1_u64, u64::MAX, 1).map(|n| n * n).into_puller()?;
//! assert_eq!(squares.fetch(), Some(1));
//! assert_eq!(squares.by_ref().take(3).collect::<Vec<_>>(), vec![4, 9, 16]);
//! squares.release();
//! assert!(squares.is_released());
//! # Ok::<(), lockstep::PullError>(())
//! ```

mod options;
mod slot;

pub use options::{PullOptions, STACK_SIZE_ENV};

use std::{
    any::Any,
    cell::Cell,
    fmt,
    iter::FusedIterator,
    mem,
    panic::{self, AssertUnwindSafe},
    sync::Arc,
    thread,
};

use tracing::{debug, error, trace};

use crate::{error::PullError, flow::Flow, seq::Seq};
use slot::Slot;

type Payload = Box<dyn Any + Send + 'static>;

/// What the producer hands to the consumer.
enum Event<T> {
    Item(T),
    Exhausted,
    Panicked(Payload),
}

/// The two rendezvous slots between one puller and its producer.
struct Link<T> {
    items: Slot<Event<T>>,
    resume: Slot<Flow>,
}

impl<T> Link<T> {
    fn new() -> Self {
        Self {
            items: Slot::new_empty(),
            resume: Slot::new_empty(),
        }
    }
}

enum Worker<'scope> {
    Scoped(thread::ScopedJoinHandle<'scope, ()>),
    Owned(thread::JoinHandle<()>),
}

impl Worker<'_> {
    fn join(self) -> thread::Result<()> {
        match self {
            Worker::Scoped(handle) => handle.join(),
            Worker::Owned(handle) => handle.join(),
        }
    }
}

/// Body of a producer thread.
///
/// Waits for the first resume before touching the sequence, so a puller
/// released without fetching never runs its producer.
fn produce<S: Seq>(seq: S, link: &Link<S::Item>) {
    if link.resume.take().is_break() {
        trace!("released before first fetch");
        return;
    }

    let stopped = Cell::new(false);
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        seq.drive(&mut |item| {
            if stopped.get() {
                return Flow::Break;
            }
            link.items.put(Event::Item(item));
            let flow = link.resume.take();
            stopped.set(flow.is_break());
            flow
        })
    }));

    match outcome {
        Ok(_) if stopped.get() => trace!("producer stopped by release"),
        Ok(_) => {
            trace!("producer exhausted");
            link.items.put(Event::Exhausted);
        }
        // The consumer is joining us from `release`; the panic reaches it through the join.
        Err(payload) if stopped.get() => panic::resume_unwind(payload),
        Err(payload) => link.items.put(Event::Panicked(payload)),
    }
}

/// Pull-style handle on a push-style [`Seq`].
///
/// Created by [`pull`], [`pull_pair`], [`Puller::spawn_scoped`] or
/// [`Puller::spawn`]. Also an [`Iterator`] over the same elements.
///
/// Once `fetch` has returned `None` it keeps returning `None`; after
/// `release`, `fetch` returns `None` and [`try_fetch`](Puller::try_fetch)
/// reports [`PullError::Released`].
pub struct Puller<'scope, T> {
    state: PullState<'scope, T>,
}

enum PullState<'scope, T> {
    Active {
        link: Arc<Link<T>>,
        worker: Worker<'scope>,
    },
    Exhausted,
    Released,
}

impl<'scope, T: Send + 'scope> Puller<'scope, T> {
    /// Park `seq` on a thread of `scope`.
    ///
    /// The producer does not start until the first [`fetch`](Puller::fetch).
    pub fn spawn_scoped<'env, S>(
        scope: &'scope thread::Scope<'scope, 'env>,
        options: &PullOptions,
        seq: S,
    ) -> Result<Self, PullError>
    where
        S: Seq<Item = T> + Send + 'scope,
    {
        let link = Arc::new(Link::new());
        let handle = {
            let link = Arc::clone(&link);
            options
                .builder()
                .spawn_scoped(scope, move || produce(seq, &link))?
        };
        debug!(thread = options.thread_name(), "spawned scoped producer");
        Ok(Self {
            state: PullState::Active {
                link,
                worker: Worker::Scoped(handle),
            },
        })
    }
}

impl<T: Send + 'static> Puller<'static, T> {
    /// Park `seq` on a detached thread with default options.
    pub fn spawn<S>(seq: S) -> Result<Self, PullError>
    where
        S: Seq<Item = T> + Send + 'static,
    {
        Self::spawn_with(&PullOptions::default(), seq)
    }

    /// Park `seq` on a detached thread configured by `options`.
    pub fn spawn_with<S>(options: &PullOptions, seq: S) -> Result<Self, PullError>
    where
        S: Seq<Item = T> + Send + 'static,
    {
        let link = Arc::new(Link::new());
        let handle = {
            let link = Arc::clone(&link);
            options.builder().spawn(move || produce(seq, &link))?
        };
        debug!(thread = options.thread_name(), "spawned owned producer");
        Ok(Self {
            state: PullState::Active {
                link,
                worker: Worker::Owned(handle),
            },
        })
    }
}

impl<'scope, T> Puller<'scope, T> {
    /// Resume the producer until its next element.
    ///
    /// Returns `None` once the sequence is exhausted, and after
    /// [`release`](Puller::release).
    ///
    /// # Panics
    ///
    /// If the producer panics while producing, the panic is resumed here.
    pub fn fetch(&mut self) -> Option<T> {
        let event = match &self.state {
            PullState::Active { link, .. } => {
                link.resume.put(Flow::Continue);
                link.items.take()
            }
            PullState::Exhausted | PullState::Released => return None,
        };
        match event {
            Event::Item(item) => Some(item),
            Event::Exhausted => {
                self.retire(PullState::Exhausted);
                None
            }
            Event::Panicked(payload) => {
                self.retire(PullState::Released);
                panic::resume_unwind(payload)
            }
        }
    }

    /// Like [`fetch`](Puller::fetch), but reports use after release as an error.
    pub fn try_fetch(&mut self) -> Result<Option<T>, PullError> {
        match self.state {
            PullState::Released => Err(PullError::Released),
            _ => Ok(self.fetch()),
        }
    }

    /// Stop the producer and wait for it to finish.
    ///
    /// Safe to call at any point and any number of times. After the first
    /// call the producer never runs again.
    ///
    /// # Panics
    ///
    /// If the producer panics while being stopped, that panic is resumed
    /// here. When the caller is already unwinding the panic is logged and
    /// dropped instead.
    pub fn release(&mut self) {
        let PullState::Active { link, worker } = mem::replace(&mut self.state, PullState::Released)
        else {
            return;
        };
        link.resume.put(Flow::Break);
        if let Err(payload) = worker.join() {
            if thread::panicking() {
                error!("producer panicked while being released during unwinding");
            } else {
                panic::resume_unwind(payload);
            }
        }
    }

    /// Whether the producer has run out of elements.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.state, PullState::Exhausted)
    }

    /// Whether [`release`](Puller::release) has been called.
    pub fn is_released(&self) -> bool {
        matches!(self.state, PullState::Released)
    }

    /// Swap in a terminal state once the producer has returned on its own.
    fn retire(&mut self, next: PullState<'scope, T>) {
        if let PullState::Active { worker, .. } = mem::replace(&mut self.state, next) {
            if let Err(payload) = worker.join() {
                panic::resume_unwind(payload);
            }
        }
    }
}

impl<T> Drop for Puller<'_, T> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<T> Iterator for Puller<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.fetch()
    }
}

impl<T> FusedIterator for Puller<'_, T> {}

impl<T> fmt::Debug for Puller<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state {
            PullState::Active { .. } => "active",
            PullState::Exhausted => "exhausted",
            PullState::Released => "released",
        };
        f.debug_struct("Puller").field("state", &state).finish()
    }
}

/// Pull from `seq` inside `body`, releasing the producer when `body` returns.
///
/// # Panics
///
/// Panics if the producer thread cannot be spawned; see [`try_pull_with`].
///
/// ```rust
/// use lockstep::prelude::*;
///
/// let firsts = pull(repeat("tick"), |ticks| ticks.take(2).collect::<Vec<_>>());
/// assert_eq!(firsts, vec!["tick", "tick"]);
/// ```
pub fn pull<S, R, F>(seq: S, body: F) -> R
where
    S: Seq + Send,
    S::Item: Send,
    F: FnOnce(&mut Puller<'_, S::Item>) -> R,
{
    pull_with(&PullOptions::default(), seq, body)
}

/// [`pull`] with explicit [`PullOptions`].
pub fn pull_with<S, R, F>(options: &PullOptions, seq: S, body: F) -> R
where
    S: Seq + Send,
    S::Item: Send,
    F: FnOnce(&mut Puller<'_, S::Item>) -> R,
{
    match try_pull_with(options, seq, body) {
        Ok(out) => out,
        Err(err) => panic!("{err}"),
    }
}

/// [`pull_with`] that reports a failed thread spawn instead of panicking.
pub fn try_pull_with<S, R, F>(options: &PullOptions, seq: S, body: F) -> Result<R, PullError>
where
    S: Seq + Send,
    S::Item: Send,
    F: FnOnce(&mut Puller<'_, S::Item>) -> R,
{
    thread::scope(|scope| {
        let mut items = Puller::spawn_scoped(scope, options, seq)?;
        let out = body(&mut items);
        items.release();
        Ok(out)
    })
}

/// Pull from two sequences side by side inside `body`.
///
/// The two producers are independent; `body` decides how to interleave
/// them. Both are released when `body` returns or unwinds.
///
/// # Panics
///
/// Panics if either producer thread cannot be spawned; see
/// [`try_pull_pair_with`].
///
/// ```rust
/// use lockstep::prelude::*;
///
/// let heads = pull_pair(vec![1, 2], vec!['a'], |nums, chars| {
///     (nums.fetch(), chars.fetch(), chars.fetch())
/// });
/// assert_eq!(heads, (Some(1), Some('a'), None));
/// ```
pub fn pull_pair<A, B, R, F>(a: A, b: B, body: F) -> R
where
    A: Seq + Send,
    B: Seq + Send,
    A::Item: Send,
    B::Item: Send,
    F: FnOnce(&mut Puller<'_, A::Item>, &mut Puller<'_, B::Item>) -> R,
{
    match try_pull_pair_with(&PullOptions::default(), a, b, body) {
        Ok(out) => out,
        Err(err) => panic!("{err}"),
    }
}

/// [`pull_pair`] with explicit options, reporting a failed thread spawn.
pub fn try_pull_pair_with<A, B, R, F>(
    options: &PullOptions,
    a: A,
    b: B,
    body: F,
) -> Result<R, PullError>
where
    A: Seq + Send,
    B: Seq + Send,
    A::Item: Send,
    B::Item: Send,
    F: FnOnce(&mut Puller<'_, A::Item>, &mut Puller<'_, B::Item>) -> R,
{
    thread::scope(|scope| {
        let mut left = Puller::spawn_scoped(scope, options, a)?;
        let mut right = Puller::spawn_scoped(scope, options, b)?;
        let out = body(&mut left, &mut right);
        left.release();
        right.release();
        Ok(out)
    })
}
