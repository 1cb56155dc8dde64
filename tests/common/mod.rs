#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use lockstep::{Flow, Seq};
use tracing_subscriber::EnvFilter;

/// Route library logs to the test harness; `RUST_LOG=lockstep=trace` to see them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Debug, Default)]
pub struct Counters {
    drives: AtomicUsize,
    deliveries: AtomicUsize,
    stops: AtomicUsize,
    cleanups: AtomicUsize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    /// Times the producer loop was entered.
    pub drives: usize,
    /// Elements handed to the sink.
    pub deliveries: usize,
    /// Times the sink answered `Break`.
    pub stops: usize,
    /// Times the producer's scoped resource was dropped.
    pub cleanups: usize,
}

impl Counters {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            drives: self.drives.load(Ordering::SeqCst),
            deliveries: self.deliveries.load(Ordering::SeqCst),
            stops: self.stops.load(Ordering::SeqCst),
            cleanups: self.cleanups.load(Ordering::SeqCst),
        }
    }
}

struct Cleanup<'a>(&'a Counters);

impl Drop for Cleanup<'_> {
    fn drop(&mut self) {
        self.0.cleanups.fetch_add(1, Ordering::SeqCst);
    }
}

/// A finite sequence that records how it was driven.
pub struct Probe<T> {
    items: Vec<T>,
    counters: Arc<Counters>,
}

impl<T> Probe<T> {
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: items.into_iter().collect(),
            counters: Arc::default(),
        }
    }

    pub fn counters(&self) -> Arc<Counters> {
        Arc::clone(&self.counters)
    }
}

impl<T> Seq for Probe<T> {
    type Item = T;

    fn drive(self, sink: &mut dyn FnMut(T) -> Flow) -> Flow {
        let Probe { items, counters } = self;
        counters.drives.fetch_add(1, Ordering::SeqCst);
        let _cleanup = Cleanup(&counters);
        for item in items {
            counters.deliveries.fetch_add(1, Ordering::SeqCst);
            if sink(item).is_break() {
                counters.stops.fetch_add(1, Ordering::SeqCst);
                return Flow::Break;
            }
        }
        Flow::Continue
    }
}

pub fn snapshot(drives: usize, deliveries: usize, stops: usize, cleanups: usize) -> Snapshot {
    Snapshot {
        drives,
        deliveries,
        stops,
        cleanups,
    }
}
