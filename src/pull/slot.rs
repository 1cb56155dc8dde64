//! Blocking single-slot cell.
//!
//! A `Slot<T>` is either empty or full. `put` waits until it is empty, then
//! fills it; `take` waits until it is full, then empties it. A puller and its
//! producer thread talk through two of these, so each hand-off is a
//! rendezvous and only one side runs at a time.
//!
//! Design notes
//! - State is `Option<T>` inside a `Mutex`.
//! - Two `Condvar`s model "became non-empty" and "became non-full".
//! - No caller code runs while the lock is held, so a poisoned lock still
//!   guards a consistent `Option` and is recovered rather than propagated.

use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

pub(crate) struct Slot<T> {
    inner: Mutex<Option<T>>, // None = empty, Some(t) = full
    not_empty: Condvar,      // signalled when we transition to full
    not_full: Condvar,       // signalled when we transition to empty
}

impl<T> Slot<T> {
    pub(crate) fn new_empty() -> Self {
        Self {
            inner: Mutex::new(None),
            not_empty: Condvar::new(),
            not_full: Condvar::new(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Put a value into the slot, waiting until it becomes empty.
    pub(crate) fn put(&self, value: T) {
        let mut guard = self.lock();
        while guard.is_some() {
            guard = self
                .not_full
                .wait(guard)
                .unwrap_or_else(PoisonError::into_inner);
        }
        *guard = Some(value);
        drop(guard);
        self.not_empty.notify_one();
    }

    /// Take the value out of the slot, waiting until it becomes full.
    pub(crate) fn take(&self) -> T {
        let mut guard = self.lock();
        loop {
            if let Some(v) = guard.take() {
                drop(guard);
                self.not_full.notify_one();
                return v;
            }
            guard = self
                .not_empty
                .wait(guard)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread};

    use super::*;

    #[test]
    fn put_take_roundtrip_across_threads() {
        let slot = Arc::new(Slot::new_empty());

        let producer = {
            let slot = Arc::clone(&slot);
            thread::spawn(move || {
                slot.put(42);
                slot.put(7);
            })
        };

        let a = slot.take();
        let b = slot.take();
        producer.join().unwrap();

        assert_eq!((a, b), (42, 7));
    }

    #[test]
    fn put_waits_for_take() {
        let slot = Arc::new(Slot::new_empty());
        slot.put(1);

        let producer = {
            let slot = Arc::clone(&slot);
            thread::spawn(move || slot.put(2))
        };

        assert_eq!(slot.take(), 1);
        producer.join().unwrap();
        assert_eq!(slot.take(), 2);
    }

    #[test]
    fn take_waits_for_put() {
        let slot: Arc<Slot<&str>> = Arc::new(Slot::new_empty());

        let consumer = {
            let slot = Arc::clone(&slot);
            thread::spawn(move || slot.take())
        };

        thread::sleep(std::time::Duration::from_millis(20));
        assert!(!consumer.is_finished());
        slot.put("full");
        assert_eq!(consumer.join().unwrap(), "full");
    }
}
