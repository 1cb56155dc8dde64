//! Operational failures of the pull bridge.
//!
//! The algorithms themselves have no error type: an empty input is reported
//! through their return value and a panicking comparator propagates as a
//! panic. `PullError` only covers what can go wrong while setting up or
//! misusing a [`Puller`](crate::Puller).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PullError {
    /// `try_fetch` was called after `release`.
    #[error("demand iterator fetched after release")]
    Released,

    /// The operating system refused to start the producer thread.
    #[error("failed to spawn producer thread: {0}")]
    Spawn(#[from] std::io::Error),

    /// An environment variable held something other than a byte count.
    #[error("invalid {var} value {value:?}: expected a stack size in bytes")]
    InvalidStackSize { var: &'static str, value: String },
}
