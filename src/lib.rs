//! # Lockstep: Lazy Sequences with Demand-Driven Traversal
//!
//! Build lazy, push-style sequences, and walk them one element at a time
//! when an algorithm needs to stay in control.
//!
//! ## Core Types
//!
//! - **[`Seq`]**: A producer that pushes elements into a sink until the sink answers [`Flow::Break`]
//! - **[`Seq2`]**: A [`Seq`] of key/value pairs
//! - **[`Puller`]**: A pull-style handle on a running [`Seq`], with `fetch()` and `release()`
//!
//! ## Key Features
//!
//! - **Lazy**: Nothing runs until a sequence is driven, and a producer stops as soon as it is told to
//! - **Paired**: Compare, check equality of, or zip two sequences in lock-step
//! - **Leak-free**: Every puller is released on every exit path, including panics
//!
//! ## Example
//!
//! ```
//! use lockstep::prelude::*;
//! use std::cmp::Ordering;
//!
//! // An infinite producer and a finite one, walked side by side
//! let naturals = range_step(1_u32, u32::MAX, 1);
//! let squares = vec![1, 4, 9, 16];
//!
//! let pairs: Vec<(u32, u32)> = zip(naturals, squares.clone()).collect();
//! assert_eq!(pairs, vec![(1, 1), (2, 4), (3, 9), (4, 16)]);
//!
//! // Decided at the second element; neither side is read any further
//! assert_eq!(compare(repeat(1_u32), squares.clone()), Ordering::Less);
//! assert!(is_sorted(squares.clone()));
//! assert_eq!(max(squares), Some(16));
//! ```
//!
//! ## Common Functions
//!
//! **Building Sequences:**
//! - [`iter(items)`](iter()) - Push the items of any `IntoIterator`
//! - [`from_fn(f)`](from_fn()) - Call `f` until it returns `None`
//! - [`generate(body)`](generate()) - Write the producer loop against the sink directly
//! - [`range_step(start, end, step)`](range_step()) - Integers from `start` towards `end`
//!
//! **Pulling:**
//! - [`pull(seq, body)`](pull()) - Step through one sequence inside `body`
//! - [`pull_pair(a, b, body)`](pull_pair()) - Step through two sequences inside `body`
//!
//! **Algorithms:**
//! - [`compare()`], [`equal`], [`compare2`], [`equal2`] and their `_by` forms
//! - [`zip()`], [`zip_with`], [`zip_with2`]
//! - [`is_sorted`], [`is_sorted_by`]
//! - [`max`], [`max_by`], [`min`], [`min_by`]

pub mod build;
pub mod compose;
pub mod prelude;

mod compare;
mod error;
mod extrema;
mod flow;
mod pull;
mod seq;
mod sorted;
mod zip;

pub use build::*;
pub use compare::*;
pub use error::*;
pub use extrema::*;
pub use flow::*;
pub use pull::*;
pub use seq::*;
pub use sorted::*;
pub use zip::*;
