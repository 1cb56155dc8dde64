//! Building sequences from scratch
//!
//! This module provides the sources every pipeline starts from: closures,
//! iterators, single values and integer ranges.

mod func;
mod source;

// Re-export building blocks
pub use func::{from_fn, generate, FromFn, Generate};
pub use source::{empty, iter, once, range_step, repeat, Empty, Iter, Once, RangeStep, Repeat, Stride};
