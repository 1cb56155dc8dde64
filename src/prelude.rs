//! Commonly used imports
//!
//! Use `use lockstep::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{BoxSeq, Flow, PullError, PullOptions, Puller, Seq, Seq2};

// Sources
pub use crate::build::{empty, from_fn, generate, iter, once, range_step, repeat};

// Forwarding combinators
pub use crate::compose::{chain, enumerate, filter, keys, map, skip, take, values};

// Pulling
pub use crate::{pull, pull_pair, pull_with, try_pull_with};

// Paired traversal
pub use crate::{compare, compare2, compare_by, compare_by2, equal, equal2, equal_by, equal_by2};
pub use crate::{zip, zip_with, zip_with2};

// Scans and reducers
pub use crate::{is_sorted, is_sorted_by, max, max_by, min, min_by};
