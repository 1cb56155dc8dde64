//! Forwarding sequences through one another
//!
//! This module provides single-pass relays: each wraps one upstream sequence
//! (two for [`chain`]) and never needs to pause it.

mod chain;
mod map;
mod take;

// Re-export composition operations
pub use chain::{chain, Chain};
pub use map::{enumerate, filter, keys, map, values, Enumerate, Filter, Keys, Map, Values};
pub use take::{skip, take, Skip, Take};
