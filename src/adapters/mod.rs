//! Implementations of the port traits.
//!
//! - `live`: real network I/O.
//! - `recording`: wraps another adapter and persists what it sees.
//! - `replaying`: serves persisted interactions.

pub mod live;
pub mod recording;
pub mod replaying;
