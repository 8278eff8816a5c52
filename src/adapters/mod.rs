//! Adapter implementations of the port traits.
//!
//! - `live`: real disk and `git` access.
//! - `recording`: wraps another adapter and captures every call to a cassette.
//! - `replaying`: serves calls back from a recorded cassette.

pub mod live;
pub mod recording;
pub mod replaying;
