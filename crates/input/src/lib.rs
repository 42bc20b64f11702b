//! Terminal input module.
//!
//! The shell reacts to exactly three things: a left click (delivered to the
//! button under it), quit keys, and terminal resizes. Everything else is
//! ignored.

pub mod map;

pub use map::{map_event, should_quit, ShellInput};
