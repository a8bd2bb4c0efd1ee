//! FFI bindings for Windows APIs.
//!
//! This module encapsulates the session-wide input block (`BlockInput`)
//! behind the `InputBlocker` trait.

mod block_input;

pub use block_input::SystemInputBlocker;
