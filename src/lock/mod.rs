//! Session-wide input lock.
//!
//! The platform layer supplies the `InputBlocker`; everything here is pure
//! Rust so the state machine can be tested with a recording fake.

pub mod controller;

pub use controller::{InputBlocker, InputLock};
