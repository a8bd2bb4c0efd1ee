//! Windows-specific implementation using the Win32 API.
//!
//! This module contains all Windows-specific code:
//! - FFI bindings (`BlockInput` behind `InputBlocker`)
//! - UI components (the PIN dialog)
//! - Input guards (keyboard hook, cursor clip)
//! - Storage (JSON config file loading)

pub mod ffi;
pub mod input;
pub mod storage;
pub mod ui;

// Re-export commonly used items
pub use ffi::SystemInputBlocker;
pub use input::{CursorGuard, KeyboardGuard};
pub use storage::*;
pub use ui::*;
