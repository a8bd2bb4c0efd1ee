//! Platform-specific implementations.
//!
//! Only Windows can block session input, so this is the only backend.
//! It provides:
//! - The `InputBlocker` over `BlockInput`
//! - The PIN dialog (Win32 controls)
//! - Keyboard hook and cursor clip guards
//! - Config file loading

#[cfg(target_os = "windows")]
pub mod windows;
