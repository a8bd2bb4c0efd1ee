//! UI components for Windows.

pub mod pin_dialog;

pub use pin_dialog::Win32PinDialog;
