//! Input guards held while the PIN dialog is open.

mod cursor_guard;
mod keyboard_hook;

pub use cursor_guard::CursorGuard;
pub use keyboard_hook::KeyboardGuard;
