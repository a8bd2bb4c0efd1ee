//! Which keystrokes the keyboard guard swallows.

use super::constants::{VK_F4, VK_LWIN, VK_RWIN};

/// Returns true for key-down events that would let the user leave the
/// dialog: either Windows key, or F4 while Alt is held.
pub fn should_suppress_key(vk: u32, alt_down: bool) -> bool {
    match vk {
        VK_LWIN | VK_RWIN => true,
        VK_F4 => alt_down,
        _ => false,
    }
}
