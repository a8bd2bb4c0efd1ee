//! `BlockInput` wrapper.

use windows::Win32::UI::Input::KeyboardAndMouse::BlockInput;

use crate::lock::InputBlocker;

/// Blocks keyboard and mouse input for the whole interactive session.
///
/// Requires an elevated process. Without the privilege the call fails and
/// input simply stays live; the failure is only reported on stderr.
#[derive(Debug, Default)]
pub struct SystemInputBlocker;

impl InputBlocker for SystemInputBlocker {
    fn set_blocked(&mut self, blocked: bool) {
        unsafe {
            if let Err(e) = BlockInput(blocked) {
                eprintln!("BlockInput({}) failed: {}", blocked, e);
            }
        }
    }
}
