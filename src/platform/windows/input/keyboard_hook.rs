//! Low-level keyboard hook swallowing the keys that leave the dialog.

use std::sync::atomic::{AtomicIsize, Ordering};

use windows::Win32::Foundation::{LPARAM, LRESULT, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    CallNextHookEx, SetWindowsHookExW, UnhookWindowsHookEx, HHOOK, KBDLLHOOKSTRUCT, LLKHF_ALTDOWN,
    WH_KEYBOARD_LL, WM_KEYDOWN, WM_SYSKEYDOWN,
};

use crate::model::should_suppress_key;

/// Global keyboard hook handle (must be static for the hook callback).
static KEYBOARD_HOOK: AtomicIsize = AtomicIsize::new(0);

/// Installed hook. Removed on drop.
///
/// The hook only fires while the installing thread pumps messages, which
/// the PIN dialog does for as long as it is open.
pub struct KeyboardGuard {
    hook: HHOOK,
}

impl KeyboardGuard {
    pub fn install() -> windows::core::Result<Self> {
        let hook = unsafe { SetWindowsHookExW(WH_KEYBOARD_LL, Some(keyboard_hook_proc), None, 0)? };
        KEYBOARD_HOOK.store(hook.0 as isize, Ordering::SeqCst);
        Ok(Self { hook })
    }
}

impl Drop for KeyboardGuard {
    fn drop(&mut self) {
        KEYBOARD_HOOK.store(0, Ordering::SeqCst);
        unsafe {
            let _ = UnhookWindowsHookEx(self.hook);
        }
    }
}

extern "system" fn keyboard_hook_proc(ncode: i32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    unsafe {
        if ncode >= 0 {
            let msg = wparam.0 as u32;
            if msg == WM_KEYDOWN || msg == WM_SYSKEYDOWN {
                let kb = &*(lparam.0 as *const KBDLLHOOKSTRUCT);
                let alt_down = (kb.flags.0 & LLKHF_ALTDOWN.0) != 0;
                if should_suppress_key(kb.vkCode, alt_down) {
                    return LRESULT(1);
                }
            }
        }

        let hook = KEYBOARD_HOOK.load(Ordering::SeqCst);
        CallNextHookEx(Some(HHOOK(hook as *mut _)), ncode, wparam, lparam)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hook_handle_is_set_while_guard_lives() {
        let guard = KeyboardGuard::install().expect("install hook");
        assert_eq!(KEYBOARD_HOOK.load(Ordering::SeqCst), guard.hook.0 as isize);
        assert_ne!(KEYBOARD_HOOK.load(Ordering::SeqCst), 0);
        drop(guard);
        assert_eq!(KEYBOARD_HOOK.load(Ordering::SeqCst), 0);
    }
}
