//! Keeps the pointer inside the PIN dialog.

use windows::Win32::Foundation::{HWND, RECT};
use windows::Win32::UI::WindowsAndMessaging::{ClipCursor, GetWindowRect};

use crate::model::{inset_bounds, CURSOR_CLIP_PADDING};

/// Active cursor clip. Released on drop.
pub struct CursorGuard {
    _private: (),
}

impl CursorGuard {
    /// Clip the cursor to the window rectangle of `hwnd`, minus padding.
    pub fn confine(hwnd: HWND) -> windows::core::Result<Self> {
        unsafe {
            let mut rect = RECT::default();
            GetWindowRect(hwnd, &mut rect)?;

            let (left, top, right, bottom) = inset_bounds(
                (rect.left, rect.top, rect.right, rect.bottom),
                CURSOR_CLIP_PADDING,
            );
            let clip = RECT {
                left,
                top,
                right,
                bottom,
            };
            ClipCursor(Some(&clip as *const RECT))?;
        }
        Ok(Self { _private: () })
    }
}

impl Drop for CursorGuard {
    fn drop(&mut self) {
        unsafe {
            let _ = ClipCursor(None);
        }
    }
}
