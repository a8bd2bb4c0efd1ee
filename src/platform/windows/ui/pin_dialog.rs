//! PIN dialog for Windows.
//!
//! A small topmost window with a label, a masked edit box and an accept
//! button. It implements `PinPrompt` by running its own message loop until
//! the button is pressed. Enter in the edit box reaches the button through
//! `IsDialogMessageW`, which is why the button uses the `IDOK` id.

use std::cell::RefCell;

use windows::core::{w, PCWSTR};
use windows::Win32::Foundation::{HINSTANCE, HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::Graphics::Gdi::{GetStockObject, DEFAULT_GUI_FONT, HBRUSH, WHITE_BRUSH};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::Input::KeyboardAndMouse::SetFocus;
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DestroyWindow, DispatchMessageW, GetMessageW,
    GetSystemMetrics, GetWindowTextLengthW, GetWindowTextW, IsDialogMessageW, LoadCursorW,
    RegisterClassW, SendMessageW, SetForegroundWindow, SetWindowTextW, ShowWindow,
    TranslateMessage, CS_HREDRAW, CS_VREDRAW, HMENU, IDC_ARROW, MSG, SM_CXSCREEN, SM_CYSCREEN,
    SW_SHOW, WINDOW_EX_STYLE, WINDOW_STYLE, WM_CLOSE, WM_COMMAND, WM_DESTROY, WM_SETFONT,
    WNDCLASSW, WS_BORDER, WS_CAPTION, WS_CHILD, WS_EX_TOPMOST, WS_OVERLAPPED, WS_TABSTOP,
    WS_VISIBLE,
};
use zeroize::Zeroizing;

use crate::gate::{GateLabel, PinPrompt, Submission};
use crate::tr_key;

// Control IDs
const ID_ACCEPT: i32 = 1; // IDOK
const ID_LABEL: i32 = 101;
const ID_ENTRY: i32 = 102;

// Edit and button styles (from winuser.h)
const ES_PASSWORD: u32 = 0x0020;
const ES_AUTOHSCROLL: u32 = 0x0080;
const BS_DEFPUSHBUTTON: u32 = 0x0001;

// Window dimensions
const WINDOW_WIDTH: i32 = 320;
const WINDOW_HEIGHT: i32 = 170;

// Layout constants
const MARGIN: i32 = 16;
const CONTROL_WIDTH: i32 = WINDOW_WIDTH - 2 * MARGIN - 16;
const BUTTON_WIDTH: i32 = 100;

thread_local! {
    static DIALOG_HWND: RefCell<Option<HWND>> = const { RefCell::new(None) };
    static ENTRY_HWND: RefCell<Option<HWND>> = const { RefCell::new(None) };
    static SUBMITTED: RefCell<Option<Submission>> = const { RefCell::new(None) };
}

/// The authentication window.
pub struct Win32PinDialog {
    hwnd: HWND,
    label: HWND,
    entry: HWND,
    is_spanish: bool,
}

impl Win32PinDialog {
    /// Create the dialog, hidden. The first `request` shows it.
    pub fn open(is_spanish: bool) -> windows::core::Result<Self> {
        unsafe {
            let instance = GetModuleHandleW(None)?;
            let class_name = w!("PinLockGate");

            let wc = WNDCLASSW {
                style: CS_HREDRAW | CS_VREDRAW,
                lpfnWndProc: Some(pin_dialog_wnd_proc),
                hInstance: instance.into(),
                hCursor: LoadCursorW(None, IDC_ARROW)?,
                hbrBackground: HBRUSH(GetStockObject(WHITE_BRUSH).0),
                lpszClassName: class_name,
                ..Default::default()
            };
            RegisterClassW(&wc);

            // Centered on the primary monitor
            let x = (GetSystemMetrics(SM_CXSCREEN) - WINDOW_WIDTH) / 2;
            let y = (GetSystemMetrics(SM_CYSCREEN) - WINDOW_HEIGHT) / 2;

            let title = tr_key("Authentication Required", is_spanish);
            let title_wide: Vec<u16> = title.encode_utf16().chain(std::iter::once(0)).collect();

            // No system menu: the caption has no close button
            let hwnd = CreateWindowExW(
                WS_EX_TOPMOST,
                class_name,
                PCWSTR(title_wide.as_ptr()),
                WS_OVERLAPPED | WS_CAPTION,
                x,
                y,
                WINDOW_WIDTH,
                WINDOW_HEIGHT,
                None,
                None,
                Some(instance.into()),
                None,
            )?;
            DIALOG_HWND.with(|h| *h.borrow_mut() = Some(hwnd));

            let hinstance: HINSTANCE = instance.into();
            let mut y = MARGIN;

            let label = create_control(
                hwnd,
                hinstance,
                w!("STATIC"),
                "",
                WINDOW_STYLE::default(),
                (MARGIN, y, CONTROL_WIDTH, 20),
                ID_LABEL,
            )?;

            y += 28;

            let entry = create_control(
                hwnd,
                hinstance,
                w!("EDIT"),
                "",
                WS_BORDER | WS_TABSTOP | WINDOW_STYLE(ES_PASSWORD | ES_AUTOHSCROLL),
                (MARGIN, y, CONTROL_WIDTH, 24),
                ID_ENTRY,
            )?;
            ENTRY_HWND.with(|h| *h.borrow_mut() = Some(entry));

            y += 36;

            create_control(
                hwnd,
                hinstance,
                w!("BUTTON"),
                &tr_key("Accept", is_spanish),
                WS_TABSTOP | WINDOW_STYLE(BS_DEFPUSHBUTTON),
                (MARGIN + (CONTROL_WIDTH - BUTTON_WIDTH) / 2, y, BUTTON_WIDTH, 28),
                ID_ACCEPT,
            )?;

            Ok(Self {
                hwnd,
                label,
                entry,
                is_spanish,
            })
        }
    }

    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }
}

impl PinPrompt for Win32PinDialog {
    fn request(&mut self, label: GateLabel) -> Submission {
        unsafe {
            let text = label.text(self.is_spanish);
            let text_wide: Vec<u16> = text.encode_utf16().chain(std::iter::once(0)).collect();
            let _ = SetWindowTextW(self.label, PCWSTR(text_wide.as_ptr()));

            let _ = ShowWindow(self.hwnd, SW_SHOW);
            let _ = SetForegroundWindow(self.hwnd);
            let _ = SetFocus(Some(self.entry));

            let mut msg = MSG::default();
            loop {
                if let Some(submission) = SUBMITTED.with(|s| s.borrow_mut().take()) {
                    return submission;
                }
                if DIALOG_HWND.with(|h| h.borrow().is_none()) {
                    return Submission::Closed;
                }
                if !GetMessageW(&mut msg, None, 0, 0).as_bool() {
                    return Submission::Closed;
                }
                if !IsDialogMessageW(self.hwnd, &msg).as_bool() {
                    let _ = TranslateMessage(&msg);
                    DispatchMessageW(&msg);
                }
            }
        }
    }

    fn clear_entry(&mut self) {
        unsafe {
            let _ = SetWindowTextW(self.entry, w!(""));
        }
    }

    fn close(&mut self) {
        // Take the HWND first, releasing the borrow before calling DestroyWindow
        // (DestroyWindow sends WM_DESTROY synchronously which would cause a borrow conflict)
        let hwnd_to_destroy = DIALOG_HWND.with(|h| h.borrow_mut().take());
        ENTRY_HWND.with(|h| *h.borrow_mut() = None);
        SUBMITTED.with(|s| *s.borrow_mut() = None);

        if let Some(hwnd) = hwnd_to_destroy {
            unsafe {
                let _ = DestroyWindow(hwnd);
            }
        }
    }
}

impl Drop for Win32PinDialog {
    fn drop(&mut self) {
        self.close();
    }
}

unsafe extern "system" fn pin_dialog_wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        WM_COMMAND => {
            let control_id = (wparam.0 & 0xFFFF) as i32;
            if control_id == ID_ACCEPT {
                capture_entry();
            }
            LRESULT(0)
        }

        // Only the right PIN closes the dialog
        WM_CLOSE => LRESULT(0),

        WM_DESTROY => {
            DIALOG_HWND.with(|h| h.borrow_mut().take());
            LRESULT(0)
        }

        _ => DefWindowProcW(hwnd, msg, wparam, lparam),
    }
}

/// Copy the edit box contents into `SUBMITTED` for the waiting `request`.
///
/// Text that does not decode as UTF-16 is submitted as `Malformed`.
unsafe fn capture_entry() {
    let Some(entry) = ENTRY_HWND.with(|h| *h.borrow()) else {
        return;
    };

    let len = GetWindowTextLengthW(entry).max(0) as usize;
    let mut buf = Zeroizing::new(vec![0u16; len + 1]);
    let copied = GetWindowTextW(entry, &mut buf[..]).max(0) as usize;
    let submission = Submission::from_utf16(&buf[..copied]);

    SUBMITTED.with(|s| *s.borrow_mut() = Some(submission));
}

unsafe fn create_control(
    hwnd: HWND,
    hinstance: HINSTANCE,
    class: PCWSTR,
    text: &str,
    style: WINDOW_STYLE,
    (x, y, width, height): (i32, i32, i32, i32),
    id: i32,
) -> windows::core::Result<HWND> {
    let text_wide: Vec<u16> = text.encode_utf16().chain(std::iter::once(0)).collect();
    let control = CreateWindowExW(
        WINDOW_EX_STYLE::default(),
        class,
        PCWSTR(text_wide.as_ptr()),
        WS_CHILD | WS_VISIBLE | style,
        x,
        y,
        width,
        height,
        Some(hwnd),
        Some(HMENU(id as *mut _)),
        Some(hinstance),
        None,
    )?;

    let font = GetStockObject(DEFAULT_GUI_FONT);
    SendMessageW(
        control,
        WM_SETFONT,
        Some(WPARAM(font.0 as usize)),
        Some(LPARAM(1)),
    );

    Ok(control)
}
