//! Windows-specific entry point and application logic.
//!
//! Blocks session input, shows the PIN dialog and restores input once the
//! right PIN is entered.

use pinlock::gate::{run_gate, AuthGate, GateOutcome};
use pinlock::lock::InputLock;
use pinlock::platform::windows::storage::load_config;
use pinlock::platform::windows::{CursorGuard, KeyboardGuard, SystemInputBlocker, Win32PinDialog};
use pinlock::tr_key;

/// Main entry point for Windows.
pub fn run() {
    match run_app() {
        Ok((GateOutcome::Unlocked, is_spanish)) => {
            println!("{}", tr_key("Access granted", is_spanish));
        }
        Ok((GateOutcome::Abandoned, _)) => {
            eprintln!("PinLock: dialog closed while input is locked");
        }
        Err(e) => {
            eprintln!("PinLock error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_app() -> windows::core::Result<(GateOutcome, bool)> {
    let config = load_config();
    let is_spanish = config.is_spanish();

    // Create the dialog before blocking, so a failure here leaves input alone
    let mut dialog = Win32PinDialog::open(is_spanish)?;

    let mut lock = InputLock::engage(SystemInputBlocker);

    // Guards are best effort: input is already blocked, so do not bail out
    let _keyboard = if config.block_system_keys {
        KeyboardGuard::install()
            .map_err(|e| eprintln!("Keyboard hook not installed: {}", e))
            .ok()
    } else {
        None
    };
    let _cursor = if config.confine_cursor {
        CursorGuard::confine(dialog.hwnd())
            .map_err(|e| eprintln!("Cursor clip not applied: {}", e))
            .ok()
    } else {
        None
    };

    let mut gate = AuthGate::new(config.credential());
    let outcome = run_gate(&mut gate, &mut lock, &mut dialog);

    Ok((outcome, is_spanish))
}
