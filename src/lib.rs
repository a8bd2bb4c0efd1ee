//! Workstation input lock released by a PIN.
//!
//! Pure logic lives in `model`, `lock` and `gate` and builds on every
//! platform so tests can run as normal integration tests. The Win32 side
//! (BlockInput, the dialog, the guards) is under `platform::windows`.

pub mod gate;
pub mod lock;
pub mod model;
pub mod platform;

use std::borrow::Cow;

// Re-export the types `main` wires together
pub use gate::{run_gate, AuthGate, GateOutcome, PinPrompt};
pub use lock::{InputBlocker, InputLock};
pub use model::{Config, Credential, InputLockState};

/// Very small localisation helper used by the dialog and the console line.
pub fn tr_key(key: &str, es: bool) -> Cow<'static, str> {
    match (key, es) {
        ("Authentication Required", true) => Cow::Borrowed("Autenticación Requerida"),
        ("Authentication Required", false) => Cow::Borrowed("Authentication Required"),

        ("Enter PIN:", true) => Cow::Borrowed("Ingrese el PIN:"),
        ("Enter PIN:", false) => Cow::Borrowed("Enter PIN:"),

        ("Incorrect PIN. Try again.", true) => {
            Cow::Borrowed("PIN incorrecto. Intente nuevamente.")
        }
        ("Incorrect PIN. Try again.", false) => Cow::Borrowed("Incorrect PIN. Try again."),

        ("Accept", true) => Cow::Borrowed("Aceptar"),
        ("Accept", false) => Cow::Borrowed("Accept"),

        ("Access granted", true) => Cow::Borrowed("Acceso concedido"),
        ("Access granted", false) => Cow::Borrowed("Access granted"),

        _ => Cow::Owned(key.to_string()),
    }
}
