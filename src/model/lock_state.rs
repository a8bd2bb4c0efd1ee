//! Input lock state (pure Rust, no FFI).

/// Whether keyboard and mouse input is currently blocked for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputLockState {
    /// Input is suppressed system-wide.
    Locked,
    /// Input has been restored. Terminal.
    Unlocked,
}

impl InputLockState {
    /// Returns true while input is blocked.
    pub fn is_locked(self) -> bool {
        self == InputLockState::Locked
    }
}
