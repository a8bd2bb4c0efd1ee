//! Input lock controller.
//!
//! Owns the session's `InputLockState` and forwards block/unblock requests
//! to an `InputBlocker`. `unlock()` is the only way out of `Locked`.

use crate::model::InputLockState;

/// OS capability that suppresses keyboard and mouse input for the session.
///
/// Requests are fire-and-forget: an implementation that lacks the
/// privilege simply has no effect.
pub trait InputBlocker {
    fn set_blocked(&mut self, blocked: bool);
}

impl<B: InputBlocker + ?Sized> InputBlocker for &mut B {
    fn set_blocked(&mut self, blocked: bool) {
        (**self).set_blocked(blocked);
    }
}

/// Single owner of the session lock.
///
/// Dropping an engaged lock leaves input blocked.
pub struct InputLock<B: InputBlocker> {
    blocker: B,
    state: InputLockState,
}

impl<B: InputBlocker> InputLock<B> {
    /// Block input and return the lock in the `Locked` state.
    pub fn engage(blocker: B) -> Self {
        let mut lock = Self {
            blocker,
            state: InputLockState::Locked,
        };
        lock.blocker.set_blocked(true);
        lock
    }

    /// Re-assert the block. Has no effect once unlocked.
    pub fn lock(&mut self) {
        if self.state.is_locked() {
            self.blocker.set_blocked(true);
        }
    }

    /// Restore input. Only the first call reaches the OS.
    pub fn unlock(&mut self) {
        if self.state.is_locked() {
            self.state = InputLockState::Unlocked;
            self.blocker.set_blocked(false);
        }
    }

    pub fn state(&self) -> InputLockState {
        self.state
    }

    pub fn is_locked(&self) -> bool {
        self.state.is_locked()
    }

    pub fn blocker(&self) -> &B {
        &self.blocker
    }
}
