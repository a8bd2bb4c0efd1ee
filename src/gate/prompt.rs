//! Modal request/response dialog driving the gate.
//!
//! The caller blocks in `PinPrompt::request` until the user submits or the
//! dialog goes away; there is no concurrency involved.

use zeroize::Zeroizing;

use super::state::{AuthGate, GateLabel, Verdict};
use crate::lock::{InputBlocker, InputLock};

/// What the dialog returned.
#[derive(Debug)]
pub enum Submission {
    /// Text typed into the masked field. Wiped on drop.
    Pin(Zeroizing<String>),
    /// The field held text that is not valid UTF-16. Never matches.
    Malformed,
    /// The dialog was destroyed without a submission.
    Closed,
}

impl Submission {
    /// Decode the raw contents of an edit control.
    ///
    /// Lone surrogates are not replaced: two different malformed entries
    /// must not collapse into the same string before comparison.
    pub fn from_utf16(units: &[u16]) -> Self {
        match String::from_utf16(units) {
            Ok(text) => Submission::Pin(Zeroizing::new(text)),
            Err(_) => Submission::Malformed,
        }
    }
}

/// Synchronous PIN dialog.
pub trait PinPrompt {
    /// Show `label` and wait for the next submission.
    fn request(&mut self, label: GateLabel) -> Submission;

    /// Empty the entry field after a rejected submission.
    fn clear_entry(&mut self);

    /// Dismiss the dialog for good.
    fn close(&mut self);
}

/// How a gate session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// Correct PIN entered, input restored, dialog closed.
    Unlocked,
    /// Dialog vanished first. Input stays blocked.
    Abandoned,
}

/// Ask for the PIN until it matches or the dialog is gone.
pub fn run_gate<B, P>(gate: &mut AuthGate, lock: &mut InputLock<B>, prompt: &mut P) -> GateOutcome
where
    B: InputBlocker,
    P: PinPrompt + ?Sized,
{
    loop {
        let verdict = match prompt.request(gate.label()) {
            Submission::Closed => return GateOutcome::Abandoned,
            Submission::Malformed => gate.reject(),
            Submission::Pin(pin) => gate.submit(&pin),
        };

        match verdict {
            Verdict::Granted => {
                lock.unlock();
                prompt.close();
                return GateOutcome::Unlocked;
            }
            Verdict::Denied => prompt.clear_entry(),
        }
    }
}
