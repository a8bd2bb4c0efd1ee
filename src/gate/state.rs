//! Authentication gate state machine.
//!
//! ```text
//! AwaitingInput --submit(match)----> Unlocked   (terminal)
//! AwaitingInput --submit(mismatch)-> AwaitingInput, label = Error
//! ```
//!
//! There is no attempt limit and no delay between attempts.

use std::borrow::Cow;

use crate::model::Credential;
use crate::tr_key;

/// Where the gate is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatePhase {
    AwaitingInput,
    Unlocked,
}

/// Result of a single submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Granted,
    Denied,
}

/// Text shown above the entry field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateLabel {
    /// Initial prompt.
    Prompt,
    /// Shown in place of the prompt after a wrong PIN.
    Error,
}

impl GateLabel {
    /// Localisation key for this label.
    pub fn text_key(self) -> &'static str {
        match self {
            GateLabel::Prompt => "Enter PIN:",
            GateLabel::Error => "Incorrect PIN. Try again.",
        }
    }

    pub fn text(self, es: bool) -> Cow<'static, str> {
        tr_key(self.text_key(), es)
    }
}

/// Checks submissions against a credential.
#[derive(Debug)]
pub struct AuthGate {
    credential: Credential,
    phase: GatePhase,
    label: GateLabel,
    failed_attempts: u32,
}

impl AuthGate {
    pub fn new(credential: Credential) -> Self {
        Self {
            credential,
            phase: GatePhase::AwaitingInput,
            label: GateLabel::Prompt,
            failed_attempts: 0,
        }
    }

    /// Compare `entered` with the credential, exact match only.
    ///
    /// Once unlocked the gate stays unlocked and further submissions are
    /// ignored.
    pub fn submit(&mut self, entered: &str) -> Verdict {
        if self.phase == GatePhase::Unlocked {
            return Verdict::Granted;
        }
        if self.credential.verify(entered) {
            self.phase = GatePhase::Unlocked;
            Verdict::Granted
        } else {
            self.reject()
        }
    }

    /// Count a submission that cannot match (e.g. undecodable text).
    pub fn reject(&mut self) -> Verdict {
        if self.phase == GatePhase::Unlocked {
            return Verdict::Granted;
        }
        self.label = GateLabel::Error;
        self.failed_attempts = self.failed_attempts.saturating_add(1);
        Verdict::Denied
    }

    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    pub fn label(&self) -> GateLabel {
        self.label
    }

    /// Number of rejected submissions so far. Informational only.
    pub fn failed_attempts(&self) -> u32 {
        self.failed_attempts
    }
}
