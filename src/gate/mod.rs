//! Authentication gate: the PIN check guarding the input lock.

pub mod prompt;
pub mod state;

pub use prompt::{run_gate, GateOutcome, PinPrompt, Submission};
pub use state::{AuthGate, GateLabel, GatePhase, Verdict};
