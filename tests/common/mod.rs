//! Test doubles shared by the integration tests.
#![allow(dead_code)]

use std::collections::VecDeque;

use pinlock::gate::{GateLabel, PinPrompt, Submission};
use pinlock::lock::InputBlocker;
use zeroize::Zeroizing;

/// Records every block/unblock request.
#[derive(Debug, Default)]
pub struct RecordingBlocker {
    pub calls: Vec<bool>,
}

impl InputBlocker for RecordingBlocker {
    fn set_blocked(&mut self, blocked: bool) {
        self.calls.push(blocked);
    }
}

// Argon2id hashes at minimum cost (m=8, t=1, p=1), to keep tests fast
pub const HASH_1234: &str =
    "$argon2id$v=19$m=8,t=1,p=1$0jPulxbhSy984BPJGCaKCQ$qGMjg9khoSxjUcpzcD33bjuK3tj6BrvKQIju4/1JKYo";
pub const HASH_4321: &str =
    "$argon2id$v=19$m=8,t=1,p=1$vYKQRRpE2w6JtcmVQaoT/w$kwc0s4Db3Az/iEb4SJZ/r+fkCFCiMdPvo43uaVRlhHk";
pub const HASH_ABCD: &str =
    "$argon2id$v=19$m=8,t=1,p=1$lZOV9Uyf9jzyK9enUrg0gA$ARzn+HstIwsvsvadSQYO8gPK1AccGPXfhBbwI93QN60";

/// A scripted dialog action.
#[derive(Debug)]
enum Entry {
    Type(String),
    Garbled,
    Destroy,
}

/// Dialog that replays scripted entries and remembers what it displayed.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    entries: VecDeque<Entry>,
    /// Label shown on each `request`, in order.
    pub shown: Vec<GateLabel>,
    /// Contents of the entry field right now.
    pub field: String,
    /// Number of `clear_entry` calls.
    pub clears: usize,
    pub closed: bool,
}

impl ScriptedPrompt {
    /// `Some(pin)` is typed and submitted; `None` destroys the window.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|e| match e {
                    Some(pin) => Entry::Type(pin.into()),
                    None => Entry::Destroy,
                })
                .collect(),
            ..Default::default()
        }
    }

    /// Queue a submission whose text does not decode.
    pub fn then_garbled(mut self) -> Self {
        self.entries.push_back(Entry::Garbled);
        self
    }

    /// Queue the next typed PIN.
    pub fn then_typing(mut self, pin: &str) -> Self {
        self.entries.push_back(Entry::Type(pin.to_string()));
        self
    }

    pub fn typing<I, S>(pins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(pins.into_iter().map(Some))
    }

    pub fn remaining(&self) -> usize {
        self.entries.len()
    }
}

impl PinPrompt for ScriptedPrompt {
    fn request(&mut self, label: GateLabel) -> Submission {
        assert!(!self.closed, "request after close");
        self.shown.push(label);
        match self.entries.pop_front() {
            Some(Entry::Type(pin)) => {
                // Typing appends to whatever was left in the field
                self.field.push_str(&pin);
                Submission::Pin(Zeroizing::new(self.field.clone()))
            }
            Some(Entry::Garbled) => Submission::Malformed,
            Some(Entry::Destroy) | None => Submission::Closed,
        }
    }

    fn clear_entry(&mut self) {
        self.field.clear();
        self.clears += 1;
    }

    fn close(&mut self) {
        self.closed = true;
    }
}
