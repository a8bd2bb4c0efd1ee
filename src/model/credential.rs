//! Expected PIN, kept only as an Argon2 password hash.
//!
//! The credential is a PHC string (`$argon2id$v=19$m=...,t=...,p=...$salt$hash`)
//! so the salt and cost travel with the hash. Verification goes through
//! `Argon2::verify_password`, which compares in constant time.

use std::fmt;

use argon2::{
    password_hash::{PasswordHash, PasswordVerifier},
    Argon2,
};
use zeroize::Zeroizing;

use super::constants::DEFAULT_PIN_HASH;

/// Argon2 hash of the PIN that unlocks input.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    phc: String,
}

impl Credential {
    /// Parse a PHC hash string (surrounding whitespace ignored).
    ///
    /// Returns `None` when the string is not a well-formed PHC hash.
    pub fn from_phc(s: &str) -> Option<Self> {
        let t = s.trim();
        PasswordHash::new(t).ok()?;
        Some(Self { phc: t.to_string() })
    }

    /// Exact-match check of a candidate PIN.
    pub fn verify(&self, candidate: &str) -> bool {
        let Ok(hash) = PasswordHash::new(&self.phc) else {
            return false;
        };
        let pin_bytes = Zeroizing::new(candidate.as_bytes().to_vec());
        Argon2::default().verify_password(&pin_bytes, &hash).is_ok()
    }

    /// The PHC string, the form stored in `config.json`.
    pub fn as_phc(&self) -> &str {
        &self.phc
    }
}

impl Default for Credential {
    /// Hash of `DEFAULT_PIN`.
    fn default() -> Self {
        Self {
            phc: DEFAULT_PIN_HASH.to_string(),
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential").finish_non_exhaustive()
    }
}
