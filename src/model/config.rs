//! Lock configuration (pure Rust, no FFI).
//!
//! Mirrors `%APPDATA%/PinLock/config.json`. Every field is optional in the
//! file; missing ones take the defaults below. Example:
//!
//! ```json
//! {
//!   "pin_hash": "$argon2id$v=19$m=19456,t=2,p=1$<salt>$<hash>",
//!   "lang": 0,
//!   "block_system_keys": true,
//!   "confine_cursor": true
//! }
//! ```
//!
//! `pin_hash` is an Argon2 PHC string, as produced by any argon2 tool with
//! a random salt.
//!
//! Platform-specific loading is in `platform::windows::storage`.

use serde::Deserialize;

use super::constants::*;
use super::credential::Credential;

/// Settings read at startup. Never written back.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Argon2 PHC hash of the unlock PIN. `None` means the built-in default.
    pub pin_hash: Option<String>,
    /// Language: 0 = EN, 1 = ES.
    pub lang: i32,
    /// Swallow the Windows keys and Alt+F4 while the dialog is open.
    pub block_system_keys: bool,
    /// Keep the pointer inside the dialog while it is open.
    pub confine_cursor: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pin_hash: None,
            lang: DEFAULT_LANG,
            block_system_keys: true,
            confine_cursor: true,
        }
    }
}

impl Config {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut config: Config = serde_json::from_str(json)?;
        config.validate();
        Ok(config)
    }

    /// Replace out-of-range values with defaults.
    pub fn validate(&mut self) {
        if self.lang != LANG_EN && self.lang != LANG_ES {
            self.lang = DEFAULT_LANG;
        }
    }

    /// Credential to check submissions against.
    ///
    /// A malformed hash falls back to the default PIN rather than leaving
    /// the session with no way to unlock.
    pub fn credential(&self) -> Credential {
        match self.pin_hash.as_deref() {
            None => Credential::default(),
            Some(phc) => Credential::from_phc(phc).unwrap_or_else(|| {
                eprintln!("Invalid pin_hash in config, using default PIN");
                Credential::default()
            }),
        }
    }

    /// Returns true if current language is Spanish.
    pub fn is_spanish(&self) -> bool {
        self.lang == LANG_ES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = Config::default();
        assert_eq!(config.pin_hash, None);
        assert_eq!(config.lang, LANG_ES);
        assert!(config.block_system_keys);
        assert!(config.confine_cursor);
    }

    #[test]
    fn empty_object_gives_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_object_keeps_other_defaults() {
        let config = Config::from_json(r#"{ "lang": 0, "confine_cursor": false }"#).unwrap();
        assert_eq!(config.lang, LANG_EN);
        assert!(!config.confine_cursor);
        assert!(config.block_system_keys);
    }

    #[test]
    fn unknown_language_falls_back() {
        let config = Config::from_json(r#"{ "lang": 7 }"#).unwrap();
        assert_eq!(config.lang, DEFAULT_LANG);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Config::from_json("{ lang: ").is_err());
    }

    #[test]
    fn hash_from_config_is_used() {
        // "4321" at minimum cost
        let json = r#"{ "pin_hash": "$argon2id$v=19$m=8,t=1,p=1$vYKQRRpE2w6JtcmVQaoT/w$kwc0s4Db3Az/iEb4SJZ/r+fkCFCiMdPvo43uaVRlhHk" }"#;
        let cred = Config::from_json(json).unwrap().credential();
        assert!(cred.verify("4321"));
        assert!(!cred.verify("1234"));
    }

    #[test]
    fn malformed_hash_falls_back_to_default_pin() {
        let config = Config::from_json(r#"{ "pin_hash": "not-a-hash" }"#).unwrap();
        assert!(config.credential().verify(DEFAULT_PIN));
    }
}
