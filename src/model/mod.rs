//! Application domain model.
//!
//! This module contains pure business logic (no FFI dependencies)
//! including the lock state, the credential, the config file shape and
//! the key filter and clip math used by the guards.
//!
//! Platform-specific loading is in `platform::windows::storage`.

pub mod clip;
pub mod config;
pub mod constants;
pub mod credential;
pub mod keys;
pub mod lock_state;

pub use clip::inset_bounds;
pub use config::Config;
pub use constants::*;
pub use credential::Credential;
pub use keys::should_suppress_key;
pub use lock_state::InputLockState;
