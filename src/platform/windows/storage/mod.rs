//! Configuration storage for Windows.
//!
//! Reads settings from a JSON file in %APPDATA%/PinLock/config.json

mod config;

pub use config::*;
