//! Configuration constants and default values.
//!
//! This module contains all application constants including the fallback
//! credential, config file location and keyboard codes used by the guards.

// === Credential ===

/// PIN accepted when the config file does not provide a hash.
pub const DEFAULT_PIN: &str = "1234";

/// Argon2id hash of `DEFAULT_PIN` (default cost: m=19456 KiB, t=2, p=1).
pub const DEFAULT_PIN_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$vVOVEFglcn/NXIS6TVSoZw$dTj7Udo/ufpS6HzFE8W6YJJFevwbQ/h9ptsHdptQl1U";

// === Config File ===

/// Directory under %APPDATA% holding the config file.
pub const CONFIG_DIR_NAME: &str = "PinLock";

/// Config file name.
pub const CONFIG_FILE_NAME: &str = "config.json";

// === Languages ===

/// Language code for English.
pub const LANG_EN: i32 = 0;

/// Language code for Spanish.
pub const LANG_ES: i32 = 1;

/// Default language (Spanish).
pub const DEFAULT_LANG: i32 = LANG_ES;

// === Virtual Key Codes ===

/// Left Windows key.
pub const VK_LWIN: u32 = 0x5B;

/// Right Windows key.
pub const VK_RWIN: u32 = 0x5C;

/// F4 key (closes the foreground window together with Alt).
pub const VK_F4: u32 = 0x73;

// === Cursor Clip ===

/// Pixels trimmed from each side of the dialog when confining the cursor.
pub const CURSOR_CLIP_PADDING: i32 = 8;
