//! JSON configuration file for Windows.
//!
//! Reads settings from %APPDATA%/PinLock/config.json
//!
//! The file is read once and cached; the program never writes it.

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

use crate::model::constants::*;
use crate::model::Config;

// In-memory config cache. Loaded once.
thread_local! {
    static CONFIG_CACHE: RefCell<Option<Config>> = const { RefCell::new(None) };
}

/// Get config file path: %APPDATA%/PinLock/config.json
fn config_path() -> PathBuf {
    let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(appdata)
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME)
}

/// Load config from JSON file, returning defaults if not found or invalid.
fn load_config_from_disk() -> Config {
    let path = config_path();
    match fs::read_to_string(&path) {
        Ok(contents) => Config::from_json(&contents).unwrap_or_else(|e| {
            eprintln!("Invalid config {}: {}", path.display(), e);
            Config::default()
        }),
        Err(_) => Config::default(),
    }
}

/// Get the cached config, loading from disk if needed.
pub fn load_config() -> Config {
    CONFIG_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(load_config_from_disk)
            .clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_path_ends_with_app_dir_and_file() {
        let path = config_path();
        assert!(path.ends_with(PathBuf::from(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)));
    }
}
