//! Application Config
//!
//! Defaults with optional overrides from a JSON object stored under
//! [`CONFIG_KEY`]. Missing fields keep their defaults.

use browser_kv::{load_json, KeyValueStore, StorageError};
use serde::{Deserialize, Serialize};

pub const CONFIG_KEY: &str = "app-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Key holding the serialized task list
    pub storage_key: String,
    pub log_level: String,
    pub posts: PostsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostsConfig {
    pub load_delay_ms: u32,
    /// Bodies longer than this are collapsed to a preview
    pub preview_chars: usize,
    pub simulate_failure: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: "todos".to_string(),
            log_level: console_logger::default_level().to_string(),
            posts: PostsConfig::default(),
        }
    }
}

impl Default for PostsConfig {
    fn default() -> Self {
        Self {
            load_delay_ms: 1000,
            preview_chars: 100,
            simulate_failure: false,
        }
    }
}

impl AppConfig {
    /// Resolve config from `store`.
    ///
    /// Always yields a usable config; a malformed override is returned
    /// alongside the defaults so the caller can log it once logging is up.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> (Self, Option<StorageError>) {
        match load_json::<AppConfig, S>(store, CONFIG_KEY) {
            Ok(Some(config)) => (config.sanitized(), None),
            Ok(None) => (Self::default(), None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    fn sanitized(mut self) -> Self {
        if self.storage_key.trim().is_empty() {
            self.storage_key = Self::default().storage_key;
        }
        // An unknown level would leave the app without any logging
        if console_logger::parse_level(&self.log_level).is_err() {
            self.log_level = console_logger::default_level().to_string();
        }
        self
    }
}
