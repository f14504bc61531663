//! Key/value persistence
//!
//! The game only needs get/set/delete by string key; durable backends
//! (device storage, browser storage) implement [`KeyValueStore`] outside this
//! crate. Values are JSON scalars.

use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Storage keys. Shape is fixed for compatibility with stored data.
pub mod keys {
    pub const BEST_COLOR_CHAIN: &str = "bestColorChain";
    pub const BEST_GRADIENT_GAP: &str = "bestGradientGap";
    pub const BEST_MEMORY_MIX: &str = "bestMemoryMix";
    pub const BEST_DAILY: &str = "bestDaily";
    pub const DAILY_COMPLETED: &str = "dailyChallengeCompleted";
    pub const DAILY_SCORE: &str = "dailyChallengeScore";
    pub const DAILY_DATE: &str = "dailyChallengeDate";
    pub const IS_DARK_MODE: &str = "isDarkMode";
    pub const SHOW_PRECISION_BAR: &str = "showPrecisionBar";
    pub const SHOW_HEX_VALUE: &str = "showHexValue";
    pub const SHOW_RGB_LABELS: &str = "showRgbLabels";

    pub const ALL: [&str; 11] = [
        BEST_COLOR_CHAIN,
        BEST_GRADIENT_GAP,
        BEST_MEMORY_MIX,
        BEST_DAILY,
        DAILY_COMPLETED,
        DAILY_SCORE,
        DAILY_DATE,
        IS_DARK_MODE,
        SHOW_PRECISION_BAR,
        SHOW_HEX_VALUE,
        SHOW_RGB_LABELS,
    ];
}

/// String key/value storage backend.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn delete(&mut self, key: &str);
}

/// In-memory backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn delete(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Reads a JSON value, falling back to `default` when missing or undecodable.
pub fn read_or<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str, default: T) -> T {
    let Some(raw) = store.get(key) else {
        return default;
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Ignoring stored {key}: {e}");
            default
        }
    }
}

/// Writes a value as JSON.
pub fn write<T: Serialize>(store: &mut dyn KeyValueStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => store.set(key, json),
        Err(e) => log::warn!("Could not encode {key}: {e}"),
    }
}
