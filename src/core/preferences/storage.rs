//! Durable per-profile key-value storage for reading preferences.
//!
//! Each preference persists under its own key, as its natural string
//! representation. There is no transactional grouping: a profile where some
//! keys are present and others absent is a normal state and loads as a mix of
//! stored and default values. All parse/fallback leniency lives here, at the
//! read boundary, so the store and applier above it only ever see typed
//! values.

use std::collections::HashMap;
use std::sync::Arc;

use tauri::Runtime;
use tauri_plugin_store::Store;

use crate::shared::errors::AppResult;

use super::model::{
    FontFamily, ReadingPreferences, ScrollMode, Theme, DEFAULT_FONT_SIZE,
};

pub const KEY_THEME: &str = "readingTheme";
pub const KEY_FONT_SIZE: &str = "readingFontSize";
pub const KEY_FONT_FAMILY: &str = "readingFontFamily";
pub const KEY_INFINITE_SCROLL: &str = "readingInfiniteScroll";

/// Raw per-key access to the durable store.
///
/// `write` may fail (disk full, store unavailable); callers drop the mirror
/// and keep the in-memory value, so failures are reported but never fatal.
pub trait PreferenceStorage: Send {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str) -> AppResult<()>;
}

/// In-memory backend: used by tests, and as the degraded mode when the
/// plugin store cannot be opened. Values do not survive a restart.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw entry, bypassing the typed boundary. Lets tests model
    /// pre-existing (possibly corrupt) profile data.
    #[cfg(test)]
    pub fn seed(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

impl PreferenceStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Backend over a `tauri-plugin-store` file, saved to disk on every write.
pub struct StoreBackend<R: Runtime> {
    store: Arc<Store<R>>,
}

impl<R: Runtime> StoreBackend<R> {
    pub fn new(store: Arc<Store<R>>) -> Self {
        Self { store }
    }
}

impl<R: Runtime> PreferenceStorage for StoreBackend<R> {
    fn read(&self, key: &str) -> Option<String> {
        let value = self.store.get(key)?;
        match value {
            serde_json::Value::String(s) => Some(s),
            // Older profiles stored the font size as a bare number.
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    fn write(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.store.set(key, serde_json::Value::String(value.to_string()));
        self.store.save()?;
        Ok(())
    }
}

/// Stored font size, parsed as an integer. The stored representation is
/// never trusted: absent or corrupt values fall back to the default.
pub fn stored_font_size(storage: &dyn PreferenceStorage) -> i32 {
    storage
        .read(KEY_FONT_SIZE)
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(DEFAULT_FONT_SIZE)
}

/// Resolve all four preferences from storage, falling back per field to its
/// default.
pub fn load_preferences(storage: &dyn PreferenceStorage) -> ReadingPreferences {
    ReadingPreferences {
        theme: storage
            .read(KEY_THEME)
            .map(|raw| Theme::from_raw(&raw))
            .unwrap_or_default(),
        font_size: stored_font_size(storage),
        font_family: storage
            .read(KEY_FONT_FAMILY)
            .map(|raw| FontFamily::from_raw(&raw))
            .unwrap_or_default(),
        infinite_scroll: storage
            .read(KEY_INFINITE_SCROLL)
            .map(|raw| ScrollMode::from_raw(&raw))
            .unwrap_or_default(),
    }
}
