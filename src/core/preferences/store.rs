//! Canonical in-memory preference state.
//!
//! The store is constructed once at application start, loads its cache from
//! durable storage, and is the sole mutation path afterwards. Every setter
//! updates the cache, mirrors the raw representation to storage, and notifies
//! subscribed observers; the Tauri layer subscribes once and forwards changes
//! to the webview.

use super::applier::{self, StyleVariable};
use super::model::{
    FontFamily, PreferenceChange, ReadingPreferences, ScrollMode, Theme,
    FONT_SIZE_MAX, FONT_SIZE_MIN,
};
use super::storage::{self, PreferenceStorage};

pub type Observer = Box<dyn Fn(&PreferenceChange) + Send>;

pub struct PreferenceStore {
    storage: Box<dyn PreferenceStorage>,
    current: ReadingPreferences,
    observers: Vec<Observer>,
}

impl PreferenceStore {
    /// Load cached state from the given backend. Absent or corrupt stored
    /// values resolve to their defaults.
    pub fn new(storage: Box<dyn PreferenceStorage>) -> Self {
        let current = storage::load_preferences(storage.as_ref());
        Self {
            storage,
            current,
            observers: Vec::new(),
        }
    }

    /// Register a change observer. Observers see every committed mutation.
    pub fn subscribe(&mut self, observer: Observer) {
        self.observers.push(observer);
    }

    pub fn preferences(&self) -> &ReadingPreferences {
        &self.current
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.current.theme = theme;
        self.commit(storage::KEY_THEME, theme.as_str(), PreferenceChange::Theme(theme));
    }

    pub fn set_font_size(&mut self, size: i32) {
        self.current.font_size = size;
        self.commit(
            storage::KEY_FONT_SIZE,
            &size.to_string(),
            PreferenceChange::FontSize(size),
        );
    }

    pub fn set_font_family(&mut self, family: FontFamily) {
        self.current.font_family = family;
        self.commit(
            storage::KEY_FONT_FAMILY,
            family.as_str(),
            PreferenceChange::FontFamily(family),
        );
    }

    pub fn set_infinite_scroll(&mut self, mode: ScrollMode) {
        self.current.infinite_scroll = mode;
        self.commit(
            storage::KEY_INFINITE_SCROLL,
            mode.as_str(),
            PreferenceChange::InfiniteScroll(mode),
        );
    }

    /// Adjust the font size by `delta` pixels, clamped to
    /// [`FONT_SIZE_MIN`, `FONT_SIZE_MAX`]. The persisted representation is
    /// re-read and parsed here rather than trusted to be a valid integer;
    /// corrupt values adjust from the default instead. Returns the new size.
    pub fn change_font_size(&mut self, delta: i32) -> i32 {
        let current = storage::stored_font_size(self.storage.as_ref());
        let next = current
            .saturating_add(delta)
            .clamp(FONT_SIZE_MIN, FONT_SIZE_MAX);
        self.set_font_size(next);
        next
    }

    /// Flip infinite scroll between `on` and `off`. Returns the new mode.
    pub fn toggle_infinite_scroll(&mut self) -> ScrollMode {
        let next = self.current.infinite_scroll.toggled();
        self.set_infinite_scroll(next);
        next
    }

    /// Style variables for the current durable state, resolved the same way
    /// the frontend's one-shot loader sees them.
    pub fn style_variables(&self) -> Vec<StyleVariable> {
        applier::resolve_style_variables(self.storage.as_ref())
    }

    fn commit(&mut self, key: &str, raw: &str, change: PreferenceChange) {
        // A failed mirror degrades to in-memory-only state; the cached value
        // stays authoritative for this session.
        if let Err(e) = self.storage.write(key, raw) {
            eprintln!("Failed to persist {}: {}", key, e);
        }
        for observer in &self.observers {
            observer(&change);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::core::preferences::model::DEFAULT_FONT_SIZE;
    use crate::core::preferences::storage::{MemoryStorage, KEY_FONT_SIZE};

    fn store_with(storage: MemoryStorage) -> PreferenceStore {
        PreferenceStore::new(Box::new(storage))
    }

    #[test]
    fn set_then_get_roundtrips_every_field() {
        let mut store = store_with(MemoryStorage::new());

        store.set_theme(Theme::Dark);
        store.set_font_family(FontFamily::Sans);
        store.set_infinite_scroll(ScrollMode::On);
        store.set_font_size(20);

        let prefs = store.preferences();
        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(prefs.font_family, FontFamily::Sans);
        assert_eq!(prefs.infinite_scroll, ScrollMode::On);
        assert_eq!(prefs.font_size, 20);
    }

    /// Memory backend shared between two store instances, standing in for
    /// one profile's store file across an app restart.
    #[derive(Clone, Default)]
    struct SharedMemory(Arc<Mutex<MemoryStorage>>);

    impl PreferenceStorage for SharedMemory {
        fn read(&self, key: &str) -> Option<String> {
            self.0.lock().unwrap().read(key)
        }

        fn write(&mut self, key: &str, value: &str) -> crate::shared::errors::AppResult<()> {
            self.0.lock().unwrap().write(key, value)
        }
    }

    #[test]
    fn mutations_survive_a_reload() {
        let profile = SharedMemory::default();
        {
            let mut store = PreferenceStore::new(Box::new(profile.clone()));
            store.set_theme(Theme::Sepia);
            store.change_font_size(4);
        }
        let reloaded = PreferenceStore::new(Box::new(profile));
        assert_eq!(reloaded.preferences().theme, Theme::Sepia);
        assert_eq!(reloaded.preferences().font_size, 20);
    }

    #[test]
    fn change_font_size_stays_within_bounds() {
        for delta in [-100, -5, -1, 0, 1, 5, 100] {
            let mut store = store_with(MemoryStorage::new());
            let size = store.change_font_size(delta);
            assert!(
                (FONT_SIZE_MIN..=FONT_SIZE_MAX).contains(&size),
                "delta {} produced {}",
                delta,
                size
            );
            assert_eq!(store.preferences().font_size, size);
        }
    }

    #[test]
    fn change_font_size_is_monotonic_in_delta() {
        let mut previous = None;
        for delta in -30..=30 {
            let mut store = store_with(MemoryStorage::new());
            let size = store.change_font_size(delta);
            if let Some(prev) = previous {
                assert!(size >= prev, "delta {} regressed {} -> {}", delta, prev, size);
            }
            previous = Some(size);
        }
    }

    #[test]
    fn change_font_size_saturates_at_extreme_deltas() {
        let mut store = store_with(MemoryStorage::new());
        assert_eq!(store.change_font_size(i32::MAX), FONT_SIZE_MAX);
        let mut store = store_with(MemoryStorage::new());
        assert_eq!(store.change_font_size(i32::MIN), FONT_SIZE_MIN);
    }

    #[test]
    fn corrupt_stored_font_size_adjusts_from_default() {
        let mut storage = MemoryStorage::new();
        storage.seed(KEY_FONT_SIZE, "abc");
        let mut store = store_with(storage);
        assert_eq!(store.change_font_size(2), DEFAULT_FONT_SIZE + 2);
    }

    #[test]
    fn toggle_twice_restores_original_mode() {
        let mut store = store_with(MemoryStorage::new());
        let original = store.preferences().infinite_scroll;
        store.toggle_infinite_scroll();
        assert_ne!(store.preferences().infinite_scroll, original);
        store.toggle_infinite_scroll();
        assert_eq!(store.preferences().infinite_scroll, original);
    }

    #[test]
    fn observers_see_committed_changes() {
        let seen: Arc<Mutex<Vec<PreferenceChange>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let mut store = store_with(MemoryStorage::new());
        store.subscribe(Box::new(move |change| {
            sink.lock().unwrap().push(change.clone());
        }));

        store.set_theme(Theme::Dark);
        store.toggle_infinite_scroll();

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![
                PreferenceChange::Theme(Theme::Dark),
                PreferenceChange::InfiniteScroll(ScrollMode::On),
            ]
        );
    }
}
