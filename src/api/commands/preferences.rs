//! Preference commands: thin wrappers over the managed store and the
//! style-variable applier. All operations are synchronous and infallible;
//! storage failures degrade inside the store (see `core::preferences`).

use std::sync::{Mutex, MutexGuard};

use tauri::State;

use crate::core::preferences::applier::StyleVariable;
use crate::core::preferences::model::{FontFamily, ReadingPreferences, ScrollMode, Theme};
use crate::core::preferences::store::PreferenceStore;

pub type SharedPreferences = Mutex<PreferenceStore>;

/// Recover from lock poisoning: a panicked writer leaves the store in a
/// consistent state (every mutation is a single field assignment).
fn lock<'a>(state: &'a State<'_, SharedPreferences>) -> MutexGuard<'a, PreferenceStore> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[tauri::command]
pub fn get_preferences(state: State<'_, SharedPreferences>) -> ReadingPreferences {
    lock(&state).preferences().clone()
}

#[tauri::command]
pub fn set_theme(theme: Theme, state: State<'_, SharedPreferences>) {
    lock(&state).set_theme(theme);
}

#[tauri::command]
pub fn set_font_family(family: FontFamily, state: State<'_, SharedPreferences>) {
    lock(&state).set_font_family(family);
}

#[tauri::command]
pub fn set_infinite_scroll(mode: ScrollMode, state: State<'_, SharedPreferences>) {
    lock(&state).set_infinite_scroll(mode);
}

/// Adjust the reading font size by `delta` pixels. Returns the committed
/// (clamped) size.
#[tauri::command]
pub fn change_font_size(delta: i32, state: State<'_, SharedPreferences>) -> i32 {
    lock(&state).change_font_size(delta)
}

#[tauri::command]
pub fn toggle_infinite_scroll(state: State<'_, SharedPreferences>) -> ScrollMode {
    lock(&state).toggle_infinite_scroll()
}

/// One-shot style-variable resolution, called by the frontend once per page
/// load before first paint.
#[tauri::command]
pub fn load_style_variables(state: State<'_, SharedPreferences>) -> Vec<StyleVariable> {
    lock(&state).style_variables()
}
