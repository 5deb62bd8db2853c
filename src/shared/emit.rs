use tauri::{AppHandle, Emitter};

use super::events::AppEvent;

/// Emit an application event to all windows.
///
/// Tauri's emit takes a string event name, so the enum is dispatched by
/// variant; the names match the serde renames in `events.rs`.
pub fn emit_event(app: &AppHandle, event: AppEvent) {
    match &event {
        AppEvent::PreferenceChanged(change) => {
            if let Err(e) = app.emit("preferences://changed", change) {
                eprintln!("Failed to emit preference change: {}", e);
            }
        }
        AppEvent::PreferencesLoaded(preferences) => {
            if let Err(e) = app.emit("preferences://loaded", preferences) {
                eprintln!("Failed to emit loaded preferences: {}", e);
            }
        }
    }
}
