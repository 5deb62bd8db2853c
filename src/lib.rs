mod api;
mod core;
mod shared;

use std::sync::Mutex;

use tauri::Manager;
use tauri_plugin_store::StoreExt;

use crate::core::preferences::storage::{MemoryStorage, PreferenceStorage, StoreBackend};
use crate::core::preferences::store::PreferenceStore;
use crate::shared::emit::emit_event;
use crate::shared::events::AppEvent;

/// Store file holding the per-profile preference keys.
const PREFERENCES_FILE: &str = "preferences.json";

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_store::Builder::default().build())
        .setup(|app| {
            // Open the durable store; if that fails, run in-memory-only for
            // this session rather than refusing to start.
            let storage: Box<dyn PreferenceStorage> = match app.store(PREFERENCES_FILE) {
                Ok(store) => Box::new(StoreBackend::new(store)),
                Err(e) => {
                    eprintln!(
                        "⚠️  Preference store unavailable, settings will not persist: {}",
                        e
                    );
                    Box::new(MemoryStorage::new())
                }
            };

            let mut preferences = PreferenceStore::new(storage);

            // Reactive propagation: every committed mutation is forwarded to
            // the webview as a preferences://changed event.
            let handle = app.handle().clone();
            preferences.subscribe(Box::new(move |change| {
                emit_event(&handle, AppEvent::PreferenceChanged(change.clone()));
            }));

            emit_event(
                app.handle(),
                AppEvent::PreferencesLoaded(preferences.preferences().clone()),
            );
            app.manage(Mutex::new(preferences));
            println!("✅ Reading preferences loaded");

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            api::commands::preferences::get_preferences,
            api::commands::preferences::set_theme,
            api::commands::preferences::set_font_family,
            api::commands::preferences::set_infinite_scroll,
            api::commands::preferences::change_font_size,
            api::commands::preferences::toggle_infinite_scroll,
            api::commands::preferences::load_style_variables,
            api::commands::library::list_books,
        ])
        .run(tauri::generate_context!())
        .unwrap_or_else(|e| {
            eprintln!("FATAL: Failed to start Inkshelf: {}", e);
            std::process::exit(1);
        });
}
