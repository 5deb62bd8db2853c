use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::core::preferences::model::{PreferenceChange, ReadingPreferences};

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "event", content = "payload")] // Tagged enum for easier frontend parsing
#[ts(export, export_to = "../ui/types/")]
pub enum AppEvent {
    /// A single preference was committed through the store.
    #[serde(rename = "preferences://changed")]
    PreferenceChanged(PreferenceChange),

    /// Full preference state, emitted once after startup load.
    #[serde(rename = "preferences://loaded")]
    PreferencesLoaded(ReadingPreferences),
}
