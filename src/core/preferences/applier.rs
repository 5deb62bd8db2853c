//! One-shot resolution of stored preferences into style variables.
//!
//! The frontend calls this once per page load, before first paint, and writes
//! the result onto the document root. Resolution reads the durable storage
//! directly with per-field defaults, so it produces the same output whether
//! or not the store has run yet, and repeated runs over unchanged storage are
//! identical.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::model::{FontFamily, Theme};
use super::storage::{self, PreferenceStorage};

const SERIF_STACK: &str = "Georgia, serif";
const SANS_STACK: &str = "Helvetica, Arial, sans-serif";

/// Palette written for the dark theme: bg, text, secondary text, border, link.
const DARK_PALETTE: [(&str, &str); 5] = [
    ("--theme-bg", "#121212"),
    ("--theme-text", "#E0E0E0"),
    ("--theme-text-secondary", "#BDBDBD"),
    ("--theme-border", "#333333"),
    ("--theme-link", "#90CAF9"),
];

const SEPIA_PALETTE: [(&str, &str); 5] = [
    ("--theme-bg", "#FBF0D9"),
    ("--theme-text", "#5B4636"),
    ("--theme-text-secondary", "#8D6E63"),
    ("--theme-border", "#D7C8B6"),
    ("--theme-link", "#8D6E63"),
];

/// A single `name: value` assignment on the document root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../ui/types/")]
pub struct StyleVariable {
    pub name: String,
    pub value: String,
}

fn variable(name: &str, value: impl Into<String>) -> StyleVariable {
    StyleVariable {
        name: name.to_string(),
        value: value.into(),
    }
}

/// Resolve the style-variable assignments for the stored preferences.
///
/// The light theme writes no palette variables; the stylesheet's own defaults
/// already are the light palette.
pub fn resolve_style_variables(storage: &dyn PreferenceStorage) -> Vec<StyleVariable> {
    let prefs = storage::load_preferences(storage);

    let stack = match prefs.font_family {
        FontFamily::Serif => SERIF_STACK,
        FontFamily::Sans => SANS_STACK,
    };

    let mut variables = vec![
        variable("--font-size", format!("{}px", prefs.font_size)),
        variable("--font-family", stack),
    ];

    let palette = match prefs.theme {
        Theme::Dark => Some(&DARK_PALETTE),
        Theme::Sepia => Some(&SEPIA_PALETTE),
        Theme::Light => None,
    };
    if let Some(palette) = palette {
        variables.extend(palette.iter().map(|&(name, value)| variable(name, value)));
    }

    variables
}
