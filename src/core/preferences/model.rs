use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Lower bound for the reading font size, in pixels.
pub const FONT_SIZE_MIN: i32 = 12;
/// Upper bound for the reading font size, in pixels.
pub const FONT_SIZE_MAX: i32 = 32;
/// Default reading font size, also the fallback when a stored value
/// cannot be parsed.
pub const DEFAULT_FONT_SIZE: i32 = 16;

/// Reading color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../ui/types/")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Sepia,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Sepia => "sepia",
        }
    }

    /// Lenient parse of a stored value. Unrecognized strings fall through
    /// to `Light`, matching the stylesheet's untouched defaults.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "dark" => Theme::Dark,
            "sepia" => Theme::Sepia,
            _ => Theme::Light,
        }
    }
}

/// Reading font family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../ui/types/")]
pub enum FontFamily {
    #[default]
    Serif,
    Sans,
}

impl FontFamily {
    pub fn as_str(self) -> &'static str {
        match self {
            FontFamily::Serif => "serif",
            FontFamily::Sans => "sans",
        }
    }

    /// Lenient parse of a stored value: anything but `serif` maps to `Sans`.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "serif" => FontFamily::Serif,
            _ => FontFamily::Sans,
        }
    }
}

/// Infinite-scroll reading mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../ui/types/")]
pub enum ScrollMode {
    On,
    #[default]
    Off,
}

impl ScrollMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ScrollMode::On => "on",
            ScrollMode::Off => "off",
        }
    }

    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "on" => ScrollMode::On,
            _ => ScrollMode::Off,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ScrollMode::On => ScrollMode::Off,
            ScrollMode::Off => ScrollMode::On,
        }
    }
}

/// The user's persisted reading display settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../ui/types/")]
pub struct ReadingPreferences {
    pub theme: Theme,
    /// Font size in pixels, kept within [FONT_SIZE_MIN, FONT_SIZE_MAX]
    /// by every adjustment.
    pub font_size: i32,
    pub font_family: FontFamily,
    pub infinite_scroll: ScrollMode,
}

impl Default for ReadingPreferences {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            font_size: DEFAULT_FONT_SIZE,
            font_family: FontFamily::Serif,
            infinite_scroll: ScrollMode::Off,
        }
    }
}

/// A single field mutation, published to observers and forwarded to the
/// frontend as the `preferences://changed` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
#[ts(export, export_to = "../ui/types/")]
pub enum PreferenceChange {
    Theme(Theme),
    FontSize(i32),
    FontFamily(FontFamily),
    InfiniteScroll(ScrollMode),
}
