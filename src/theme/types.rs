use serde::{Deserialize, Serialize};

use super::resolve::PRESET_BACKGROUND_OPTIONS;

/// Default page background color.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#0f172a";
/// Default glass tint color.
pub const DEFAULT_GLASS_TINT_COLOR: &str = "#1e293b";

/// How the page background is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundType {
    /// Background image (preset or custom).
    #[default]
    Image,
    /// Solid background color.
    Color,
}

impl BackgroundType {
    /// `Color` only for the exact string `"color"`, `Image` otherwise.
    #[must_use]
    pub fn from_raw(raw: Option<&str>) -> Self {
        if raw == Some("color") {
            Self::Color
        } else {
            Self::Image
        }
    }
}

/// Appearance settings persisted under the settings storage key.
///
/// Every field is already validated: numbers are clamped and colors are
/// normalized `#rrggbb`. Build from untrusted input only through
/// [`crate::theme::settings_from_value`] or [`crate::theme::settings_from_form`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Image or color background.
    pub background_type: BackgroundType,
    /// Sanitized image source; empty means none.
    pub background_image: String,
    /// Background color `#rrggbb`.
    pub background_color: String,
    /// Overlay opacity in `[0, 0.6]`.
    pub overlay_opacity: f64,
    /// Backdrop blur in `[0, 20]`.
    pub blur_strength: f64,
    /// Glass tint color `#rrggbb`.
    pub glass_tint_color: String,
    /// Glass tint opacity in `[0.05, 0.95]`.
    pub glass_tint_opacity: f64,
    /// Whether the first-run settings surface was completed.
    pub has_completed_setup: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            background_type: BackgroundType::Image,
            background_image: PRESET_BACKGROUND_OPTIONS[0].to_string(),
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            overlay_opacity: 0.12,
            blur_strength: 2.0,
            glass_tint_color: DEFAULT_GLASS_TINT_COLOR.to_string(),
            glass_tint_opacity: 0.55,
            has_completed_setup: false,
        }
    }
}

/// Launcher configuration parsed from `launchgrid.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Catalog endpoint returning the JSON array of entries.
    pub catalog_url: String,
    /// Overall timeout of the catalog request, in seconds.
    pub request_timeout_secs: u64,
    /// Widest viewport still laid out in compact mode.
    pub compact_breakpoint: u32,
    /// Viewport width assumed by the headless binary.
    pub viewport_width: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_url: "https://launchgrid.example/data/apps.json".to_string(),
            request_timeout_secs: 10,
            compact_breakpoint: 640,
            viewport_width: 1280,
        }
    }
}
