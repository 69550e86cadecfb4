//! Derived presentation values for the host renderer.

use super::resolve::{background_css_value, hex_to_rgb, resolve_hex_color, rgb_to_rgba};
use super::types::{BackgroundType, DEFAULT_BACKGROUND_COLOR, DEFAULT_GLASS_TINT_COLOR, Settings};

/// Page background as style values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackgroundStyle {
    /// No image, solid color.
    Color {
        /// `#rrggbb` background color.
        color: String,
    },
    /// Image background; `css` is `None` when the stored image is empty.
    Image {
        /// CSS `background-image` value.
        css: Option<String>,
    },
}

/// Style values derived from [`Settings`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DerivedStyle {
    /// Overlay color: glass tint at overlay opacity.
    pub overlay_color: String,
    /// Overlay blur length, e.g. `"2px"`.
    pub overlay_blur: String,
    /// Glass tint at glass tint opacity.
    pub glass_tint: String,
    /// Page background.
    pub background: BackgroundStyle,
    /// Color shown behind the image while it loads (or when it fails).
    pub fallback_background_color: String,
}

/// What: Compute renderer-facing style values from validated settings.
///
/// Inputs:
/// - `settings`: Current settings.
///
/// Output:
/// - Overlay and glass `rgba()` values, blur length, and background.
#[must_use]
pub fn derive_style(settings: &Settings) -> DerivedStyle {
    let glass_rgb =
        hex_to_rgb(&settings.glass_tint_color).or_else(|| hex_to_rgb(DEFAULT_GLASS_TINT_COLOR));
    let (background, fallback_background_color) = match settings.background_type {
        BackgroundType::Color => {
            let color = resolve_hex_color(Some(&settings.background_color), DEFAULT_BACKGROUND_COLOR);
            (BackgroundStyle::Color { color: color.clone() }, color)
        }
        BackgroundType::Image => (
            BackgroundStyle::Image {
                css: background_css_value(&settings.background_image),
            },
            DEFAULT_BACKGROUND_COLOR.to_string(),
        ),
    };
    DerivedStyle {
        overlay_color: rgb_to_rgba(glass_rgb, settings.overlay_opacity),
        overlay_blur: format!("{}px", settings.blur_strength),
        glass_tint: rgb_to_rgba(glass_rgb, settings.glass_tint_opacity),
        background,
        fallback_background_color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Default settings derive the default glass overlay and a wrapped image URL.
    ///
    /// Inputs:
    /// - `Settings::default()`, then switched to color mode.
    ///
    /// Output:
    /// - rgba values from `#1e293b`, `2px` blur, `url("…")` image; color mode uses the color.
    fn derive_defaults_and_color_mode() {
        let mut settings = Settings::default();
        let style = derive_style(&settings);
        assert_eq!(style.overlay_color, "rgba(30, 41, 59, 0.12)");
        assert_eq!(style.glass_tint, "rgba(30, 41, 59, 0.55)");
        assert_eq!(style.overlay_blur, "2px");
        assert_eq!(
            style.background,
            BackgroundStyle::Image {
                css: Some("url(\"/bg-photo-gallery.avif\")".into())
            }
        );

        settings.background_type = BackgroundType::Color;
        settings.background_color = "#ABCDEF".into();
        let style = derive_style(&settings);
        assert_eq!(
            style.background,
            BackgroundStyle::Color {
                color: "#abcdef".into()
            }
        );
        assert_eq!(style.fallback_background_color, "#abcdef");
    }
}
