//! Validation of appearance settings from storage and from the settings form.
//!
//! Both paths funnel through the same clamp/resolve helpers so a stored
//! record and a submitted form can never disagree about what is valid.

use serde_json::Value;

use super::types::{BackgroundType, DEFAULT_BACKGROUND_COLOR, DEFAULT_GLASS_TINT_COLOR, Settings};

/// Built-in background images; the first one is the default.
pub const PRESET_BACKGROUND_OPTIONS: &[&str] = &[
    "/bg-photo-gallery.avif",
    "https://images.unsplash.com/photo-1500530855697-b586d89ba3ee?auto=format&fit=crop&w=1600&q=80",
    "https://images.unsplash.com/photo-1496307042754-b4aa456c4a2d?auto=format&fit=crop&w=1600&q=80",
];

/// Closed numeric interval with the value used for unparsable input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumericRange {
    /// Inclusive lower bound.
    pub min: f64,
    /// Inclusive upper bound.
    pub max: f64,
    /// Value used when the input is absent or not a finite number.
    pub fallback: f64,
}

/// Overlay opacity bounds.
pub const OVERLAY_OPACITY: NumericRange = NumericRange {
    min: 0.0,
    max: 0.6,
    fallback: 0.12,
};
/// Blur strength bounds.
pub const BLUR_STRENGTH: NumericRange = NumericRange {
    min: 0.0,
    max: 20.0,
    fallback: 2.0,
};
/// Glass tint opacity bounds.
pub const GLASS_TINT_OPACITY: NumericRange = NumericRange {
    min: 0.05,
    max: 0.95,
    fallback: 0.55,
};

/// What: Parse the leading decimal number of a string.
///
/// Inputs:
/// - `s`: Text such as `"0.4"`, `" 12px"`, or `"abc"`.
///
/// Output:
/// - The longest numeric prefix as `f64`, or `None` when there is none.
#[must_use]
pub fn parse_float_prefix(s: &str) -> Option<f64> {
    let trimmed = s.trim_start();
    let end = trimmed
        .char_indices()
        .find(|&(_, c)| !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')))
        .map_or(trimmed.len(), |(i, _)| i);
    let candidate = &trimmed[..end];
    (1..=candidate.len())
        .rev()
        .find_map(|len| candidate[..len].parse::<f64>().ok())
}

/// What: Read a number from an untrusted JSON value.
///
/// Output:
/// - JSON numbers as-is, numeric strings via [`parse_float_prefix`], else `None`.
#[must_use]
pub fn number_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_float_prefix(s),
        _ => None,
    }
}

/// What: Clamp a raw number into `range`.
///
/// Inputs:
/// - `value`: Raw number, `None` when absent.
/// - `range`: Target interval.
///
/// Output:
/// - `range.fallback` for absent or non-finite input, else the clamped value.
#[must_use]
pub fn clamp_number(value: Option<f64>, range: NumericRange) -> f64 {
    match value {
        Some(v) if v.is_finite() => v.clamp(range.min, range.max),
        _ => range.fallback,
    }
}

/// 8-bit RGB triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

/// What: Parse a 3- or 6-digit hex color, with or without `#`.
///
/// Output:
/// - `Some(Rgb)` for a well-formed color, `None` otherwise.
#[must_use]
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let trimmed = hex.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let expanded: String = if digits.chars().count() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };
    if expanded.len() != 6 || !expanded.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
    Some(Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

/// Format as lowercase `#rrggbb`.
#[must_use]
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

/// What: Format a color with alpha as a CSS `rgba()` value.
///
/// Inputs:
/// - `rgb`: Color; `None` yields the slate fallback.
/// - `alpha`: Opacity, clamped into `[0, 1]`.
#[must_use]
pub fn rgb_to_rgba(rgb: Option<Rgb>, alpha: f64) -> String {
    let Some(rgb) = rgb else {
        return "rgba(15, 23, 42, 0.4)".to_string();
    };
    let alpha = if alpha.is_finite() { alpha.clamp(0.0, 1.0) } else { 0.0 };
    format!("rgba({}, {}, {}, {alpha})", rgb.r, rgb.g, rgb.b)
}

/// What: Normalize a hex color or fall back.
///
/// Inputs:
/// - `value`: Untrusted color text.
/// - `fallback`: Field default.
///
/// Output:
/// - Lowercase `#rrggbb` of `value`, else of `fallback`, else `fallback` verbatim.
#[must_use]
pub fn resolve_hex_color(value: Option<&str>, fallback: &str) -> String {
    value
        .and_then(hex_to_rgb)
        .or_else(|| hex_to_rgb(fallback))
        .map_or_else(|| fallback.to_string(), rgb_to_hex)
}

/// What: Sanitize a background image source.
///
/// Output:
/// - Trimmed value, or empty when blank or containing `javascript:` (any case).
#[must_use]
pub fn sanitize_background_image(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.to_ascii_lowercase().contains("javascript:") {
        return String::new();
    }
    trimmed.to_string()
}

/// What: CSS value for a background image source.
///
/// Inputs:
/// - `source`: Stored background image.
///
/// Output:
/// - `None` for an empty or unsafe source; the source verbatim when it is
///   already a CSS expression (contains `(`); else `url("…")` with quotes escaped.
#[must_use]
pub fn background_css_value(source: &str) -> Option<String> {
    let source = sanitize_background_image(source);
    if source.is_empty() {
        None
    } else if source.contains('(') {
        Some(source)
    } else {
        Some(format!("url(\"{}\")", source.replace('"', "\\\"")))
    }
}

/// Background image selection on the settings form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackgroundChoice {
    /// One of [`PRESET_BACKGROUND_OPTIONS`].
    Preset(String),
    /// A pasted image URL or CSS expression.
    Custom(String),
}

impl BackgroundChoice {
    /// What: Resolve the chosen background to a stored image source.
    ///
    /// Output:
    /// - Presets outside the closed option set map to the first preset.
    /// - Custom values are sanitized (possibly to empty).
    #[must_use]
    pub fn resolve(&self) -> String {
        match self {
            Self::Preset(preset) => {
                let known = PRESET_BACKGROUND_OPTIONS
                    .iter()
                    .find(|option| **option == preset.as_str())
                    .copied()
                    .unwrap_or(PRESET_BACKGROUND_OPTIONS[0]);
                sanitize_background_image(known)
            }
            Self::Custom(value) => sanitize_background_image(value),
        }
    }
}

/// Raw contents of the settings form. Numeric fields are text as typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsForm {
    /// `"color"` or anything else for image.
    pub background_type: String,
    /// Background image selection.
    pub background_choice: BackgroundChoice,
    /// Background color text.
    pub background_color: String,
    /// Overlay opacity text.
    pub overlay_opacity: String,
    /// Blur strength text.
    pub blur_strength: String,
    /// Glass tint color text.
    pub glass_tint_color: String,
    /// Glass tint opacity text.
    pub glass_tint_opacity: String,
    /// Page size text.
    pub page_size: String,
}

impl SettingsForm {
    /// Form prefilled from current settings and page size.
    #[must_use]
    pub fn from_settings(settings: &Settings, page_size: usize) -> Self {
        let image = settings.background_image.trim();
        let background_choice = if image.is_empty() {
            BackgroundChoice::Preset(PRESET_BACKGROUND_OPTIONS[0].to_string())
        } else if PRESET_BACKGROUND_OPTIONS.contains(&image) {
            BackgroundChoice::Preset(image.to_string())
        } else {
            BackgroundChoice::Custom(settings.background_image.clone())
        };
        Self {
            background_type: match settings.background_type {
                BackgroundType::Color => "color".to_string(),
                BackgroundType::Image => "image".to_string(),
            },
            background_choice,
            background_color: settings.background_color.clone(),
            overlay_opacity: settings.overlay_opacity.to_string(),
            blur_strength: settings.blur_strength.to_string(),
            glass_tint_color: settings.glass_tint_color.clone(),
            glass_tint_opacity: settings.glass_tint_opacity.to_string(),
            page_size: page_size.to_string(),
        }
    }

    /// Page size as typed, parsed leniently (`None` when not a number).
    #[must_use]
    pub fn page_size_value(&self) -> Option<f64> {
        parse_float_prefix(&self.page_size)
    }
}

/// What: Build settings from a stored JSON record.
///
/// Inputs:
/// - `value`: Parsed record; any field may be missing or wrong-typed.
///
/// Output:
/// - Settings with every field validated independently; missing fields take
///   their defaults.
#[must_use]
pub fn settings_from_value(value: &Value) -> Settings {
    let defaults = Settings::default();
    let text = |key: &str| value.get(key).and_then(Value::as_str);
    let number = |key: &str| value.get(key).and_then(number_from_value);
    Settings {
        background_type: BackgroundType::from_raw(text("backgroundType")),
        background_image: text("backgroundImage")
            .map_or(defaults.background_image, sanitize_background_image),
        background_color: resolve_hex_color(text("backgroundColor"), DEFAULT_BACKGROUND_COLOR),
        overlay_opacity: clamp_number(number("overlayOpacity"), OVERLAY_OPACITY),
        blur_strength: clamp_number(number("blurStrength"), BLUR_STRENGTH),
        glass_tint_color: resolve_hex_color(text("glassTintColor"), DEFAULT_GLASS_TINT_COLOR),
        glass_tint_opacity: clamp_number(number("glassTintOpacity"), GLASS_TINT_OPACITY),
        has_completed_setup: value
            .get("hasCompletedSetup")
            .and_then(Value::as_bool)
            .unwrap_or(defaults.has_completed_setup),
    }
}

/// What: Build settings from a submitted form.
///
/// Output:
/// - Validated settings with `has_completed_setup` set.
#[must_use]
pub fn settings_from_form(form: &SettingsForm) -> Settings {
    Settings {
        background_type: BackgroundType::from_raw(Some(form.background_type.as_str())),
        background_image: form.background_choice.resolve(),
        background_color: resolve_hex_color(Some(&form.background_color), DEFAULT_BACKGROUND_COLOR),
        overlay_opacity: clamp_number(parse_float_prefix(&form.overlay_opacity), OVERLAY_OPACITY),
        blur_strength: clamp_number(parse_float_prefix(&form.blur_strength), BLUR_STRENGTH),
        glass_tint_color: resolve_hex_color(Some(&form.glass_tint_color), DEFAULT_GLASS_TINT_COLOR),
        glass_tint_opacity: clamp_number(
            parse_float_prefix(&form.glass_tint_opacity),
            GLASS_TINT_OPACITY,
        ),
        has_completed_setup: true,
    }
}
