//! Appearance settings, launcher configuration, and config/log/data paths.
//!
//! Public re-exports keep the `crate::theme::*` API stable.

/// Config file parsing and skeleton creation.
mod config;
/// Config file line parsing utilities.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// Settings validation shared by storage and the settings form.
pub mod resolve;
/// Settings persistence.
mod store;
/// Derived presentation values.
pub mod style;
/// Settings and config type definitions.
mod types;

pub use config::{load_config, load_config_from, parse_config};
pub use paths::{config_dir, data_dir, logs_dir};
pub use resolve::{
    BackgroundChoice, PRESET_BACKGROUND_OPTIONS, SettingsForm, settings_from_form,
    settings_from_value,
};
pub use store::{load_settings, save_settings};
pub use style::{BackgroundStyle, DerivedStyle, derive_style};
pub use types::{
    AppConfig, BackgroundType, DEFAULT_BACKGROUND_COLOR, DEFAULT_GLASS_TINT_COLOR, Settings,
};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize tests that mutate `HOME`.
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
