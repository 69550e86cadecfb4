use std::fs;
use std::path::Path;

use super::parsing::split_key_value;
use super::paths::{config_dir, resolve_config_path};
use super::types::AppConfig;

/// Skeleton written to `launchgrid.conf` when no config file exists.
pub(crate) const SKELETON_CONFIG_CONTENT: &str = "# launchgrid configuration\n\
#\n\
# Format: key = value\n\
# Lines starting with # are comments; a # or // after a space starts an inline comment.\n\
#\n\
# JSON array of launcher entries fetched on every reload\n\
catalog_url = https://launchgrid.example/data/apps.json\n\
#\n\
# Overall timeout of the catalog request, in seconds\n\
request_timeout_secs = 10\n\
#\n\
# Widest viewport (in px) still laid out as a single scrolling page\n\
compact_breakpoint = 640\n\
#\n\
# Viewport width assumed when running headless\n\
viewport_width = 1280\n";

/// What: Parse `launchgrid.conf` content.
///
/// Inputs:
/// - `content`: File text.
///
/// Output:
/// - Config with recognized keys applied over defaults.
///
/// Details:
/// - Unknown keys are ignored; invalid values keep the default and are logged.
#[must_use]
pub fn parse_config(content: &str) -> AppConfig {
    let mut config = AppConfig::default();
    for line in content.lines() {
        let Some((key, val)) = split_key_value(line) else {
            continue;
        };
        match key.as_str() {
            "catalog_url" | "apps_source" => {
                if crate::logic::sanitize_http_url(val).is_some() {
                    config.catalog_url = val.to_string();
                } else {
                    tracing::warn!(value = val, "[Config] Ignoring non-http catalog_url");
                }
            }
            "request_timeout_secs" | "timeout" => match val.parse::<u64>() {
                Ok(v) if v > 0 => config.request_timeout_secs = v,
                _ => tracing::warn!(value = val, "[Config] Invalid request_timeout_secs"),
            },
            "compact_breakpoint" | "mobile_breakpoint" => match val.parse::<u32>() {
                Ok(v) => config.compact_breakpoint = v,
                Err(_) => tracing::warn!(value = val, "[Config] Invalid compact_breakpoint"),
            },
            "viewport_width" => match val.parse::<u32>() {
                Ok(v) => config.viewport_width = v,
                Err(_) => tracing::warn!(value = val, "[Config] Invalid viewport_width"),
            },
            other => tracing::debug!(key = other, "[Config] Unknown key ignored"),
        }
    }
    config
}

/// What: Read and parse a config file, writing the skeleton if it is missing.
///
/// Inputs:
/// - `path`: Config file location.
///
/// Output:
/// - Parsed config; defaults when the file cannot be read.
pub fn load_config_from(path: &Path) -> AppConfig {
    if !path.exists() {
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        match fs::write(path, SKELETON_CONFIG_CONTENT) {
            Ok(()) => tracing::info!(path = %path.display(), "[Config] Wrote config skeleton"),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "[Config] Failed to write skeleton");
            }
        }
    }
    match fs::read_to_string(path) {
        Ok(content) => parse_config(&content),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "[Config] Failed to read config; using defaults");
            AppConfig::default()
        }
    }
}

/// What: Load the launcher config from the standard location.
///
/// Output:
/// - Parsed `launchgrid.conf` from HOME/XDG, created from the skeleton when absent.
#[must_use]
pub fn load_config() -> AppConfig {
    let path = resolve_config_path().unwrap_or_else(|| config_dir().join("launchgrid.conf"));
    load_config_from(&path)
}
