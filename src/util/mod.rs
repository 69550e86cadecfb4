//! Small helpers shared by the binary: URL launching and timestamps.

use chrono::{DateTime, Local};

use crate::state::Navigation;

/// What: Hand a navigation effect to the desktop's default URL handler.
///
/// Inputs:
/// - `navigation`: Navigation produced by opening an entry.
///
/// Output:
/// - No return value; the handler is spawned on a background thread.
///
/// Details:
/// - The system handler always opens a new browser tab or window and never
///   passes a referrer, matching the `new_tab`/`no_referrer` flags.
/// - Uses `xdg-open` (Linux) or `open` (macOS); `cmd /c start` on Windows.
/// - Skipped during tests.
pub fn open_url(navigation: &Navigation) {
    tracing::info!(
        url = %navigation.url,
        new_tab = navigation.new_tab,
        "[Router] Handing URL to system handler"
    );
    #[cfg(not(test))]
    {
        let url = navigation.url.clone();
        std::thread::spawn(move || {
            #[cfg(target_os = "windows")]
            {
                let _ = std::process::Command::new("cmd")
                    .args(["/c", "start", "", &url])
                    .stdin(std::process::Stdio::null())
                    .stdout(std::process::Stdio::null())
                    .stderr(std::process::Stdio::null())
                    .spawn();
            }
            #[cfg(not(target_os = "windows"))]
            {
                let spawned = std::process::Command::new("xdg-open")
                    .arg(&url)
                    .stdin(std::process::Stdio::null())
                    .stdout(std::process::Stdio::null())
                    .stderr(std::process::Stdio::null())
                    .spawn()
                    .or_else(|_| {
                        std::process::Command::new("open")
                            .arg(&url)
                            .stdin(std::process::Stdio::null())
                            .stdout(std::process::Stdio::null())
                            .stderr(std::process::Stdio::null())
                            .spawn()
                    });
                if let Err(e) = spawned {
                    tracing::warn!(url = %url, error = %e, "[Router] No URL handler available");
                }
            }
        });
    }
}

/// What: Format a timestamp for log lines.
///
/// Inputs:
/// - `at`: Local time to format.
///
/// Output:
/// - `YYYY-MM-DDTHH:MM:SS` in local time.
#[must_use]
pub fn log_timestamp(at: DateTime<Local>) -> String {
    at.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// What: Shorten text to at most `max` characters, appending `…` when cut.
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
