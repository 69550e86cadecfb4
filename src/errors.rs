//! Error types shared across the launcher engine.
//!
//! None of these are fatal: every caller degrades to a safe default. The
//! variants exist so the host can show the right surface (banner, inline
//! form message) or log with enough context.

/// Failure while loading the remote catalog.
///
/// Recovered by falling back to a custom-apps-only catalog; surfaced as a
/// dismissible banner through [`crate::state::LauncherState::error`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoteLoadError {
    /// Transport-level failure (DNS, connect, timeout, TLS).
    #[error("Failed to load apps: {0}")]
    Network(String),
    /// The catalog endpoint answered with a non-success status.
    #[error("Failed to load apps ({0})")]
    Status(u16),
    /// The body was not valid JSON.
    #[error("Failed to parse apps: {0}")]
    Parse(String),
}

/// Rejected form submission.
///
/// The `Display` text is the message shown inline on the relevant form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Entry name was empty after trimming.
    #[error("Please enter a name.")]
    MissingName,
    /// Entry URL was not an http(s) URL.
    #[error("Please enter a valid link that starts with https://")]
    InvalidUrl,
    /// The custom icon option was chosen but left blank.
    #[error("Paste an icon URL or pick a preset.")]
    MissingCustomIcon,
    /// Edit/delete targeted an id that is not in the catalog.
    #[error("No app with id `{0}` exists.")]
    UnknownEntry(String),
    /// Edit/delete targeted an entry that is not user-defined.
    #[error("Only apps you added yourself can be changed.")]
    NotCustom(String),
}

/// Durable storage read or write failure. Logged, never surfaced.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Filesystem failure for the given key.
    #[error("storage I/O failed for `{key}`: {source}")]
    Io {
        /// Storage key being accessed.
        key: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// JSON encoding failure for the given key.
    #[error("could not encode `{key}`: {source}")]
    Encode {
        /// Storage key being written.
        key: String,
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },
    /// The store refused the write (quota, read-only medium, injected failure).
    #[error("storage rejected write for `{0}`")]
    Rejected(String),
}
