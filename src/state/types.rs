//! Core value types used by the launcher state.

use serde::{Deserialize, Serialize};

/// Reserved id of the synthetic "hidden apps" entry.
pub const HIDDEN_GROUP_ID: &str = "__hidden_group__";

/// Where an [`AppEntry`] came from.
///
/// Catalog entries are fetched from the remote source, custom entries are
/// created by the user, and system entries are synthesized by the engine and
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppOrigin {
    /// Remote catalog record.
    Catalog,
    /// User-defined record, persisted in user data.
    Custom,
    /// Engine-synthesized record (e.g. the hidden-apps group).
    System,
}

impl AppOrigin {
    /// Prefix used when synthesizing slug ids for entries of this origin.
    #[must_use]
    pub const fn slug_prefix(self) -> &'static str {
        match self {
            Self::Custom => "custom",
            Self::Catalog | Self::System => "app",
        }
    }
}

/// What an entry does when opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A shortcut that navigates to its URL.
    Launchable,
    /// The synthetic "N hidden apps" entry; opening it shows the hidden list.
    HiddenGroup {
        /// Number of entries currently hidden.
        hidden_count: usize,
    },
}

/// A single launchable shortcut, sanitized and ready for display.
///
/// Only constructed through the sanitizers in [`crate::logic::sanitize`] or
/// the hidden-group synthesizer, so every field has already been validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppEntry {
    /// Unique slug id (unique across the combined catalog once assembled).
    pub id: String,
    /// Display name, trimmed and non-empty.
    pub name: String,
    /// Optional one-line description.
    pub description: Option<String>,
    /// Target URL; always http(s) when present.
    pub url: Option<String>,
    /// Resolved icon URI.
    pub icon: String,
    /// Ordered, trimmed, non-empty tags.
    pub tags: Vec<String>,
    /// Record origin.
    pub origin: AppOrigin,
    /// Launchable entry or synthetic group.
    pub kind: EntryKind,
}

impl AppEntry {
    /// Whether this is the synthetic hidden-apps group (by kind or reserved id).
    #[must_use]
    pub fn is_hidden_group(&self) -> bool {
        self.id == HIDDEN_GROUP_ID || matches!(self.kind, EntryKind::HiddenGroup { .. })
    }

    /// Whether the entry may be targeted by the context menu and the
    /// hide/show paths.
    #[must_use]
    pub fn is_targetable(&self) -> bool {
        !self.is_hidden_group() && self.origin != AppOrigin::System
    }
}

/// Which collection a context menu was opened from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextMenuSource {
    /// The main grid.
    Grid,
    /// The hidden-apps list surface.
    Hidden,
}

/// A point in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Position {
    /// Convenience constructor.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width/height pair in viewport units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// Convenience constructor.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Grid layout mode, chosen from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Narrow viewport: the whole filtered list is one scrollable page.
    Compact,
    /// Wide viewport: fixed-size pages navigated by keys, drag, or wheel.
    #[default]
    Paged,
}

impl LayoutMode {
    /// What: Pick the layout for a viewport width.
    ///
    /// Inputs:
    /// - `width`: Current viewport width.
    /// - `breakpoint`: Largest width still considered narrow.
    ///
    /// Output:
    /// - `Compact` when `width <= breakpoint`, otherwise `Paged`.
    #[must_use]
    pub const fn for_width(width: u32, breakpoint: u32) -> Self {
        if width <= breakpoint {
            Self::Compact
        } else {
            Self::Paged
        }
    }
}

/// Modal surfaces that can sit above the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Appearance/layout settings form.
    Settings,
    /// Add or edit custom entry form.
    AddEntry,
    /// List of hidden entries.
    HiddenList,
}
