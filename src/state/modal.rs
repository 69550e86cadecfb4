//! Open/closed flags for the modal surfaces.

use crate::state::types::Surface;

/// What: Tracks which modal surfaces are open.
///
/// Details:
/// - Several surfaces may be open at once (the hidden list can sit under the
///   editor); Escape closes them one at a time by [`Surfaces::top_most`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Surfaces {
    /// Appearance/layout settings.
    pub settings: bool,
    /// Add or edit a custom entry.
    pub add_entry: bool,
    /// List of hidden entries.
    pub hidden_list: bool,
}

impl Surfaces {
    /// Whether any surface is open.
    #[must_use]
    pub const fn is_any_open(&self) -> bool {
        self.settings || self.add_entry || self.hidden_list
    }

    /// Whether `surface` is open.
    #[must_use]
    pub const fn is_open(&self, surface: Surface) -> bool {
        match surface {
            Surface::Settings => self.settings,
            Surface::AddEntry => self.add_entry,
            Surface::HiddenList => self.hidden_list,
        }
    }

    /// What: Surface Escape should close first.
    ///
    /// Output:
    /// - Settings, then add-entry, then hidden-list; `None` when all are closed.
    #[must_use]
    pub const fn top_most(&self) -> Option<Surface> {
        if self.settings {
            Some(Surface::Settings)
        } else if self.add_entry {
            Some(Surface::AddEntry)
        } else if self.hidden_list {
            Some(Surface::HiddenList)
        } else {
            None
        }
    }

    /// Open `surface`.
    pub const fn open(&mut self, surface: Surface) {
        self.set(surface, true);
    }

    /// Close `surface`.
    pub const fn close(&mut self, surface: Surface) {
        self.set(surface, false);
    }

    /// Set the flag for `surface`.
    const fn set(&mut self, surface: Surface, open: bool) {
        match surface {
            Surface::Settings => self.settings = open,
            Surface::AddEntry => self.add_entry = open,
            Surface::HiddenList => self.hidden_list = open,
        }
    }
}
