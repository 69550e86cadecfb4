//! User intents applied to [`crate::state::LauncherState`] and the effects
//! they hand back to the host.

use crate::errors::ValidationError;
use crate::logic::context_menu::{MenuAction, MenuCloseReason};
use crate::logic::editor::CustomAppInput;
use crate::state::types::{ContextMenuSource, LayoutMode, Position, Size, Surface};
use crate::theme::SettingsForm;

/// Every state transition a user (or the host on their behalf) can request.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Focus the search field, optionally selecting its content.
    FocusSearch {
        /// Select the whole term.
        select_all: bool,
    },
    /// Host reports search focus.
    SearchFocusChanged(bool),
    /// Replace the search term.
    SetSearchTerm(String),
    /// Empty the search term and reset the active index.
    ClearSearch,
    /// Jump the active index (clamped).
    SetActiveIndex(usize),
    /// Move the active index by a signed delta, wrapping.
    AdvanceActiveIndex(isize),
    /// Clear the active index.
    ResetActiveIndex,
    /// Open the filtered entry at the active index.
    OpenActive,
    /// Open an entry by id.
    OpenEntry(String),
    /// Go to a page (clamped).
    SetPage(usize),
    /// Next page, saturating at the last.
    NextPage,
    /// Previous page, saturating at the first.
    PrevPage,
    /// Open the context menu for an entry.
    OpenContextMenu {
        /// Target entry id.
        entry_id: String,
        /// Collection the card belongs to.
        source: ContextMenuSource,
        /// Anchor position.
        position: Position,
    },
    /// Re-clamp the open menu once its size is measured.
    PlaceContextMenu {
        /// Measured menu size.
        menu: Size,
        /// Current viewport size.
        viewport: Size,
    },
    /// Close the context menu.
    CloseContextMenu(MenuCloseReason),
    /// Run a menu action on the menu's target, then close the menu.
    ContextAction(MenuAction),
    /// Open a surface.
    OpenSurface(Surface),
    /// Close a surface.
    CloseSurface(Surface),
    /// Open the add-entry surface, editing `Some(id)` or creating when `None`.
    OpenEditor(Option<String>),
    /// Hide an entry by id.
    HideEntry(String),
    /// Unhide an entry by id.
    ShowEntry(String),
    /// Delete a custom entry by id.
    DeleteEntry(String),
    /// Create or update a custom entry.
    SubmitCustomApp(CustomAppInput),
    /// Save the settings form.
    SubmitSettings(SettingsForm),
    /// Close the settings surface.
    CloseSettings {
        /// Record that first-run setup is done.
        mark_completed: bool,
    },
    /// Switch between compact and paged layouts.
    SetLayout(LayoutMode),
    /// Caching collaborator reports the running version.
    VersionNotified(String),
    /// Close the changelog prompt and remember its version.
    DismissChangelog,
    /// Clear the catalog error banner.
    DismissError,
}

/// Outbound navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// Target URL.
    pub url: String,
    /// Open in a new tab/window.
    pub new_tab: bool,
    /// Sever `window.opener`.
    pub no_opener: bool,
    /// Omit the referrer.
    pub no_referrer: bool,
}

impl Navigation {
    /// New-tab navigation without opener or referrer.
    #[must_use]
    pub fn new_tab(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            new_tab: true,
            no_opener: true,
            no_referrer: true,
        }
    }
}

/// Side effects the host performs after an intent is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Open a URL.
    Navigate(Navigation),
    /// Move focus to the search field.
    FocusSearch {
        /// Select the whole term.
        select_all: bool,
    },
    /// Transient success message (e.g., "App saved successfully.").
    Feedback(String),
    /// Form submission was rejected; the message belongs on the form.
    ValidationFailed(ValidationError),
}
