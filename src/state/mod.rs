//! Launcher state: value types, modal surfaces, intents, and the state object.

pub mod app_state;
pub mod intent;
pub mod modal;
pub mod types;

pub use app_state::LauncherState;
pub use intent::{Effect, Intent, Navigation};
pub use modal::Surfaces;
pub use types::{
    AppEntry, AppOrigin, ContextMenuSource, EntryKind, HIDDEN_GROUP_ID, LayoutMode, Position,
    Size, Surface,
};
