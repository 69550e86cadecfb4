use crate::state::types::{AppEntry, AppOrigin, EntryKind, HIDDEN_GROUP_ID};

/// Icon of the synthetic hidden-apps entry.
pub const HIDDEN_GROUP_ICON: &str = "https://img.icons8.com/ios-filled/100/ffffff/invisible.png";

/// What: Case-insensitive search over visible entries.
///
/// Inputs:
/// - `apps`: Candidate entries.
/// - `term`: Raw search term; trimmed before matching.
///
/// Output:
/// - Entries whose name, space-joined tags, or description contains the term.
///   A blank term returns every entry.
///
/// Details:
/// - Fields are checked independently so a match never spans two fields.
#[must_use]
pub fn filter_apps(apps: &[AppEntry], term: &str) -> Vec<AppEntry> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return apps.to_vec();
    }
    apps.iter()
        .filter(|entry| {
            entry.name.to_lowercase().contains(&needle)
                || entry.tags.join(" ").to_lowercase().contains(&needle)
                || entry
                    .description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// What: Synthesize the "hidden apps" entry shown at the end of the grid.
///
/// Inputs:
/// - `count`: Number of hidden entries.
///
/// Output:
/// - System-origin entry with the reserved id and count-aware copy.
#[must_use]
pub fn build_hidden_apps_group(count: usize) -> AppEntry {
    let (name, description) = if count == 1 {
        ("Hidden app", "Open to restore the hidden app.")
    } else {
        ("Hidden apps", "Open to manage hidden apps.")
    };
    AppEntry {
        id: HIDDEN_GROUP_ID.to_string(),
        name: name.to_string(),
        description: Some(description.to_string()),
        url: None,
        icon: HIDDEN_GROUP_ICON.to_string(),
        tags: Vec::new(),
        origin: AppOrigin::System,
        kind: EntryKind::HiddenGroup {
            hidden_count: count,
        },
    }
}

/// What: Build the list the grid displays.
///
/// Inputs:
/// - `visible`: Visible entries.
/// - `hidden_count`: Number of hidden entries.
/// - `term`: Current search term.
///
/// Output:
/// - Blank term: all visible entries plus the hidden group when anything is hidden.
/// - Otherwise: matching visible entries only.
#[must_use]
pub fn build_filtered_list(visible: &[AppEntry], hidden_count: usize, term: &str) -> Vec<AppEntry> {
    if term.trim().is_empty() {
        let mut list = visible.to_vec();
        if hidden_count > 0 {
            list.push(build_hidden_apps_group(hidden_count));
        }
        list
    } else {
        filter_apps(visible, term)
    }
}
