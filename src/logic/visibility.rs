//! Visible/hidden partitioning of the combined catalog.

use std::collections::HashSet;

use crate::state::types::AppEntry;

/// Catalog split into what the grid shows and what the user hid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitApps {
    /// Entries not in the hidden set, catalog order.
    pub visible: Vec<AppEntry>,
    /// Entries in the hidden set, catalog order.
    pub hidden: Vec<AppEntry>,
}

/// What: Prune an untrusted hidden-id list against the current catalog.
///
/// Inputs:
/// - `ids`: Persisted hidden ids (may hold blanks, duplicates, stale ids).
/// - `catalog`: Combined catalog.
///
/// Output:
/// - Trimmed ids, first occurrence only, each present in `catalog`.
#[must_use]
pub fn dedupe_hidden_ids(ids: &[String], catalog: &[AppEntry]) -> Vec<String> {
    let valid: HashSet<&str> = catalog.iter().map(|entry| entry.id.as_str()).collect();
    let mut seen: HashSet<&str> = HashSet::new();
    ids.iter()
        .map(|id| id.trim())
        .filter(|id| !id.is_empty() && valid.contains(id) && seen.insert(*id))
        .map(ToString::to_string)
        .collect()
}

/// What: Partition the catalog by the (pruned) hidden-id set.
///
/// Inputs:
/// - `catalog`: Combined catalog.
/// - `hidden_ids`: Hidden ids, pruned here before use.
///
/// Output:
/// - [`SplitApps`] preserving catalog order in both halves.
#[must_use]
pub fn split_apps(catalog: &[AppEntry], hidden_ids: &[String]) -> SplitApps {
    let pruned = dedupe_hidden_ids(hidden_ids, catalog);
    let hidden_set: HashSet<&str> = pruned.iter().map(String::as_str).collect();
    let (hidden, visible): (Vec<AppEntry>, Vec<AppEntry>) = catalog
        .iter()
        .cloned()
        .partition(|entry| hidden_set.contains(entry.id.as_str()));
    SplitApps { visible, hidden }
}
