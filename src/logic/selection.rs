//! Active-index movement over the filtered list.
//!
//! The active index always refers to the full filtered list, never to a page
//! slice; the current page is derived from it.

/// What: Resolve an explicit focus/click index.
///
/// Inputs:
/// - `index`: Requested index.
/// - `len`: Filtered list length.
///
/// Output:
/// - `Some(min(index, len - 1))`, or `None` for an empty list.
#[must_use]
pub const fn clamp_index(index: usize, len: usize) -> Option<usize> {
    if len == 0 {
        None
    } else if index >= len {
        Some(len - 1)
    } else {
        Some(index)
    }
}

/// What: Move the active index by `delta`, wrapping at both ends.
///
/// Inputs:
/// - `current`: Current active index (`None` = no selection).
/// - `delta`: Signed step; Tab is `+1`, Shift+Tab is `-1`.
/// - `len`: Filtered list length.
///
/// Output:
/// - New index. From no selection, a forward step lands on 0 and a backward
///   step on the last index. An empty list leaves `current` as is.
#[must_use]
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub const fn advance(current: Option<usize>, delta: isize, len: usize) -> Option<usize> {
    if len == 0 || delta == 0 {
        return current;
    }
    match current {
        None => {
            if delta > 0 {
                Some(0)
            } else {
                Some(len - 1)
            }
        }
        Some(index) => {
            let base = (if index >= len { len - 1 } else { index }) as isize;
            Some((base + delta).rem_euclid(len as isize) as usize)
        }
    }
}

/// What: Active index after the search term changed.
///
/// Inputs:
/// - `term`: New search term.
/// - `len`: Length of the new filtered list.
///
/// Output:
/// - `Some(0)` for a non-blank term with results; `None` otherwise.
#[must_use]
pub fn after_search_change(term: &str, len: usize) -> Option<usize> {
    if term.trim().is_empty() || len == 0 {
        None
    } else {
        Some(0)
    }
}

/// Keep an existing selection inside a list that may have shrunk.
#[must_use]
pub const fn clamp_to_len(current: Option<usize>, len: usize) -> Option<usize> {
    match current {
        Some(index) => clamp_index(index, len),
        None => None,
    }
}

/// Page holding `index` for the given effective page size.
#[must_use]
pub const fn page_for_index(index: usize, page_size: usize) -> usize {
    if page_size == 0 { 0 } else { index / page_size }
}
