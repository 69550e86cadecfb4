//! Page slicing for the two grid layouts.

use crate::state::types::LayoutMode;

/// Page size used when nothing valid is stored.
pub const DEFAULT_PAGE_SIZE: usize = 28;
/// Smallest selectable page size.
pub const MIN_PAGE_SIZE: usize = 14;
/// Largest selectable page size.
pub const MAX_PAGE_SIZE: usize = 56;
/// Page sizes are multiples of this step.
pub const PAGE_SIZE_STEP: usize = 7;

/// What: Clamp and step a raw page-size value.
///
/// Inputs:
/// - `value`: Raw value; `None` or non-finite means "not set".
///
/// Output:
/// - A multiple of [`PAGE_SIZE_STEP`] within `[MIN_PAGE_SIZE, MAX_PAGE_SIZE]`.
///
/// Details:
/// - Clamp, round to the nearest integer, round to the nearest step, clamp
///   again. Feeding the output back in returns it unchanged.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn normalize_page_size(value: Option<f64>) -> usize {
    let Some(raw) = value.filter(|v| v.is_finite()) else {
        return DEFAULT_PAGE_SIZE;
    };
    let clamped = raw.clamp(MIN_PAGE_SIZE as f64, MAX_PAGE_SIZE as f64).round();
    let step = PAGE_SIZE_STEP as f64;
    let stepped = ((clamped / step).round() * step) as usize;
    stepped.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE)
}

/// What: Number of entries per page for the active layout.
///
/// Inputs:
/// - `mode`: Layout mode.
/// - `total`: Length of the filtered list.
/// - `page_size`: Configured page size (0 means default).
///
/// Output:
/// - Compact: `max(total, 1)`. Paged: `page_size` or the default.
#[must_use]
pub const fn effective_page_size(mode: LayoutMode, total: usize, page_size: usize) -> usize {
    match mode {
        LayoutMode::Compact => {
            if total == 0 {
                1
            } else {
                total
            }
        }
        LayoutMode::Paged => {
            if page_size == 0 {
                DEFAULT_PAGE_SIZE
            } else {
                page_size
            }
        }
    }
}

/// What: Page count for a list of `len` entries.
///
/// Output:
/// - Compact: 1. Paged: `max(1, ceil(len / page_size))`.
#[must_use]
pub const fn total_pages(len: usize, mode: LayoutMode, page_size: usize) -> usize {
    match mode {
        LayoutMode::Compact => 1,
        LayoutMode::Paged => {
            let size = effective_page_size(mode, len, page_size);
            let pages = len.div_ceil(size);
            if pages == 0 { 1 } else { pages }
        }
    }
}

/// What: Slice one page out of `list`.
///
/// Inputs:
/// - `list`: Full filtered list.
/// - `page_index`: Zero-based page.
/// - `page_size`: Entries per page.
///
/// Output:
/// - `list[page_index * page_size ..][..page_size]`, empty past the end.
#[must_use]
pub fn paginate<T>(list: &[T], page_index: usize, page_size: usize) -> &[T] {
    let start = page_index.saturating_mul(page_size).min(list.len());
    let end = start.saturating_add(page_size).min(list.len());
    &list[start..end]
}

/// Every page of `list` in order, as laid out for `mode`.
#[must_use]
pub fn build_pages<T>(list: &[T], mode: LayoutMode, page_size: usize) -> Vec<&[T]> {
    let size = effective_page_size(mode, list.len(), page_size);
    (0..total_pages(list.len(), mode, page_size))
        .map(|page| paginate(list, page, size))
        .collect()
}

/// What: Clamp a requested page into the valid range.
///
/// Output:
/// - Compact: always 0. Paged: `min(page, total_pages - 1)`.
#[must_use]
pub const fn clamp_page(page: usize, len: usize, mode: LayoutMode, page_size: usize) -> usize {
    match mode {
        LayoutMode::Compact => 0,
        LayoutMode::Paged => {
            let last = total_pages(len, mode, page_size) - 1;
            if page > last { last } else { page }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Page-size normalization clamps, steps, and is a fixed point.
    ///
    /// Inputs:
    /// - Absent, non-finite, out-of-range, and off-step values; then every
    ///   normalized output fed back in.
    ///
    /// Output:
    /// - Defaults for unusable input, stepped values otherwise, stable on reapply.
    fn normalize_page_size_rules() {
        assert_eq!(normalize_page_size(None), DEFAULT_PAGE_SIZE);
        assert_eq!(normalize_page_size(Some(f64::NAN)), DEFAULT_PAGE_SIZE);
        assert_eq!(normalize_page_size(Some(f64::INFINITY)), DEFAULT_PAGE_SIZE);
        assert_eq!(normalize_page_size(Some(3.0)), MIN_PAGE_SIZE);
        assert_eq!(normalize_page_size(Some(500.0)), MAX_PAGE_SIZE);
        assert_eq!(normalize_page_size(Some(30.0)), 28);
        assert_eq!(normalize_page_size(Some(32.0)), 35);
        assert_eq!(normalize_page_size(Some(17.4)), 14);
        for raw in 0..80 {
            let once = normalize_page_size(Some(f64::from(raw)));
            #[allow(clippy::cast_precision_loss)]
            let twice = normalize_page_size(Some(once as f64));
            assert_eq!(once, twice);
            assert_eq!(once % PAGE_SIZE_STEP, 0);
        }
    }

    #[test]
    /// What: 30 entries at 14 per page make three pages; page 2 holds 28..30.
    fn paged_slicing() {
        let list: Vec<usize> = (0..30).collect();
        assert_eq!(total_pages(list.len(), LayoutMode::Paged, 14), 3);
        assert_eq!(paginate(&list, 2, 14), &[28, 29]);
        assert!(paginate(&list, 5, 14).is_empty());
        assert_eq!(total_pages(0, LayoutMode::Paged, 14), 1);
    }

    #[test]
    /// What: Concatenating all pages reconstructs the list in both modes.
    fn pages_reconstruct_list() {
        for len in [0usize, 1, 13, 14, 15, 28, 57] {
            let list: Vec<usize> = (0..len).collect();
            for mode in [LayoutMode::Paged, LayoutMode::Compact] {
                let pages = build_pages(&list, mode, 14);
                let joined: Vec<usize> = pages.concat();
                assert_eq!(joined, list);
                if mode == LayoutMode::Paged {
                    assert_eq!(pages.len(), len.div_ceil(14).max(1));
                } else {
                    assert_eq!(pages.len(), 1);
                }
            }
        }
    }

    #[test]
    /// What: Compact mode is one page sized to the list.
    fn compact_is_single_page() {
        assert_eq!(effective_page_size(LayoutMode::Compact, 0, 28), 1);
        assert_eq!(effective_page_size(LayoutMode::Compact, 90, 28), 90);
        assert_eq!(effective_page_size(LayoutMode::Paged, 90, 0), DEFAULT_PAGE_SIZE);
        assert_eq!(clamp_page(4, 90, LayoutMode::Compact, 28), 0);
        assert_eq!(clamp_page(4, 30, LayoutMode::Paged, 14), 2);
        assert_eq!(clamp_page(1, 30, LayoutMode::Paged, 14), 1);
    }
}
