//! Invariants of the pure catalog, visibility, and pagination functions.

use launchgrid::logic::sanitize::RawAppRecord;
use launchgrid::logic::{
    build_pages, dedupe_hidden_ids, ensure_unique_app_ids, normalize_page_size,
    sanitize_app_record, total_pages,
};
use launchgrid::state::{AppOrigin, LayoutMode};

use crate::common::catalog_app;

#[test]
/// What: Sanitizing a sanitized record changes nothing.
///
/// Inputs:
/// - Records with padded names, blank tags, bad icons, and each origin.
///
/// Output:
/// - `sanitize(from_entry(sanitize(raw))) == sanitize(raw)`.
fn sanitization_is_idempotent() {
    let raws = [
        RawAppRecord {
            id: Some("  mail ".into()),
            name: Some("  Mail  ".into()),
            description: Some("   ".into()),
            url: Some(" https://mail.example/inbox ".into()),
            icon: Some("javascript:alert(1)".into()),
            tags: vec![" work ".into(), String::new()],
        },
        RawAppRecord {
            name: None,
            url: Some("ftp://files.example".into()),
            ..RawAppRecord::default()
        },
        RawAppRecord {
            name: Some("Tool".into()),
            url: Some("http://tool.example".into()),
            icon: Some("data:image/png;base64,AAAA".into()),
            ..RawAppRecord::default()
        },
    ];
    for origin in [AppOrigin::Catalog, AppOrigin::Custom, AppOrigin::System] {
        for raw in &raws {
            let Some(once) = sanitize_app_record(raw, origin) else {
                continue;
            };
            let twice = sanitize_app_record(&RawAppRecord::from_entry(&once), origin)
                .expect("sanitized entry stays valid");
            assert_eq!(once, twice);
        }
    }
}

#[test]
/// What: Id allocation yields pairwise-distinct, non-empty ids.
///
/// Inputs:
/// - Duplicate ids, empty ids, and names that slug to the same value.
///
/// Output:
/// - Every id unique; the first holder of an id keeps it.
fn unique_ids_for_any_input() {
    let mut entries = vec![
        catalog_app("mail", "Mail"),
        catalog_app("mail", "Mail"),
        catalog_app("", "Mail"),
        catalog_app("", "Notes"),
        catalog_app("", "Notes!"),
        catalog_app("app-notes", "Other"),
    ];
    entries.push(catalog_app("", ""));
    let out = ensure_unique_app_ids(entries);
    assert_eq!(out.len(), 7);
    assert_eq!(out[0].id, "mail");
    let mut ids: Vec<&str> = out.iter().map(|e| e.id.as_str()).collect();
    assert!(ids.iter().all(|id| !id.is_empty()));
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 7);
}

#[test]
/// What: Deduped hidden ids all exist in the catalog, once each, in order.
fn dedupe_keeps_only_known_ids() {
    let catalog = vec![catalog_app("mail", "Mail"), catalog_app("notes", "Notes")];
    let ids: Vec<String> = ["notes", "ghost", "mail", "notes", ""]
        .iter()
        .map(ToString::to_string)
        .collect();
    let out = dedupe_hidden_ids(&ids, &catalog);
    assert_eq!(out, vec!["notes".to_string(), "mail".to_string()]);
    assert!(out.iter().all(|id| catalog.iter().any(|e| &e.id == id)));
}

#[test]
/// What: Pages reconstruct the list exactly and match `ceil(N/P)`.
///
/// Inputs:
/// - Lists of length 0..=60 with page sizes 14, 21, and 56, in both layouts.
///
/// Output:
/// - Concatenated slices equal the list; page count is `ceil(N/P)` (1 when empty).
fn pages_reconstruct_the_list() {
    for len in 0..=60usize {
        let list: Vec<usize> = (0..len).collect();
        for page_size in [14usize, 21, 56] {
            let pages = build_pages(&list, LayoutMode::Paged, page_size);
            assert_eq!(pages.concat(), list);
            let expected = if len == 0 { 1 } else { len.div_ceil(page_size) };
            assert_eq!(total_pages(len, LayoutMode::Paged, page_size), expected);
            assert_eq!(pages.len(), expected);
        }
        assert_eq!(build_pages(&list, LayoutMode::Compact, 14).concat(), list);
        assert_eq!(total_pages(len, LayoutMode::Compact, 14), 1);
    }
}

#[test]
/// What: Page size normalization is a fixed point.
fn normalized_page_size_is_fixed_point() {
    for raw in [-5.0, 0.0, 13.0, 17.4, 17.5, 30.0, 55.9, 1e9, f64::NAN] {
        let once = normalize_page_size(Some(raw));
        #[allow(clippy::cast_precision_loss)]
        let twice = normalize_page_size(Some(once as f64));
        assert_eq!(once, twice, "raw {raw}");
        assert_eq!(once % 7, 0);
        assert!((14..=56).contains(&once));
    }
    assert_eq!(normalize_page_size(None), 28);
}
