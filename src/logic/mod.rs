//! Pure launcher logic: sanitizing, catalog assembly, visibility, search,
//! paging, selection, the entry editor, and the context menu.

pub mod catalog;
pub mod context_menu;
pub mod editor;
pub mod filter;
pub mod pagination;
pub mod sanitize;
pub mod selection;
pub mod visibility;

// Re-export the operations the state layer and integration tests reach for.
pub use catalog::{assemble_catalog, ensure_unique_app_ids, icon_library, map_catalog_apps};
pub use filter::{build_filtered_list, build_hidden_apps_group, filter_apps};
pub use pagination::{
    build_pages, clamp_page, effective_page_size, normalize_page_size, paginate, total_pages,
};
pub use sanitize::{sanitize_app_record, sanitize_http_url, sanitize_icon_source};
pub use visibility::{SplitApps, dedupe_hidden_ids, split_apps};

