//! Pagination display derivation.
//!
//! Pure functions from a [`PageMeta`] to what the pagination strip shows:
//! the "x to y of z" range, the sliding window of page buttons, and the
//! Previous/Next enabled states.

use roomfinder_api::PageMeta;

/// Maximum number of page buttons shown at once.
pub const MAX_VISIBLE_PAGES: i64 = 5;

/// The "showing x to y of z" label, or "No <noun> found" when the result
/// set is empty, whatever the other fields claim.
pub fn range_label(meta: &PageMeta, noun: &str) -> String {
    if meta.total_items == 0 {
        return format!("No {} found", noun);
    }
    let start = (meta.current_page - 1) * meta.items_per_page + 1;
    let end = (meta.current_page * meta.items_per_page).min(meta.total_items);
    format!("{} to {} of {}", start, end, meta.total_items)
}

/// A sliding window of at most [`MAX_VISIBLE_PAGES`] consecutive page
/// numbers centered on the current page, clamped to `[1, total_pages]`.
pub fn page_window(meta: &PageMeta) -> Vec<i64> {
    let total = meta.total_pages;
    let visible = MAX_VISIBLE_PAGES.min(total);
    let mut start = meta.current_page - MAX_VISIBLE_PAGES / 2;
    if start < 1 {
        start = 1;
    }
    if start + visible - 1 > total {
        start = total - visible + 1;
    }
    (start..start + visible).collect()
}

/// Previous is enabled on every page except the first.
pub fn has_previous(meta: &PageMeta) -> bool {
    meta.current_page > 1
}

/// Next is enabled on every page except the last.
pub fn has_next(meta: &PageMeta) -> bool {
    meta.current_page < meta.total_pages
}
