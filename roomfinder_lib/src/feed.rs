//! Per-feed view state.
//!
//! Each independently paginated stream on the dashboard (bookings,
//! reviews, notifications, ...) is one [`Feed`]: the loaded page of items,
//! the canonical pagination record, a loading flag, and the last error.

use roomfinder_api::{ListPage, PageMeta};

const GENERIC_FEED_ERROR: &str = "Failed to load data, please try again";

/// State of one dashboard feed.
#[derive(Debug, Clone)]
pub struct Feed<T> {
    pub items: Vec<T>,
    pub pagination: PageMeta,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for Feed<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pagination: PageMeta::default(),
            loading: false,
            error: None,
        }
    }
}

impl<T> Feed<T> {
    /// Marks the feed as loading. Items stay visible while the refresh is
    /// in flight.
    pub fn begin(&mut self) {
        self.loading = true;
    }

    /// Applies a fetched page.
    ///
    /// A successful page replaces the items wholesale and overwrites the
    /// pagination record; there is no incremental merge. A soft failure
    /// only records the message: the previously loaded items stay, so the
    /// feed keeps showing last-known-good data under an error banner.
    pub fn resolve(&mut self, page: ListPage<T>) {
        self.loading = false;
        if page.success {
            self.items = page.items;
            self.pagination = page.pagination;
            self.error = None;
        } else {
            self.error = Some(
                page.message
                    .unwrap_or_else(|| GENERIC_FEED_ERROR.to_string()),
            );
        }
    }

    /// Records a hard failure. Stale items stay, same as a soft failure.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    /// The loaded items passing a display-only predicate. This is a
    /// visual sub-filter over the current page; the server-side filter
    /// and its pagination counts stay authoritative.
    pub fn visible_by<'a, F>(&'a self, predicate: F) -> Vec<&'a T>
    where
        F: Fn(&T) -> bool,
    {
        self.items.iter().filter(|item| predicate(item)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_of(items: Vec<&str>, meta: PageMeta) -> ListPage<String> {
        ListPage {
            success: true,
            message: None,
            items: items.into_iter().map(String::from).collect(),
            pagination: meta,
        }
    }

    fn soft_failure(message: &str) -> ListPage<String> {
        ListPage {
            success: false,
            message: Some(message.to_string()),
            items: Vec::new(),
            pagination: PageMeta::default(),
        }
    }

    #[test]
    fn resolve_replaces_items_wholesale() {
        let mut feed = Feed::default();
        feed.resolve(page_of(vec!["a", "b"], PageMeta::new(1, 2, 12, 10)));
        feed.resolve(page_of(vec!["c"], PageMeta::new(2, 2, 12, 10)));

        assert_eq!(feed.items, vec!["c"]);
        assert_eq!(feed.pagination.current_page, 2);
        assert_eq!(feed.error, None);
    }

    #[test]
    fn resolve_is_idempotent() {
        let mut first = Feed::default();
        let mut second = Feed::default();
        first.resolve(page_of(vec!["a"], PageMeta::new(1, 1, 1, 10)));
        second.resolve(page_of(vec!["a"], PageMeta::new(1, 1, 1, 10)));
        second.resolve(page_of(vec!["a"], PageMeta::new(1, 1, 1, 10)));

        assert_eq!(first.items, second.items);
        assert_eq!(first.pagination, second.pagination);
        assert_eq!(first.error, second.error);
        assert_eq!(first.loading, second.loading);
    }

    #[test]
    fn soft_failure_keeps_stale_items() {
        let mut feed = Feed::default();
        feed.resolve(page_of(vec!["a", "b"], PageMeta::new(1, 1, 2, 10)));
        feed.begin();
        feed.resolve(soft_failure("backend unhappy"));

        assert_eq!(feed.items, vec!["a", "b"]);
        assert_eq!(feed.error.as_deref(), Some("backend unhappy"));
        assert!(!feed.loading);
    }

    #[test]
    fn hard_failure_keeps_stale_items() {
        let mut feed = Feed::default();
        feed.resolve(page_of(vec!["a"], PageMeta::new(1, 1, 1, 10)));
        feed.fail("connection lost");

        assert_eq!(feed.items, vec!["a"]);
        assert_eq!(feed.error.as_deref(), Some("connection lost"));
    }

    #[test]
    fn success_clears_previous_error() {
        let mut feed = Feed::default();
        feed.fail("oops");
        feed.resolve(page_of(vec!["a"], PageMeta::new(1, 1, 1, 10)));
        assert_eq!(feed.error, None);
    }

    #[test]
    fn visible_by_filters_display_only() {
        let mut feed = Feed::default();
        feed.resolve(page_of(vec!["apple", "pear", "avocado"], PageMeta::new(1, 1, 3, 10)));
        let visible = feed.visible_by(|item| item.starts_with('a'));
        assert_eq!(visible, vec!["apple", "avocado"]);
        // The underlying page is untouched.
        assert_eq!(feed.items.len(), 3);
    }
}
