//! Pagination math: which items to request and which page links to show.
//!
//! Every function here is pure. Page numbers are 1-based, item indices
//! 0-based; an `item_count` of 0 means the total is not known yet.

use pubassist_types::ItemRange;
use serde::{Deserialize, Serialize};

/// Maximum number of page links shown in a strip.
pub const WINDOW_SIZE: usize = 12;

/// Pages shown before the current one when the window is not clamped.
const WINDOW_LEAD: usize = 5;

/// Number of the last page, or 0 when the item count is unknown.
pub fn last_page(item_count: usize, page_size: usize) -> usize {
    if item_count == 0 {
        0
    } else {
        item_count.div_ceil(page_size.max(1))
    }
}

/// Inclusive span of item indices to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchRange {
    pub start_index: usize,
    pub end_index: usize,
}

impl FetchRange {
    /// `Range` header value, or `None` when the span lies past the known end.
    pub fn item_range(&self) -> Option<ItemRange> {
        ItemRange::new(self.start_index, self.end_index).ok()
    }
}

/// Compute the items to request for `page`, prefetching `fetch_radius`
/// pages on each side.
///
/// Indices saturate at `usize::MAX` for absurd page numbers. When the item
/// count is known the end is clamped to it. The clamp uses
/// `item_count` itself rather than `item_count - 1`; the backend
/// truncates the overshoot.
pub fn compute_fetch_range(
    page: usize,
    item_count: usize,
    page_size: usize,
    fetch_radius: usize,
) -> FetchRange {
    let page = page.max(1);
    let page_size = page_size.max(1);

    let start_page = page.saturating_sub(fetch_radius).max(1);
    let end_page = page.saturating_add(fetch_radius);

    let start_index = (start_page - 1).saturating_mul(page_size);
    let unclamped_end = end_page.saturating_mul(page_size) - 1;
    let end_index = if item_count > 0 {
        unclamped_end.min(item_count)
    } else {
        unclamped_end
    };

    FetchRange {
        start_index,
        end_index,
    }
}

/// Previous/next navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLink {
    pub page: usize,
    pub enabled: bool,
}

/// One numbered page in the strip; the current page is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEntry {
    pub page_num: usize,
    pub enabled: bool,
}

/// "..." affordance jumping just outside the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ellipsis {
    pub enabled: bool,
    pub page_num: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageStrip {
    /// Enables "jump to first"
    pub first: bool,
    pub previous: PageLink,
    pub next: PageLink,
    pub pages: Vec<PageEntry>,
    pub more_left: Ellipsis,
    pub more_right: Ellipsis,
}

impl PageStrip {
    pub fn current_page(&self) -> Option<usize> {
        self.pages
            .iter()
            .find(|entry| !entry.enabled)
            .map(|entry| entry.page_num)
    }
}

/// Build the page strip for `page`.
///
/// The window starts five pages before the current one (never before
/// page 1) and spans at most [`WINDOW_SIZE`] pages, clamped to the last
/// page. With an unknown item count the strip has no numbered pages and
/// "next" stays enabled.
pub fn compute_page_strip(page: usize, item_count: usize, page_size: usize) -> PageStrip {
    let last = last_page(item_count, page_size);

    let window_start = page.saturating_sub(WINDOW_LEAD).max(1);
    let window_end = window_start.saturating_add(WINDOW_SIZE - 1).min(last);

    let pages = (window_start..=window_end)
        .map(|page_num| PageEntry {
            page_num,
            enabled: page_num != page,
        })
        .collect();

    PageStrip {
        first: page != 1,
        previous: PageLink {
            page: page.saturating_sub(1),
            enabled: page != 1,
        },
        next: PageLink {
            page: page.saturating_add(1),
            enabled: !(page == last && last != 0),
        },
        pages,
        more_left: Ellipsis {
            enabled: window_start != 1,
            page_num: window_start - 1,
        },
        more_right: Ellipsis {
            enabled: window_end != last,
            page_num: window_end.saturating_add(1),
        },
    }
}

/// Pagination position of one result view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    pub current_page: usize,
    pub page_size: usize,
    pub item_count: usize,
}

impl PaginationState {
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
            item_count: 0,
        }
    }

    pub fn last_page(&self) -> usize {
        last_page(self.item_count, self.page_size)
    }

    /// Move to `page`, clamping to 1 from below.
    pub fn go_to(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    pub fn fetch_range(&self, fetch_radius: usize) -> FetchRange {
        compute_fetch_range(
            self.current_page,
            self.item_count,
            self.page_size,
            fetch_radius,
        )
    }

    pub fn page_strip(&self) -> PageStrip {
        compute_page_strip(self.current_page, self.item_count, self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_page() {
        assert_eq!(last_page(0, 10), 0);
        assert_eq!(last_page(1, 10), 1);
        assert_eq!(last_page(10, 10), 1);
        assert_eq!(last_page(11, 10), 2);
        assert_eq!(last_page(95, 10), 10);
    }

    #[test]
    fn test_fetch_range_first_page() {
        let range = compute_fetch_range(1, 95, 10, 0);
        assert_eq!(
            range,
            FetchRange {
                start_index: 0,
                end_index: 9
            }
        );
    }

    #[test]
    fn test_fetch_range_with_radius() {
        let range = compute_fetch_range(4, 0, 10, 1);
        assert_eq!(range.start_index, 20);
        assert_eq!(range.end_index, 49);
    }

    #[test]
    fn test_fetch_range_radius_clamped_at_first_page() {
        let range = compute_fetch_range(1, 0, 10, 1);
        assert_eq!(range.start_index, 0);
        assert_eq!(range.end_index, 19);
    }

    #[test]
    fn test_fetch_range_clamped_to_item_count() {
        let range = compute_fetch_range(10, 95, 10, 1);
        assert_eq!(range.start_index, 80);
        assert_eq!(range.end_index, 95);
    }

    #[test]
    fn test_fetch_range_past_end_has_no_item_range() {
        let range = compute_fetch_range(20, 95, 10, 0);
        assert!(range.item_range().is_none());
    }

    #[test]
    fn test_strip_on_first_page() {
        let strip = compute_page_strip(1, 95, 10);
        assert!(!strip.first);
        assert!(!strip.previous.enabled);
        assert!(strip.next.enabled);
        assert_eq!(strip.pages.len(), 10);
        assert!(!strip.more_left.enabled);
        assert!(!strip.more_right.enabled);
        assert_eq!(strip.current_page(), Some(1));
    }

    #[test]
    fn test_strip_on_last_page_disables_next() {
        let strip = compute_page_strip(10, 95, 10);
        assert!(!strip.next.enabled);
        assert!(strip.previous.enabled);
        assert_eq!(strip.previous.page, 9);
    }

    #[test]
    fn test_strip_unknown_count_keeps_next_enabled() {
        let strip = compute_page_strip(1, 0, 10);
        assert!(strip.pages.is_empty());
        assert!(strip.next.enabled);
        assert!(!strip.more_right.enabled);
    }

    #[test]
    fn test_strip_window_in_the_middle() {
        let strip = compute_page_strip(20, 1000, 10);
        let numbers: Vec<usize> = strip.pages.iter().map(|p| p.page_num).collect();
        assert_eq!(numbers, (15..=26).collect::<Vec<_>>());
        assert!(strip.more_left.enabled);
        assert_eq!(strip.more_left.page_num, 14);
        assert!(strip.more_right.enabled);
        assert_eq!(strip.more_right.page_num, 27);
    }

    #[test]
    fn test_huge_page_saturates() {
        let range = compute_fetch_range(usize::MAX / 5, 0, 10, 1);
        assert_eq!(range.end_index, usize::MAX - 1);
        assert_eq!(range.start_index, usize::MAX);
        assert_eq!(range.item_range(), None);

        let range = compute_fetch_range(usize::MAX, 95, 10, 1);
        assert_eq!(range.end_index, 95);
        assert_eq!(range.item_range(), None);

        let strip = compute_page_strip(usize::MAX, 95, 10);
        assert!(strip.pages.is_empty());
        assert_eq!(strip.next.page, usize::MAX);
    }

    #[test]
    fn test_state_navigation() {
        let mut state = PaginationState::new(10);
        state.item_count = 42;
        state.go_to(0);
        assert_eq!(state.current_page, 1);
        state.go_to(5);
        assert_eq!(state.last_page(), 5);
        assert!(!state.page_strip().next.enabled);
        assert_eq!(state.fetch_range(0).start_index, 40);
    }
}
