//! Tab and pagination state for the dashboard.
//!
//! Modeled as an explicit immutable state machine so the reset-on-change
//! invariant is testable without any rendering layer: every transition
//! consumes the old state and returns the new one.

use shared::Tab;

/// Fixed page size of the dashboard grid.
pub const ITEMS_PER_PAGE: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardState {
    pub active_tab: Tab,
    /// 1-indexed current page.
    pub current_page: usize,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            active_tab: Tab::All,
            current_page: 1,
        }
    }
}

impl DashboardState {
    /// Switching tabs always lands on page 1.
    pub fn select_tab(self, tab: Tab) -> Self {
        Self {
            active_tab: tab,
            current_page: 1,
        }
    }

    /// Any filter change resets to page 1 so the user is never left on an
    /// out-of-range page.
    pub fn filters_changed(self) -> Self {
        Self {
            current_page: 1,
            ..self
        }
    }

    /// Move to page `page` if it is within `[1, total_pages]`; otherwise a
    /// no-op.
    pub fn go_to_page(self, page: usize, total_pages: usize) -> Self {
        if page >= 1 && page <= total_pages {
            Self {
                current_page: page,
                ..self
            }
        } else {
            self
        }
    }
}

/// Page count for a collection of `count` items. Recomputed from the
/// current filtered collection on every pass, never cached.
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(ITEMS_PER_PAGE)
}

/// The slice of `items` displayed on `page` (1-indexed). Pages past the end
/// are empty.
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    let start = page.saturating_sub(1) * ITEMS_PER_PAGE;
    if start >= items.len() {
        return &[];
    }
    let end = (start + ITEMS_PER_PAGE).min(items.len());
    &items[start..end]
}
