use serde::{Deserialize, Serialize};

use super::{clamp_total_pages, page_window};

/// Result of the window computation, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    /// Consecutive page numbers, at most WINDOW_SIZE of them
    pub pages: Vec<u32>,
    pub current: u32,
    pub total: u32,
    /// Render a "1" button before the window
    pub show_first_shortcut: bool,
    /// Render "..." between the first-page shortcut and the window
    pub show_leading_ellipsis: bool,
    /// Render a "{total}" button after the window
    pub show_last_shortcut: bool,
    /// Render "..." between the window and the last-page shortcut
    pub show_trailing_ellipsis: bool,
    pub has_previous: bool,
    pub has_next: bool,
}

/// Current position in a paginated collection
///
/// Invariant: `1 <= current_page <= total_pages <= MAX_PAGES` after every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    current_page: u32,
    total_pages: u32,
}

impl PaginationState {
    pub fn new() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Jump to `page`, clamped into range. Returns the page actually selected.
    pub fn go_to(&mut self, page: u32) -> u32 {
        self.current_page = page.clamp(1, self.total_pages);
        self.current_page
    }

    pub fn next(&mut self) -> u32 {
        self.go_to(self.current_page.saturating_add(1))
    }

    pub fn previous(&mut self) -> u32 {
        self.go_to(self.current_page.saturating_sub(1))
    }

    /// Apply a remote total page count; re-clamps the current page
    pub fn set_total_pages(&mut self, total_pages: u32) {
        self.total_pages = clamp_total_pages(total_pages);
        self.current_page = self.current_page.clamp(1, self.total_pages);
    }

    pub fn window(&self) -> PageWindow {
        page_window(self.current_page, self.total_pages)
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new()
    }
}
