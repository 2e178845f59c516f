// src/domain/pagination/mod.rs
//
// Pagination window computation
//
// Pure functions of (current page, total pages). No hidden state.

pub mod value_objects;

pub use value_objects::{PageWindow, PaginationState};

/// Number of page buttons rendered around the current page
pub const WINDOW_SIZE: u32 = 5;

/// Upper bound on pages the catalog API will serve
pub const MAX_PAGES: u32 = 500;

/// Map a remote `total_pages` into `[1, MAX_PAGES]`
pub fn clamp_total_pages(total_pages: u32) -> u32 {
    total_pages.clamp(1, MAX_PAGES)
}

/// Compute the bounded page window shown for `current_page`
///
/// Out-of-range input is normalized first: `total_pages` to at least 1,
/// `current_page` into `[1, total_pages]`.
pub fn page_window(current_page: u32, total_pages: u32) -> PageWindow {
    let total = total_pages.max(1);
    let current = current_page.clamp(1, total);

    let mut start = current.saturating_sub(WINDOW_SIZE / 2).max(1);
    let end = start.saturating_add(WINDOW_SIZE - 1).min(total);

    // Near the end: slide the window back so it keeps WINDOW_SIZE entries
    if end == total {
        start = end.saturating_sub(WINDOW_SIZE - 1).max(1);
    }

    PageWindow {
        pages: (start..=end).collect(),
        current,
        total,
        show_first_shortcut: start > 1,
        show_leading_ellipsis: start > 2,
        show_last_shortcut: end < total,
        show_trailing_ellipsis: end.saturating_add(1) < total,
        has_previous: current > 1,
        has_next: current < total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_page() {
        let window = page_window(1, 1);
        assert_eq!(window.pages, vec![1]);
        assert!(!window.has_previous);
        assert!(!window.has_next);
        assert!(!window.show_first_shortcut);
        assert!(!window.show_last_shortcut);
    }

    #[test]
    fn test_middle_of_large_range() {
        let window = page_window(50, 500);
        assert_eq!(window.pages, vec![48, 49, 50, 51, 52]);
        assert!(window.show_first_shortcut);
        assert!(window.show_leading_ellipsis);
        assert!(window.show_last_shortcut);
        assert!(window.show_trailing_ellipsis);
        assert!(window.has_previous);
        assert!(window.has_next);
    }

    #[test]
    fn test_last_page_slides_window_back() {
        let window = page_window(500, 500);
        assert_eq!(window.pages, vec![496, 497, 498, 499, 500]);
        assert!(!window.show_last_shortcut);
        assert!(!window.show_trailing_ellipsis);
        assert!(window.show_leading_ellipsis);
        assert!(!window.has_next);
    }

    #[test]
    fn test_first_page_of_many() {
        let window = page_window(1, 500);
        assert_eq!(window.pages, vec![1, 2, 3, 4, 5]);
        assert!(!window.show_first_shortcut);
        assert!(!window.has_previous);
        assert!(window.show_trailing_ellipsis);
    }

    #[test]
    fn test_shortcut_without_ellipsis_when_adjacent() {
        // start == 2: page 1 shortcut shown, nothing hidden between
        let window = page_window(4, 10);
        assert_eq!(window.pages, vec![2, 3, 4, 5, 6]);
        assert!(window.show_first_shortcut);
        assert!(!window.show_leading_ellipsis);

        // end == total - 1: last shortcut shown, no ellipsis
        let window = page_window(7, 10);
        assert_eq!(window.pages, vec![5, 6, 7, 8, 9]);
        assert!(window.show_last_shortcut);
        assert!(!window.show_trailing_ellipsis);
    }

    #[test]
    fn test_fewer_pages_than_window() {
        let window = page_window(2, 3);
        assert_eq!(window.pages, vec![1, 2, 3]);
        assert!(!window.show_first_shortcut);
        assert!(!window.show_last_shortcut);
    }

    #[test]
    fn test_out_of_range_input_is_normalized() {
        let window = page_window(0, 0);
        assert_eq!(window.pages, vec![1]);
        assert_eq!(window.current, 1);

        let window = page_window(900, 500);
        assert_eq!(window.current, 500);
        assert_eq!(window.pages, vec![496, 497, 498, 499, 500]);

        let window = page_window(u32::MAX, u32::MAX);
        assert_eq!(window.current, u32::MAX);
        assert_eq!(window.pages.len(), WINDOW_SIZE as usize);
        assert_eq!(window.pages.last(), Some(&u32::MAX));
        assert!(!window.has_next);
        assert!(!window.show_trailing_ellipsis);

        let window = page_window(u32::MAX - 1, u32::MAX);
        assert!(window.has_next);
        assert!(!window.show_trailing_ellipsis);
        assert!(!window.show_last_shortcut);
    }

    #[test]
    fn test_window_always_contains_current_and_is_bounded() {
        for total in 1..=40 {
            for current in 1..=total {
                let window = page_window(current, total);
                assert!(window.pages.contains(&current));
                assert_eq!(window.pages.len() as u32, total.min(WINDOW_SIZE));
                assert!(window.pages.windows(2).all(|w| w[1] == w[0] + 1));
            }
        }
    }

    #[test]
    fn test_clamp_total_pages() {
        assert_eq!(clamp_total_pages(0), 1);
        assert_eq!(clamp_total_pages(42), 42);
        assert_eq!(clamp_total_pages(48_213), MAX_PAGES);
    }
}
