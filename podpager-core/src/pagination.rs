use std::ops::Range;

/// Number of items shown per page
pub const PAGE_SIZE: usize = 5;

/// Ceiling division of `total_items` by `page_size`. Zero items means zero pages.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size)
}

/// Index range of the items on a 1-indexed `page`, cut off at `total_items`
pub fn page_range(page: usize, page_size: usize, total_items: usize) -> Range<usize> {
    let start = page.saturating_sub(1) * page_size;
    let end = (page * page_size).min(total_items);
    start.min(end)..end
}

/// Page navigation state, 1-indexed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageNavigation {
    current_page: usize,
    total_items: usize,
    page_size: usize,
}

impl PageNavigation {
    pub fn new(total_items: usize, page_size: usize) -> Self {
        assert!(page_size > 0, "page size must be positive");
        Self {
            current_page: 1,
            total_items,
            page_size,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.page_size)
    }

    /// Highest page that can be shown. Page 1 always exists, even with no items.
    pub fn last_page(&self) -> usize {
        self.total_pages().max(1)
    }

    /// Previous is usable everywhere except page 1
    pub fn can_go_prev(&self) -> bool {
        self.current_page != 1
    }

    /// Next is usable everywhere except the last page. With no items there is
    /// no last page to reach, so this stays true.
    pub fn can_go_next(&self) -> bool {
        self.current_page != self.total_pages()
    }

    pub fn prev_page(&mut self) -> bool {
        if !self.can_go_prev() {
            return false;
        }
        let before = self.current_page;
        self.go_to_page(before - 1) != before
    }

    pub fn next_page(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        let before = self.current_page;
        self.go_to_page(before + 1) != before
    }

    /// Jump to `page`, clamped into `1..=last_page()`. Returns the page now current.
    pub fn go_to_page(&mut self, page: usize) -> usize {
        self.current_page = page.clamp(1, self.last_page());
        self.current_page
    }

    pub fn visible_range(&self) -> Range<usize> {
        page_range(self.current_page, self.page_size, self.total_items)
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible_range().contains(&index)
    }

    pub fn is_current(&self, page: usize) -> bool {
        page == self.current_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_is_ceiling_division() {
        assert_eq!(total_pages(0, PAGE_SIZE), 0);
        assert_eq!(total_pages(1, PAGE_SIZE), 1);
        assert_eq!(total_pages(5, PAGE_SIZE), 1);
        assert_eq!(total_pages(6, PAGE_SIZE), 2);
        assert_eq!(total_pages(12, PAGE_SIZE), 3);
        assert_eq!(total_pages(15, PAGE_SIZE), 3);
        assert_eq!(total_pages(16, PAGE_SIZE), 4);
    }

    #[test]
    fn page_range_cuts_off_last_page() {
        assert_eq!(page_range(1, 5, 12), 0..5);
        assert_eq!(page_range(2, 5, 12), 5..10);
        assert_eq!(page_range(3, 5, 12), 10..12);
        assert_eq!(page_range(1, 5, 0), 0..0);
        assert_eq!(page_range(4, 5, 12), 12..12);
    }

    #[test]
    fn starts_on_first_page() {
        let nav = PageNavigation::new(12, PAGE_SIZE);
        assert_eq!(nav.current_page(), 1);
        assert!(!nav.can_go_prev());
        assert!(nav.can_go_next());
        assert_eq!(nav.visible_range(), 0..5);
    }

    #[test]
    fn walks_forward_and_stops_at_ceiling() {
        let mut nav = PageNavigation::new(12, PAGE_SIZE);
        assert!(nav.next_page());
        assert!(nav.next_page());
        assert_eq!(nav.current_page(), 3);
        assert!(!nav.can_go_next());
        assert!(!nav.next_page());
        assert_eq!(nav.current_page(), 3);
        assert_eq!(nav.visible_range(), 10..12);
    }

    #[test]
    fn prev_at_floor_is_noop() {
        let mut nav = PageNavigation::new(12, PAGE_SIZE);
        assert!(!nav.prev_page());
        assert_eq!(nav.current_page(), 1);
    }

    #[test]
    fn go_to_page_clamps_out_of_range() {
        let mut nav = PageNavigation::new(12, PAGE_SIZE);
        assert_eq!(nav.go_to_page(7), 3);
        assert_eq!(nav.go_to_page(0), 1);
        assert_eq!(nav.go_to_page(2), 2);
    }

    #[test]
    fn no_items_keeps_next_enabled_but_inert() {
        let mut nav = PageNavigation::new(0, PAGE_SIZE);
        assert_eq!(nav.total_pages(), 0);
        assert_eq!(nav.current_page(), 1);
        assert!(nav.can_go_next());
        assert!(!nav.next_page());
        assert_eq!(nav.current_page(), 1);
        assert!(nav.visible_range().is_empty());
    }

    #[test]
    fn single_page_disables_both_directions() {
        let nav = PageNavigation::new(3, PAGE_SIZE);
        assert!(!nav.can_go_prev());
        assert!(!nav.can_go_next());
        assert!(nav.is_visible(2));
        assert!(!nav.is_visible(3));
    }
}
