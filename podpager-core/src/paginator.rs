use crate::pagination::{PAGE_SIZE, PageNavigation};
use crate::surface::{NavButton, PagerEvent, PagerSurface};
use std::ops::Range;
use tracing::{debug, warn};

/// A page control together with the page number it was created for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageButton<B> {
    pub page: usize,
    pub handle: B,
}

/// Read-only summary of everything derived from the current page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerSnapshot {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub visible: Range<usize>,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

/// Splits a fixed list of items into pages and keeps a surface in sync with
/// the current page.
#[derive(Debug)]
pub struct Paginator<S: PagerSurface> {
    surface: S,
    items: Vec<S::Item>,
    page_buttons: Vec<PageButton<S::Button>>,
    nav: PageNavigation,
}

impl<S: PagerSurface> Paginator<S> {
    /// Capture `items`, create one page control per page and show page 1.
    pub fn initialize(surface: S, items: Vec<S::Item>) -> Self {
        let nav = PageNavigation::new(items.len(), PAGE_SIZE);
        let mut paginator = Self {
            surface,
            items,
            page_buttons: Vec::new(),
            nav,
        };

        for page in 1..=paginator.nav.total_pages() {
            let handle = paginator.surface.create_page_button(page);
            paginator.page_buttons.push(PageButton { page, handle });
        }

        debug!(
            items = paginator.items.len(),
            total_pages = paginator.nav.total_pages(),
            "Initialized paginator"
        );

        paginator.refresh();
        paginator
    }

    pub fn current_page(&self) -> usize {
        self.nav.current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.nav.total_pages()
    }

    pub fn page_size(&self) -> usize {
        self.nav.page_size()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[S::Item] {
        &self.items
    }

    pub fn page_buttons(&self) -> &[PageButton<S::Button>] {
        &self.page_buttons
    }

    pub fn visible_range(&self) -> Range<usize> {
        self.nav.visible_range()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn snapshot(&self) -> PagerSnapshot {
        PagerSnapshot {
            current_page: self.nav.current_page(),
            total_pages: self.nav.total_pages(),
            total_items: self.items.len(),
            visible: self.nav.visible_range(),
            prev_enabled: self.nav.can_go_prev(),
            next_enabled: self.nav.can_go_next(),
        }
    }

    /// Show `page`. Pages outside `1..=total_pages` are clamped.
    pub fn go_to_page(&mut self, page: usize) {
        let shown = self.nav.go_to_page(page);
        if shown != page {
            warn!(
                requested = page,
                shown,
                total_pages = self.nav.total_pages(),
                "Requested page out of range, clamped"
            );
        }
        debug!(page = shown, "Going to page");
        self.refresh();
    }

    pub fn previous_page(&mut self) {
        if self.nav.prev_page() {
            debug!(page = self.nav.current_page(), "Moved to previous page");
            self.refresh();
        }
    }

    pub fn next_page(&mut self) {
        if self.nav.next_page() {
            debug!(page = self.nav.current_page(), "Moved to next page");
            self.refresh();
        }
    }

    pub fn handle(&mut self, event: PagerEvent) {
        match event {
            PagerEvent::Previous => self.previous_page(),
            PagerEvent::Next => self.next_page(),
            PagerEvent::Page(page) => self.go_to_page(page),
        }
    }

    /// Push the derived state for the current page to the surface.
    fn refresh(&mut self) {
        for (idx, item) in self.items.iter().enumerate() {
            self.surface.set_visible(item, self.nav.is_visible(idx));
        }
        self.update_buttons();
    }

    fn update_buttons(&mut self) {
        self.surface.set_enabled(NavButton::Previous, self.nav.can_go_prev());
        self.surface.set_enabled(NavButton::Next, self.nav.can_go_next());
        for button in &self.page_buttons {
            self.surface.set_active(&button.handle, self.nav.is_current(button.page));
        }
    }
}
