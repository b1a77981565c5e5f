pub mod config;
pub mod document;
pub mod error;
pub mod format;
pub mod listing;
pub mod pagination;
pub mod paginator;
pub mod surface;

#[cfg(test)]
mod scenario_tests;

pub use config::{PodmakerConfig, SourceConfig};
pub use document::{Document, DocumentSurface, Element, ElementId, Selector, dispatch_click, mount};
pub use error::PagerError;
pub use format::{format_controls, format_date, format_entry, format_page_summary};
pub use listing::{
    Owner, PodcastEntry, PodcastListing, default_listing_path, load_listing, parse_listing,
    parse_listing_file, render_page,
};
pub use pagination::{PAGE_SIZE, PageNavigation, page_range, total_pages};
pub use paginator::{PageButton, Paginator, PagerSnapshot};
pub use surface::{FlagSurface, NavButton, PagerEvent, PagerSurface};

use std::path::Path;

/// Main interface: a podcast listing rendered into a page with live pagination
#[derive(Debug)]
pub struct PodcastPager {
    listing: PodcastListing,
    paginator: Paginator<DocumentSurface>,
}

impl PodcastPager {
    /// Render `listing` and mount the paginator on the result
    pub fn new(listing: PodcastListing) -> Result<Self, PagerError> {
        let paginator = mount(render_page(&listing))?;
        Ok(Self { listing, paginator })
    }

    pub fn from_path(path: &Path) -> Result<Self, PagerError> {
        Self::new(load_listing(path)?)
    }

    pub fn listing(&self) -> &PodcastListing {
        &self.listing
    }

    pub fn paginator(&self) -> &Paginator<DocumentSurface> {
        &self.paginator
    }

    pub fn document(&self) -> &Document {
        self.paginator.surface().document()
    }

    pub fn snapshot(&self) -> PagerSnapshot {
        self.paginator.snapshot()
    }

    /// Podcasts on the current page
    pub fn current_entries(&self) -> &[PodcastEntry] {
        &self.listing.podcasts[self.paginator.visible_range()]
    }

    /// Element of the control created for `page`
    pub fn page_control(&self, page: usize) -> Option<ElementId> {
        self.paginator
            .page_buttons()
            .iter()
            .find(|b| b.page == page)
            .map(|b| b.handle)
    }

    pub fn nav_control(&self, nav: NavButton) -> ElementId {
        self.paginator.surface().nav_element(nav)
    }

    /// Simulate a click on `target` in the rendered page
    pub fn click(&mut self, target: ElementId) -> Option<PagerEvent> {
        dispatch_click(&mut self.paginator, target)
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.paginator.go_to_page(page);
    }

    pub fn to_html(&self) -> String {
        self.document().to_html()
    }
}
