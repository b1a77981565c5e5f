use super::{Document, ElementId};
use crate::error::PagerError;
use crate::paginator::Paginator;
use crate::surface::{NavButton, PagerEvent, PagerSurface};
use tracing::{debug, info};

pub const ITEM_SELECTOR: &str = "div.podcast-item";
pub const PREV_SELECTOR: &str = "ul.pagination > .prev";
pub const NEXT_SELECTOR: &str = "ul.pagination > .next";

const DISABLED_CLASS: &str = "disabled";
const ACTIVE_CLASS: &str = "active";
const RIPPLE_CLASS: &str = "waves-effect";

/// Drives a [`Document`]: items are shown through their `display` style and
/// controls carry `disabled`/`active` classes paired with `waves-effect`.
#[derive(Debug, Clone)]
pub struct DocumentSurface {
    document: Document,
    pagination: ElementId,
    prev: ElementId,
    next: ElementId,
}

impl DocumentSurface {
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn pagination(&self) -> ElementId {
        self.pagination
    }

    pub fn nav_element(&self, nav: NavButton) -> ElementId {
        match nav {
            NavButton::Previous => self.prev,
            NavButton::Next => self.next,
        }
    }

    /// Add `on` and drop the ripple class, or the other way round
    fn toggle(&mut self, id: ElementId, class: &str, on: bool) {
        if on {
            self.document.add_class(id, class);
            self.document.remove_class(id, RIPPLE_CLASS);
        } else {
            self.document.remove_class(id, class);
            self.document.add_class(id, RIPPLE_CLASS);
        }
    }
}

impl PagerSurface for DocumentSurface {
    type Item = ElementId;
    type Button = ElementId;

    fn set_visible(&mut self, item: &ElementId, visible: bool) {
        let display = if visible { "block" } else { "none" };
        self.document.set_style(*item, "display", display);
    }

    fn set_active(&mut self, button: &ElementId, active: bool) {
        self.toggle(*button, ACTIVE_CLASS, active);
    }

    fn set_enabled(&mut self, nav: NavButton, enabled: bool) {
        let id = self.nav_element(nav);
        self.toggle(id, DISABLED_CLASS, !enabled);
    }

    fn create_page_button(&mut self, page: usize) -> ElementId {
        let li = self.document.create_element("li");
        let link = self.document.create_element("a");
        self.document.set_text(link, &page.to_string());
        self.document.set_style(link, "cursor", "pointer");
        self.document.append_child(li, link);
        self.document.insert_before(self.pagination, li, Some(self.next));
        self.document.add_listener(li, PagerEvent::Page(page));
        debug!(page, element = li.index(), "Created page control");
        li
    }
}

/// Wire a paginator into `document`: collect the podcast items, find the
/// Previous/Next controls, bind their clicks and build the page controls.
///
/// A document without both navigation controls is rejected.
pub fn mount(mut document: Document) -> Result<Paginator<DocumentSurface>, PagerError> {
    let items = document.query_selector_all(ITEM_SELECTOR)?;

    let prev = document
        .query_selector(PREV_SELECTOR)?
        .ok_or(PagerError::MissingNavControl(PREV_SELECTOR))?;
    let next = document
        .query_selector(NEXT_SELECTOR)?
        .ok_or(PagerError::MissingNavControl(NEXT_SELECTOR))?;
    let pagination = document
        .parent(next)
        .ok_or(PagerError::MissingNavControl(NEXT_SELECTOR))?;

    document.add_listener(prev, PagerEvent::Previous);
    document.add_listener(next, PagerEvent::Next);

    info!(items = items.len(), "Mounting paginator on document");

    let surface = DocumentSurface {
        document,
        pagination,
        prev,
        next,
    };
    Ok(Paginator::initialize(surface, items))
}

/// Route a click on `target` to the paginator. Returns the handled event, if
/// the click hit a control.
pub fn dispatch_click(
    paginator: &mut Paginator<DocumentSurface>,
    target: ElementId,
) -> Option<PagerEvent> {
    let event = paginator.surface().document.click(target)?;
    debug!(?event, element = target.index(), "Dispatching click");
    paginator.handle(event);
    Some(event)
}
