//! Capability interface between the paginator and whatever UI it drives.
//!
//! The paginator only ever asks a surface to show/hide an item, mark a page
//! control active, enable a navigation control, or create a new page control.
//! A surface that records these calls is enough to exercise every paging rule.

/// The two singleton navigation controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavButton {
    Previous,
    Next,
}

impl std::fmt::Display for NavButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NavButton::Previous => write!(f, "previous"),
            NavButton::Next => write!(f, "next"),
        }
    }
}

/// A click the paginator knows how to handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PagerEvent {
    Previous,
    Next,
    /// Click on the control created for this 1-indexed page
    Page(usize),
}

impl From<NavButton> for PagerEvent {
    fn from(nav: NavButton) -> Self {
        match nav {
            NavButton::Previous => PagerEvent::Previous,
            NavButton::Next => PagerEvent::Next,
        }
    }
}

pub trait PagerSurface {
    /// Handle to one paginated item
    type Item;
    /// Handle to one page-number control
    type Button;

    fn set_visible(&mut self, item: &Self::Item, visible: bool);

    fn set_active(&mut self, button: &Self::Button, active: bool);

    fn set_enabled(&mut self, nav: NavButton, enabled: bool);

    /// Create the control for `page` and place it just before the Next control.
    /// Clicking it must dispatch `PagerEvent::Page(page)`.
    fn create_page_button(&mut self, page: usize) -> Self::Button;
}

/// Surface backed by plain flags, indexed by item and page-control position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagSurface {
    pub visible: Vec<bool>,
    pub active: Vec<bool>,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl FlagSurface {
    /// Surface for `item_count` items, all hidden until the paginator shows them
    pub fn new(item_count: usize) -> Self {
        Self {
            visible: vec![false; item_count],
            active: Vec::new(),
            prev_enabled: false,
            next_enabled: false,
        }
    }

    /// Item handles matching this surface, in order
    pub fn items(&self) -> Vec<usize> {
        (0..self.visible.len()).collect()
    }

    pub fn visible_indices(&self) -> Vec<usize> {
        self.visible
            .iter()
            .enumerate()
            .filter_map(|(idx, shown)| shown.then_some(idx))
            .collect()
    }

    /// 1-indexed pages whose control is currently active
    pub fn active_pages(&self) -> Vec<usize> {
        self.active
            .iter()
            .enumerate()
            .filter_map(|(idx, active)| active.then_some(idx + 1))
            .collect()
    }
}

impl PagerSurface for FlagSurface {
    type Item = usize;
    type Button = usize;

    fn set_visible(&mut self, item: &usize, visible: bool) {
        if let Some(slot) = self.visible.get_mut(*item) {
            *slot = visible;
        }
    }

    fn set_active(&mut self, button: &usize, active: bool) {
        if let Some(slot) = self.active.get_mut(*button) {
            *slot = active;
        }
    }

    fn set_enabled(&mut self, nav: NavButton, enabled: bool) {
        match nav {
            NavButton::Previous => self.prev_enabled = enabled,
            NavButton::Next => self.next_enabled = enabled,
        }
    }

    fn create_page_button(&mut self, _page: usize) -> usize {
        self.active.push(false);
        self.active.len() - 1
    }
}
