//! In-memory element tree standing in for the host page.
//!
//! Elements live in an arena and are addressed by [`ElementId`]. Only the
//! parts of a document the paginator touches are modelled: tags, class lists,
//! inline styles, attributes, text and click listeners.

pub mod selector;
pub mod surface;

pub use selector::Selector;
pub use surface::{DocumentSurface, dispatch_click, mount};

use crate::error::PagerError;
use crate::surface::PagerEvent;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Write as _;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

impl ElementId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    classes: Vec<String>,
    style: BTreeMap<String, String>,
    attributes: BTreeMap<String, String>,
    text: Option<String>,
    children: Vec<ElementId>,
    parent: Option<ElementId>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            classes: Vec::new(),
            style: BTreeMap::new(),
            attributes: BTreeMap::new(),
            text: None,
            children: Vec::new(),
            parent: None,
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[ElementId] {
        &self.children
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    elements: Vec<Element>,
    root: ElementId,
    listeners: HashMap<ElementId, PagerEvent>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Empty document with a `body` root
    pub fn new() -> Self {
        Self {
            elements: vec![Element::new("body")],
            root: ElementId(0),
            listeners: HashMap::new(),
        }
    }

    pub fn root(&self) -> ElementId {
        self.root
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id.0)
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.element(id).and_then(|e| e.parent)
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> ElementId {
        self.elements.push(Element::new(tag));
        ElementId(self.elements.len() - 1)
    }

    pub fn append_child(&mut self, parent: ElementId, child: ElementId) {
        self.insert_before(parent, child, None);
    }

    /// Whether `ancestor` is `id` or one of its parents
    pub fn contains(&self, ancestor: ElementId, id: ElementId) -> bool {
        let mut current = Some(id);
        while let Some(candidate) = current {
            if candidate == ancestor {
                return true;
            }
            current = self.parent(candidate);
        }
        false
    }

    /// Insert `child` into `parent` just before `reference`. A missing or
    /// foreign reference appends at the end, and an attached child is moved.
    /// Inserting an element into itself or its own subtree is ignored.
    pub fn insert_before(
        &mut self,
        parent: ElementId,
        child: ElementId,
        reference: Option<ElementId>,
    ) {
        if self.element(parent).is_none() || self.element(child).is_none() {
            return;
        }
        if self.contains(child, parent) {
            warn!(?parent, ?child, "Refusing to insert an element into its own subtree");
            return;
        }
        self.detach(child);

        let Some(parent_el) = self.element_mut(parent) else {
            return;
        };
        let position = reference
            .and_then(|r| parent_el.children.iter().position(|c| *c == r))
            .unwrap_or(parent_el.children.len());
        parent_el.children.insert(position, child);

        if let Some(child_el) = self.element_mut(child) {
            child_el.parent = Some(parent);
        }
    }

    fn detach(&mut self, child: ElementId) {
        let Some(old_parent) = self.parent(child) else {
            return;
        };
        if let Some(parent_el) = self.element_mut(old_parent) {
            parent_el.children.retain(|c| *c != child);
        }
        if let Some(child_el) = self.element_mut(child) {
            child_el.parent = None;
        }
    }

    pub fn add_class(&mut self, id: ElementId, class: &str) {
        if let Some(el) = self.element_mut(id) {
            if !el.has_class(class) {
                el.classes.push(class.to_string());
            }
        }
    }

    pub fn remove_class(&mut self, id: ElementId, class: &str) {
        if let Some(el) = self.element_mut(id) {
            el.classes.retain(|c| c != class);
        }
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.element(id).is_some_and(|el| el.has_class(class))
    }

    pub fn set_style(&mut self, id: ElementId, property: &str, value: &str) {
        if let Some(el) = self.element_mut(id) {
            el.style.insert(property.to_string(), value.to_string());
        }
    }

    pub fn style(&self, id: ElementId, property: &str) -> Option<&str> {
        self.element(id).and_then(|el| el.style(property))
    }

    pub fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) {
        if let Some(el) = self.element_mut(id) {
            el.attributes.insert(name.to_string(), value.to_string());
        }
    }

    pub fn set_text(&mut self, id: ElementId, text: &str) {
        if let Some(el) = self.element_mut(id) {
            el.text = Some(text.to_string());
        }
    }

    /// Text of the element and all its descendants, in document order
    pub fn text_content(&self, id: ElementId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: ElementId, out: &mut String) {
        if let Some(el) = self.element(id) {
            if let Some(text) = &el.text {
                out.push_str(text);
            }
            for child in &el.children {
                self.collect_text(*child, out);
            }
        }
    }

    /// Bind a click on `id` to `event`, replacing any earlier binding
    pub fn add_listener(&mut self, id: ElementId, event: PagerEvent) {
        self.listeners.insert(id, event);
    }

    /// Event bound to a click on `id`. Clicks bubble to the nearest bound ancestor.
    pub fn click(&self, id: ElementId) -> Option<PagerEvent> {
        let mut current = Some(id);
        while let Some(candidate) = current {
            if let Some(event) = self.listeners.get(&candidate) {
                return Some(*event);
            }
            current = self.parent(candidate);
        }
        None
    }

    /// Attached elements in document order, root first
    pub fn descendants(&self) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            out.push(id);
            if let Some(el) = self.element(id) {
                stack.extend(el.children.iter().rev().copied());
            }
        }
        out
    }

    pub fn query_selector(&self, selector: &str) -> Result<Option<ElementId>, PagerError> {
        let selector = Selector::parse(selector)?;
        Ok(self
            .descendants()
            .into_iter()
            .find(|id| selector.matches(self, *id)))
    }

    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<ElementId>, PagerError> {
        let selector = Selector::parse(selector)?;
        Ok(self
            .descendants()
            .into_iter()
            .filter(|id| selector.matches(self, *id))
            .collect())
    }

    /// Serialise the attached tree as indented HTML
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(self.root, 0, &mut out);
        out
    }

    fn write_html(&self, id: ElementId, depth: usize, out: &mut String) {
        let Some(el) = self.element(id) else {
            return;
        };
        let indent = "  ".repeat(depth);
        let _ = write!(out, "{}<{}", indent, el.tag);
        if !el.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape_html(&el.classes.join(" ")));
        }
        if !el.style.is_empty() {
            let style = el
                .style
                .iter()
                .map(|(k, v)| format!("{}: {}", k, v))
                .collect::<Vec<_>>()
                .join("; ");
            let _ = write!(out, " style=\"{}\"", escape_html(&style));
        }
        for (name, value) in &el.attributes {
            let _ = write!(out, " {}=\"{}\"", name, escape_html(value));
        }
        out.push('>');

        if el.children.is_empty() {
            if let Some(text) = &el.text {
                out.push_str(&escape_html(text));
            }
            let _ = writeln!(out, "</{}>", el.tag);
            return;
        }

        out.push('\n');
        if let Some(text) = &el.text {
            let _ = writeln!(out, "{}  {}", indent, escape_html(text));
        }
        for child in &el.children {
            self.write_html(*child, depth + 1, out);
        }
        let _ = writeln!(out, "{}</{}>", indent, el.tag);
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Document, ElementId, ElementId, ElementId) {
        let mut doc = Document::new();
        let ul = doc.create_element("ul");
        doc.add_class(ul, "pagination");
        doc.append_child(doc.root(), ul);
        let prev = doc.create_element("li");
        doc.add_class(prev, "prev");
        doc.append_child(ul, prev);
        let next = doc.create_element("li");
        doc.add_class(next, "next");
        doc.append_child(ul, next);
        (doc, ul, prev, next)
    }

    #[test]
    fn insert_before_places_child_ahead_of_reference() {
        let (mut doc, ul, prev, next) = sample();
        let a = doc.create_element("li");
        let b = doc.create_element("li");
        doc.insert_before(ul, a, Some(next));
        doc.insert_before(ul, b, Some(next));
        assert_eq!(doc.element(ul).unwrap().children(), &[prev, a, b, next]);
        assert_eq!(doc.parent(a), Some(ul));
    }

    #[test]
    fn inserting_into_own_subtree_is_ignored() {
        let (mut doc, ul, prev, next) = sample();
        let link = doc.create_element("a");
        doc.append_child(prev, link);

        doc.insert_before(prev, ul, None);
        doc.append_child(link, ul);
        doc.append_child(ul, ul);

        assert_eq!(doc.parent(ul), Some(doc.root()));
        assert_eq!(doc.parent(prev), Some(ul));
        assert_eq!(doc.element(doc.root()).unwrap().children(), &[ul]);
        assert_eq!(doc.element(ul).unwrap().children(), &[prev, next]);
        assert_eq!(doc.click(link), None);
    }

    #[test]
    fn contains_walks_parents() {
        let (doc, ul, prev, next) = sample();
        assert!(doc.contains(doc.root(), prev));
        assert!(doc.contains(ul, ul));
        assert!(!doc.contains(prev, ul));
        assert!(!doc.contains(prev, next));
    }

    #[test]
    fn insert_before_moves_attached_child() {
        let (mut doc, ul, prev, next) = sample();
        doc.insert_before(ul, next, Some(prev));
        assert_eq!(doc.element(ul).unwrap().children(), &[next, prev]);
    }

    #[test]
    fn foreign_reference_appends() {
        let (mut doc, ul, prev, next) = sample();
        let stray = doc.create_element("span");
        let item = doc.create_element("li");
        doc.insert_before(ul, item, Some(stray));
        assert_eq!(doc.element(ul).unwrap().children(), &[prev, next, item]);
    }

    #[test]
    fn class_toggling_is_idempotent() {
        let (mut doc, _, prev, _) = sample();
        doc.add_class(prev, "disabled");
        doc.add_class(prev, "disabled");
        assert_eq!(doc.element(prev).unwrap().classes(), &["prev", "disabled"]);
        doc.remove_class(prev, "disabled");
        doc.remove_class(prev, "disabled");
        assert!(!doc.has_class(prev, "disabled"));
    }

    #[test]
    fn selectors_follow_document_order() {
        let (doc, ul, prev, next) = sample();
        assert_eq!(doc.query_selector("ul.pagination").unwrap(), Some(ul));
        assert_eq!(doc.query_selector("ul.pagination > .prev").unwrap(), Some(prev));
        assert_eq!(doc.query_selector("body .next").unwrap(), Some(next));
        assert_eq!(doc.query_selector_all("li").unwrap(), vec![prev, next]);
        assert_eq!(doc.query_selector("body > .next").unwrap(), None);
        assert!(doc.query_selector("ul >").is_err());
    }

    #[test]
    fn detached_elements_are_not_queried() {
        let (mut doc, _, prev, next) = sample();
        let loose = doc.create_element("li");
        doc.add_class(loose, "prev");
        assert_eq!(doc.query_selector_all(".prev").unwrap(), vec![prev]);
        assert_eq!(doc.query_selector(".next").unwrap(), Some(next));
    }

    #[test]
    fn clicks_bubble_to_bound_ancestor() {
        let (mut doc, ul, prev, _) = sample();
        let link = doc.create_element("a");
        doc.append_child(prev, link);
        doc.add_listener(prev, PagerEvent::Previous);
        assert_eq!(doc.click(link), Some(PagerEvent::Previous));
        assert_eq!(doc.click(ul), None);
    }

    #[test]
    fn html_output_escapes_and_nests() {
        let mut doc = Document::new();
        let div = doc.create_element("div");
        doc.add_class(div, "podcast-item");
        doc.set_style(div, "display", "none");
        doc.append_child(doc.root(), div);
        let title = doc.create_element("h5");
        doc.set_text(title, "Tom & Jerry <live>");
        doc.append_child(div, title);

        let html = doc.to_html();
        assert!(html.contains("<div class=\"podcast-item\" style=\"display: none\">"));
        assert!(html.contains("<h5>Tom &amp; Jerry &lt;live&gt;</h5>"));
        assert_eq!(doc.text_content(div), "Tom & Jerry <live>");
    }
}
