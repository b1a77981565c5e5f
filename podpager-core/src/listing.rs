//! Podcast listing: the data behind the paginated page.

use crate::config::PodmakerConfig;
use crate::document::{Document, ElementId};
use crate::error::PagerError;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use time::OffsetDateTime;
use tracing::{debug, info};

const LISTING_FILE_NAME: &str = "listing.json";
const DEFAULT_LANGUAGE: &str = "en";

/// Manager of a podcast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// One podcast shown as a `div.podcast-item`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PodcastEntry {
    pub title: String,
    /// Feed or homepage URL
    pub link: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Artwork URL
    #[serde(default)]
    pub image: Option<String>,
    /// Last time the feed was regenerated
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated: Option<OffsetDateTime>,
    #[serde(default)]
    pub owner: Option<Owner>,
    #[serde(default)]
    pub categories: Vec<String>,
    /// Explicit language or adult content
    #[serde(default)]
    pub explicit: bool,
    /// ISO 639-1 code
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

impl PodcastEntry {
    pub fn new(title: &str, link: &str) -> Self {
        Self {
            title: title.to_string(),
            link: link.to_string(),
            author: None,
            description: None,
            image: None,
            updated: None,
            owner: None,
            categories: Vec::new(),
            explicit: false,
            language: default_language(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PodcastListing {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub podcasts: Vec<PodcastEntry>,
}

impl PodcastListing {
    pub fn len(&self) -> usize {
        self.podcasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.podcasts.is_empty()
    }

    /// Pretty-printed JSON that [`parse_listing`] reads back
    pub fn to_json(&self) -> Result<String, PagerError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub fn parse_listing(json: &str) -> Result<PodcastListing, PagerError> {
    Ok(serde_json::from_str(json)?)
}

/// Parse `contents` read from `path`: a `.toml` file is a podmaker config whose
/// sources become the podcasts, anything else is listing JSON.
pub fn parse_listing_file(path: &Path, contents: &str) -> Result<PodcastListing, PagerError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => Ok(PodmakerConfig::parse(contents)?.to_listing()),
        _ => parse_listing(contents),
    }
}

pub fn load_listing(path: &Path) -> Result<PodcastListing, PagerError> {
    let contents = fs::read_to_string(path)?;
    let listing = parse_listing_file(path, &contents)?;
    info!(
        path = %path.display(),
        podcasts = listing.len(),
        "Loaded podcast listing"
    );
    Ok(listing)
}

/// `listing.json` in the platform data directory
pub fn default_listing_path() -> Result<PathBuf, PagerError> {
    let dirs = ProjectDirs::from("", "", "podpager").ok_or(PagerError::NoDataDir)?;
    Ok(dirs.data_dir().join(LISTING_FILE_NAME))
}

/// Build the page for `listing`: one `div.podcast-item` per podcast followed by
/// a `ul.pagination` holding only the Previous and Next controls.
pub fn render_page(listing: &PodcastListing) -> Document {
    let mut doc = Document::new();
    let root = doc.root();

    let container = doc.create_element("div");
    doc.add_class(container, "container");
    doc.append_child(root, container);

    if let Some(title) = &listing.title {
        let heading = doc.create_element("h4");
        doc.set_text(heading, title);
        doc.append_child(container, heading);
    }

    let list = doc.create_element("div");
    doc.add_class(list, "podcast-list");
    doc.append_child(container, list);
    for entry in &listing.podcasts {
        let item = render_entry(&mut doc, entry);
        doc.append_child(list, item);
    }

    let pagination = doc.create_element("ul");
    doc.add_class(pagination, "pagination");
    doc.append_child(container, pagination);
    for (class, label) in [("prev", "\u{ab}"), ("next", "\u{bb}")] {
        let li = doc.create_element("li");
        doc.add_class(li, class);
        let link = doc.create_element("a");
        doc.set_text(link, label);
        doc.append_child(li, link);
        doc.append_child(pagination, li);
    }

    debug!(podcasts = listing.len(), "Rendered listing page");
    doc
}

fn render_entry(doc: &mut Document, entry: &PodcastEntry) -> ElementId {
    let item = doc.create_element("div");
    doc.add_class(item, "podcast-item");
    doc.set_attribute(item, "lang", &entry.language);
    if entry.explicit {
        doc.add_class(item, "explicit");
    }

    if let Some(image) = &entry.image {
        let img = doc.create_element("img");
        doc.set_attribute(img, "src", image);
        doc.set_attribute(img, "alt", &entry.title);
        doc.append_child(item, img);
    }

    let title = doc.create_element("a");
    doc.add_class(title, "title");
    doc.set_attribute(title, "href", &entry.link);
    doc.set_text(title, &entry.title);
    doc.append_child(item, title);

    let categories = (!entry.categories.is_empty()).then(|| entry.categories.join(", "));
    let owner = entry
        .owner
        .as_ref()
        .map(|owner| owner.name.clone().unwrap_or_else(|| owner.email.clone()));
    let optional = [
        ("author", entry.author.clone()),
        ("description", entry.description.clone()),
        ("categories", categories),
        ("owner", owner),
        ("updated", entry.updated.and_then(crate::format::format_date)),
    ];
    for (class, value) in optional {
        if let Some(value) = value {
            let p = doc.create_element("p");
            doc.add_class(p, class);
            doc.set_text(p, &value);
            doc.append_child(item, p);
        }
    }

    item
}
