//! Feed sources read from a podmaker configuration file.
//!
//! Only the tables that describe what ends up on the index page are read:
//! the optional `[owner]` and the `[[sources]]` list. Storage and app mode
//! settings belong to feed generation and are ignored.

use crate::error::PagerError;
use crate::listing::{Owner, PodcastEntry, PodcastListing};
use serde::Deserialize;
use tracing::debug;

/// One `[[sources]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceConfig {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub url: String,
}

impl SourceConfig {
    /// Display name, falling back to the source id
    pub fn title(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PodmakerConfig {
    #[serde(default)]
    pub owner: Option<Owner>,
    pub sources: Vec<SourceConfig>,
}

impl PodmakerConfig {
    pub fn parse(contents: &str) -> Result<Self, PagerError> {
        let config: PodmakerConfig = toml::from_str(contents)?;
        config.validate()?;
        debug!(sources = config.sources.len(), "Parsed podmaker config");
        Ok(config)
    }

    fn validate(&self) -> Result<(), PagerError> {
        if let Some(owner) = &self.owner {
            if owner.email.trim().is_empty() {
                return Err(PagerError::InvalidConfig("owner email is empty".to_string()));
            }
        }
        for source in &self.sources {
            if source.id.is_empty() {
                return Err(PagerError::InvalidConfig("source id is empty".to_string()));
            }
            if source.name.as_deref() == Some("") {
                return Err(PagerError::InvalidConfig(format!(
                    "source {} has an empty name",
                    source.id
                )));
            }
            if !(source.url.starts_with("http://") || source.url.starts_with("https://")) {
                return Err(PagerError::InvalidConfig(format!(
                    "source {} url is not http(s): {}",
                    source.id, source.url
                )));
            }
        }
        Ok(())
    }

    /// One podcast per source, in config order. Every podcast carries the config owner.
    pub fn to_listing(&self) -> PodcastListing {
        let podcasts = self
            .sources
            .iter()
            .map(|source| {
                let mut entry = PodcastEntry::new(source.title(), &source.url);
                entry.owner = self.owner.clone();
                entry
            })
            .collect();

        PodcastListing {
            title: self
                .owner
                .as_ref()
                .and_then(|owner| owner.name.as_ref())
                .map(|name| format!("Podcasts by {}", name)),
            podcasts,
        }
    }
}
