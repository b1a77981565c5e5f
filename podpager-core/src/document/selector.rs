//! Minimal CSS selector support: compound selectors (`tag.class.class`, `*`)
//! joined by the child (`>`) or descendant (whitespace) combinator.

use super::{Document, ElementId};
use crate::error::PagerError;
use lazy_static::lazy_static;
use regex::Regex;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    classes: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Combinator {
    Child,
    Descendant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    compounds: Vec<Compound>,
    // combinators[i] joins compounds[i] and compounds[i + 1]
    combinators: Vec<Combinator>,
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self, PagerError> {
        lazy_static! {
            static ref COMBINATOR: Regex = Regex::new(r"\s*>\s*|\s+").unwrap();
            static ref COMPOUND: Regex =
                Regex::new(r"^(\*|[A-Za-z][A-Za-z0-9-]*)?((?:\.[A-Za-z_-][A-Za-z0-9_-]*)*)$")
                    .unwrap();
        }

        let trimmed = input.trim();
        let mut parts = Vec::new();
        let mut combinators = Vec::new();
        let mut last = 0;
        for m in COMBINATOR.find_iter(trimmed) {
            parts.push(&trimmed[last..m.start()]);
            combinators.push(if m.as_str().contains('>') {
                Combinator::Child
            } else {
                Combinator::Descendant
            });
            last = m.end();
        }
        parts.push(&trimmed[last..]);

        let compounds = parts
            .into_iter()
            .map(|part| {
                let caps = COMPOUND
                    .captures(part)
                    .filter(|_| !part.is_empty())
                    .ok_or_else(|| PagerError::InvalidSelector(input.to_string()))?;
                let tag = caps
                    .get(1)
                    .map(|m| m.as_str())
                    .filter(|tag| *tag != "*")
                    .map(|tag| tag.to_ascii_lowercase());
                let classes = caps
                    .get(2)
                    .map(|m| m.as_str())
                    .unwrap_or_default()
                    .split('.')
                    .filter(|c| !c.is_empty())
                    .map(str::to_string)
                    .collect();
                Ok(Compound { tag, classes })
            })
            .collect::<Result<Vec<_>, PagerError>>()?;

        Ok(Self {
            compounds,
            combinators,
        })
    }

    pub fn matches(&self, doc: &Document, id: ElementId) -> bool {
        self.matches_at(doc, id, self.compounds.len() - 1)
    }

    fn matches_at(&self, doc: &Document, id: ElementId, index: usize) -> bool {
        if !compound_matches(&self.compounds[index], doc, id) {
            return false;
        }
        if index == 0 {
            return true;
        }
        match self.combinators[index - 1] {
            Combinator::Child => doc
                .parent(id)
                .is_some_and(|parent| self.matches_at(doc, parent, index - 1)),
            Combinator::Descendant => {
                let mut ancestor = doc.parent(id);
                while let Some(candidate) = ancestor {
                    if self.matches_at(doc, candidate, index - 1) {
                        return true;
                    }
                    ancestor = doc.parent(candidate);
                }
                false
            }
        }
    }
}

fn compound_matches(compound: &Compound, doc: &Document, id: ElementId) -> bool {
    let Some(element) = doc.element(id) else {
        return false;
    };
    if let Some(tag) = &compound.tag {
        if !element.tag.eq_ignore_ascii_case(tag) {
            return false;
        }
    }
    compound.classes.iter().all(|c| element.has_class(c))
}
