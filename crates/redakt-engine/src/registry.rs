//! Placeholder registry: the single source of truth for "already redacted
//! this session". One instance is carried across every file in a batch so
//! the same entity text always shows the same placeholder.

use std::collections::HashMap;

use redakt_core::constants::{CATEGORY_LOC, CATEGORY_ORG, CATEGORY_PERSON};
use redakt_core::EntityLabel;

/// One label's mapping from trimmed entity text to its placeholder.
#[derive(Debug)]
struct CategoryMap {
    prefix: &'static str,
    assigned: HashMap<String, String>,
    /// Originals in first-encounter order, for the review summary.
    order: Vec<String>,
}

impl CategoryMap {
    fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            assigned: HashMap::new(),
            order: Vec::new(),
        }
    }

    fn resolve(&mut self, clean: &str) -> String {
        if let Some(existing) = self.assigned.get(clean) {
            return existing.clone();
        }
        let placeholder = format!("{} {}", self.prefix, sequence_label(self.order.len()));
        self.assigned.insert(clean.to_string(), placeholder.clone());
        self.order.push(clean.to_string());
        placeholder
    }
}

/// Three independent category maps, one per label, each with its own
/// monotonically increasing sequence.
#[derive(Debug)]
pub struct PlaceholderRegistry {
    person: CategoryMap,
    org: CategoryMap,
    loc: CategoryMap,
}

impl PlaceholderRegistry {
    pub fn new() -> Self {
        Self {
            person: CategoryMap::new(CATEGORY_PERSON),
            org: CategoryMap::new(CATEGORY_ORG),
            loc: CategoryMap::new(CATEGORY_LOC),
        }
    }

    /// Resolve the placeholder for `text` under `label`. First sight
    /// allocates the next token in sequence; repeat sight returns the
    /// stored token. `None` only for empty or whitespace-only text.
    pub fn resolve(&mut self, text: &str, label: EntityLabel) -> Option<String> {
        let clean = text.trim();
        if clean.is_empty() {
            return None;
        }
        Some(self.map_mut(label).resolve(clean))
    }

    /// `(original, placeholder)` pairs under `label`, in first-encounter
    /// order.
    pub fn assignments(&self, label: EntityLabel) -> impl Iterator<Item = (&str, &str)> {
        let map = self.map(label);
        map.order.iter().filter_map(|original| {
            map.assigned
                .get(original)
                .map(|placeholder| (original.as_str(), placeholder.as_str()))
        })
    }

    /// Distinct entities recorded under `label`.
    pub fn count(&self, label: EntityLabel) -> usize {
        self.map(label).order.len()
    }

    /// Distinct entities across all labels.
    pub fn total(&self) -> usize {
        EntityLabel::ALL.iter().map(|l| self.count(*l)).sum()
    }

    fn map(&self, label: EntityLabel) -> &CategoryMap {
        match label {
            EntityLabel::Per => &self.person,
            EntityLabel::Org => &self.org,
            EntityLabel::Loc => &self.loc,
        }
    }

    fn map_mut(&mut self, label: EntityLabel) -> &mut CategoryMap {
        match label {
            EntityLabel::Per => &mut self.person,
            EntityLabel::Org => &mut self.org,
            EntityLabel::Loc => &mut self.loc,
        }
    }
}

impl Default for PlaceholderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Unbounded sequence label: A..Z, then AA, AB, ... (bijective base-26).
fn sequence_label(index: usize) -> String {
    let mut n = index + 1;
    let mut label = String::new();
    while n > 0 {
        n -= 1;
        label.insert(0, (b'A' + (n % 26) as u8) as char);
        n /= 26;
    }
    label
}
