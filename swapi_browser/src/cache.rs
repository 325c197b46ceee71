//! Session-scoped caches
//!
//! Both caches only ever grow: there is no removal API. A category entry is
//! written once, and a resolved name is kept for the rest of the session.

use std::collections::HashMap;
use swapi_common::{Category, Item};

/// Items fetched per category
#[derive(Debug, Default)]
pub struct EntityCache {
    items: HashMap<Category, Vec<Item>>,
}

impl EntityCache {
    /// Cached items for a category. Empty means "not yet fetched".
    pub fn get(&self, category: Category) -> &[Item] {
        self.items.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the category has been populated
    pub fn is_loaded(&self, category: Category) -> bool {
        !self.get(category).is_empty()
    }

    /// Store a fetched page. An already populated category is left untouched.
    pub fn fill(&mut self, category: Category, items: Vec<Item>) -> &[Item] {
        let entry = self.items.entry(category).or_default();
        if entry.is_empty() {
            *entry = items;
        }
        entry.as_slice()
    }

    /// Number of populated categories
    pub fn len(&self) -> usize {
        self.items.values().filter(|items| !items.is_empty()).count()
    }

    /// Check if no category is populated
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Display names resolved from related-entity URLs
#[derive(Debug, Default)]
pub struct NameCache {
    names: HashMap<String, String>,
}

impl NameCache {
    /// Get a resolved name
    pub fn get(&self, url: &str) -> Option<&str> {
        self.names.get(url).map(String::as_str)
    }

    /// Insert a resolved name. The first name stored for a URL wins.
    pub fn insert(&mut self, url: String, name: String) {
        self.names.entry(url).or_insert(name);
    }

    /// Get entry count
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
