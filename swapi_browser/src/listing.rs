//! List renderer and search filter
//!
//! Turns a category's items into display cards: sorted by label, each with an
//! image reference and the item the card opens when selected.

use serde::Serialize;
use std::cmp::Ordering;
use swapi_common::{Category, Item};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::config::BrowserConfig;
use crate::session::Session;

/// One card of the list view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub label: String,
    /// Numeric id from the item URL, when it has one
    pub image_id: Option<String>,
    pub image_url: Option<String>,
    pub placeholder_url: String,
    /// Item handed to the detail presenter when the card is selected
    #[serde(skip)]
    pub item: Item,
}

impl Card {
    fn new(config: &BrowserConfig, category: Category, item: &Item) -> Self {
        let image_id = item.id().map(str::to_string);
        let image_url = image_id
            .as_deref()
            .map(|id| config.image_url(category.as_str(), id));
        Self {
            label: item.label().to_string(),
            image_id,
            image_url,
            placeholder_url: config.placeholder_url(),
            item: item.clone(),
        }
    }

    /// Image to display: the item image, or the placeholder if there is none
    pub fn image_src(&self) -> &str {
        self.image_url.as_deref().unwrap_or(&self.placeholder_url)
    }

    /// Image to display once the item image has failed to load
    pub fn fallback_src(&self) -> &str {
        &self.placeholder_url
    }
}

/// Locale-style label ordering.
///
/// Labels compare by their base letters first (accents and case ignored), so
/// "Ämber" sorts next to "Amber" rather than after "zeta". Ties fall back to
/// the lowercased label and then the raw label.
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    fold(a)
        .cmp(&fold(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// Decompose, drop combining marks, lowercase
fn fold(label: &str) -> String {
    label
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Case-insensitive substring match. An empty query matches everything.
pub fn matches_query(label: &str, query: &str) -> bool {
    label.to_lowercase().contains(&query.to_lowercase())
}

/// Build the sorted card list for `items`
pub fn render(config: &BrowserConfig, category: Category, items: &[Item]) -> Vec<Card> {
    let mut cards: Vec<Card> = items
        .iter()
        .map(|item| Card::new(config, category, item))
        .collect();
    cards.sort_by(|a, b| compare_labels(&a.label, &b.label));
    cards
}

impl Session {
    /// Render the given items of `category` as cards
    pub fn render(&self, category: Category, items: &[Item]) -> Vec<Card> {
        render(&self.config, category, items)
    }

    /// Select a category: load it if needed and render all of its items.
    pub async fn open_category(&self, category: Category) -> Vec<Card> {
        let items = self.ensure_loaded(category).await;
        self.render(category, &items)
    }

    /// Render the cached items of `category` whose label contains `query`.
    ///
    /// Reads the cache only: an unloaded category renders nothing.
    pub async fn filter(&self, category: Category, query: &str) -> Vec<Card> {
        let cache = self.entities.read().await;
        let matching: Vec<Item> = cache
            .get(category)
            .iter()
            .filter(|item| matches_query(item.label(), query))
            .cloned()
            .collect();
        drop(cache);

        log::debug!(
            "Filter {:?} on {} matched {} items",
            query,
            category,
            matching.len()
        );
        self.render(category, &matching)
    }

    /// Look up a cached item by the numeric id in its URL
    pub async fn find_item(&self, category: Category, id: &str) -> Option<Item> {
        self.entities
            .read()
            .await
            .get(category)
            .iter()
            .find(|item| item.id() == Some(id))
            .cloned()
    }
}

#[cfg(test)]
#[path = "listing_tests.rs"]
mod tests;
