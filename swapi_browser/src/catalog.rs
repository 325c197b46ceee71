//! Catalog fetcher: fills the entity cache on first access to a category

use serde::Deserialize;
use serde_json::Value;
use swapi_common::{Category, Item, Result};

use crate::session::Session;

/// First page of a catalog collection. Paging links are ignored.
#[derive(Debug, Deserialize)]
struct CatalogPage {
    results: Vec<Value>,
}

impl Session {
    /// Returns the cached items of `category`, fetching them on first use.
    ///
    /// A failed fetch is logged and yields an empty list; the cache entry stays
    /// empty so the next call tries again.
    ///
    /// Concurrent callers for the same category share one request: the first
    /// one fetches while the others wait and then read the cache.
    pub async fn ensure_loaded(&self, category: Category) -> Vec<Item> {
        if let Some(items) = self.cached_items(category).await {
            return items;
        }

        let _gate = match self.fill_gates.get(&category) {
            Some(gate) => Some(gate.lock().await),
            None => None,
        };

        // Filled while we waited for the gate
        if let Some(items) = self.cached_items(category).await {
            return items;
        }

        log::info!("Entity cache miss for {}, fetching catalog", category);
        match self.fetch_catalog(category).await {
            Ok(items) => {
                let mut cache = self.entities.write().await;
                cache.fill(category, items).to_vec()
            }
            Err(e) => {
                log::error!("Error fetching {}: {}", category, e);
                Vec::new()
            }
        }
    }

    async fn cached_items(&self, category: Category) -> Option<Vec<Item>> {
        let cache = self.entities.read().await;
        if cache.is_loaded(category) {
            log::debug!("Entity cache hit for {}", category);
            Some(cache.get(category).to_vec())
        } else {
            None
        }
    }

    /// Fetch the first page of a category without touching the cache.
    pub async fn fetch_catalog(&self, category: Category) -> Result<Vec<Item>> {
        let url = category.endpoint_url(&self.config.api_base_url);
        let page: CatalogPage = self.fetch_json(&url).await?;

        let total = page.results.len();
        let items: Vec<Item> = page
            .results
            .into_iter()
            .filter_map(|record| match Item::from_value(record) {
                Ok(item) => Some(item),
                Err(e) => {
                    log::warn!("Dropping {} record: {}", category, e);
                    None
                }
            })
            .collect();

        log::info!(
            "Fetched {} {} ({} malformed records dropped)",
            items.len(),
            category,
            total - items.len()
        );

        Ok(items)
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
