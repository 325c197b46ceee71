//! Reference resolver: related-entity URL -> display name

use std::collections::HashMap;

use futures::future::join_all;
use serde_json::{Map, Value};
use swapi_common::item::label_of;
use swapi_common::{CatalogError, Result};

use crate::session::Session;

/// Name shown for a reference that could not be resolved
pub const FALLBACK_LABEL: &str = "Unknown";

impl Session {
    /// Resolve every URL to a display name, keeping input order and
    /// duplicates.
    ///
    /// Uncached URLs are fetched concurrently, one request per distinct URL.
    /// A URL that fails resolves to [`FALLBACK_LABEL`] without affecting the
    /// others, and is not cached so a later call can try again.
    pub async fn resolve_many(&self, urls: &[String]) -> Vec<String> {
        let mut resolved: HashMap<&str, String> = HashMap::new();
        let mut pending: Vec<&str> = Vec::new();

        {
            let names = self.names.read().await;
            for url in urls {
                let url = url.as_str();
                if resolved.contains_key(url) || pending.contains(&url) {
                    continue;
                }
                match names.get(url) {
                    Some(name) => {
                        resolved.insert(url, name.to_string());
                    }
                    None => pending.push(url),
                }
            }
        }

        if !pending.is_empty() {
            log::debug!(
                "Resolving {} of {} references over the network",
                pending.len(),
                urls.len()
            );
        }

        let lookups = pending.iter().map(|url| async move {
            let outcome = self.fetch_name(url).await;
            (*url, outcome)
        });

        for (url, outcome) in join_all(lookups).await {
            let name = match outcome {
                Ok(name) => {
                    self.names
                        .write()
                        .await
                        .insert(url.to_string(), name.clone());
                    name
                }
                Err(e) if e.is_fetch_failure() => {
                    log::warn!("Error resolving URL {}: {}", url, e);
                    FALLBACK_LABEL.to_string()
                }
                Err(e) => {
                    log::error!("Malformed reference {}: {}", url, e);
                    FALLBACK_LABEL.to_string()
                }
            };
            resolved.insert(url, name);
        }

        urls.iter()
            .map(|url| {
                resolved
                    .get(url.as_str())
                    .cloned()
                    .unwrap_or_else(|| FALLBACK_LABEL.to_string())
            })
            .collect()
    }

    /// Resolve a single URL, using the session cache
    pub async fn resolve(&self, url: &str) -> String {
        self.resolve_many(&[url.to_string()])
            .await
            .pop()
            .unwrap_or_else(|| FALLBACK_LABEL.to_string())
    }

    async fn fetch_name(&self, url: &str) -> Result<String> {
        let record: Map<String, Value> = self.fetch_json(url).await?;
        label_of(&record)
            .map(str::to_string)
            .ok_or_else(|| CatalogError::MalformedItem(format!("{} has no name or title", url)))
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
