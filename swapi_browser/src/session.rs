//! Browsing session: HTTP client plus the session caches
//!
//! Operations on a session live next to the component they belong to
//! (`catalog`, `resolver`, `listing`, `details`), each adding methods to
//! [`Session`].

use std::collections::HashMap;
use std::sync::Arc;

use reqwest::Client;
use serde::de::DeserializeOwned;
use swapi_common::{CatalogError, Category, Result};
use tokio::sync::{Mutex, RwLock};

use crate::cache::{EntityCache, NameCache};
use crate::config::BrowserConfig;

/// Session-scoped context shared by every browsing operation.
///
/// Created empty; dropping it discards all cached data.
pub struct Session {
    pub(crate) client: Client,
    pub(crate) config: BrowserConfig,
    pub(crate) entities: Arc<RwLock<EntityCache>>,
    pub(crate) names: Arc<RwLock<NameCache>>,
    /// Held while a category is being fetched so concurrent callers wait for
    /// the first fetch instead of issuing their own.
    pub(crate) fill_gates: HashMap<Category, Mutex<()>>,
}

impl Session {
    /// Creates a session with empty caches.
    pub fn new(config: BrowserConfig) -> Self {
        log::info!("Creating browsing session against {}", config.api_base_url);
        Self {
            client: Client::new(),
            config,
            entities: Arc::new(RwLock::new(EntityCache::default())),
            names: Arc::new(RwLock::new(NameCache::default())),
            fill_gates: Category::ALL
                .iter()
                .map(|category| (*category, Mutex::new(())))
                .collect(),
        }
    }

    /// Session configuration
    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }

    /// Number of resolved names held by the session
    pub async fn resolved_name_count(&self) -> usize {
        self.names.read().await.len()
    }

    /// GET a URL and decode its JSON body
    pub(crate) async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.config.user_agent)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CatalogError::HttpStatus(response.status()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(BrowserConfig::default())
    }
}
