//! Detail presenter and modal stack
//!
//! A detail view lists an item's related entities by name, then its scalar
//! fields. Views are shown through a [`ModalStack`].

use std::fmt;

use futures::future::join_all;
use serde::Serialize;
use swapi_common::{Category, Item, RELATED_FIELDS};

use crate::config::BrowserConfig;
use crate::session::Session;

/// Whether a detail view is still resolving references
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailState {
    Loading,
    Ready,
}

/// A `key: value` line of a detail view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailLine {
    pub key: String,
    pub value: String,
}

impl fmt::Display for DetailLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}

/// Detail view of one item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailView {
    pub category: Category,
    pub title: String,
    pub image_url: Option<String>,
    pub placeholder_url: String,
    pub state: DetailState,
    /// Empty while loading
    pub lines: Vec<DetailLine>,
}

impl DetailView {
    /// View shown while references are being resolved
    pub fn loading(config: &BrowserConfig, category: Category, item: &Item) -> Self {
        Self {
            category,
            title: item.label().to_string(),
            image_url: item.id().map(|id| config.image_url(category.as_str(), id)),
            placeholder_url: config.placeholder_url(),
            state: DetailState::Loading,
            lines: Vec::new(),
        }
    }

    /// Replace the loading indicator with the assembled lines
    pub fn finish(&mut self, lines: Vec<DetailLine>) {
        self.lines = lines;
        self.state = DetailState::Ready;
    }

    pub fn is_ready(&self) -> bool {
        self.state == DetailState::Ready
    }
}

impl Session {
    /// Assemble the detail lines of an item.
    ///
    /// Related fields with at least one URL are resolved concurrently and
    /// listed in fixed order (characters, planets, starships, vehicles,
    /// species); scalar fields follow in record order.
    pub async fn detail_lines(&self, item: &Item) -> Vec<DetailLine> {
        let related: Vec<(&str, Vec<String>)> = RELATED_FIELDS
            .iter()
            .map(|field| (*field, item.related_urls(field)))
            .filter(|(_, urls)| !urls.is_empty())
            .collect();

        let resolutions = related.iter().map(|(field, urls)| async move {
            let names = self.resolve_many(urls).await;
            DetailLine {
                key: field.to_string(),
                value: names.join(", "),
            }
        });

        let mut lines = join_all(resolutions).await;
        lines.extend(item.scalar_fields().map(|(key, value)| DetailLine {
            key: key.to_string(),
            value,
        }));
        lines
    }

    /// Build the finished detail view of an item
    pub async fn describe(&self, category: Category, item: &Item) -> DetailView {
        let mut view = DetailView::loading(&self.config, category, item);
        view.finish(self.detail_lines(item).await);
        view
    }
}

/// Open detail views, most recent on top.
///
/// Opening a view keeps earlier ones underneath; closing removes only the top
/// one. Closing an empty stack does nothing.
#[derive(Debug, Default)]
pub struct ModalStack {
    views: Vec<DetailView>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a view on top of the stack
    pub fn open(&mut self, view: DetailView) -> &DetailView {
        self.views.push(view);
        &self.views[self.views.len() - 1]
    }

    /// Remove and return the top view, if any
    pub fn close(&mut self) -> Option<DetailView> {
        let closed = self.views.pop();
        if closed.is_none() {
            log::debug!("Close requested with no detail view open");
        }
        closed
    }

    /// Currently displayed view
    pub fn top(&self) -> Option<&DetailView> {
        self.views.last()
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Push a loading view for `item`. It stays in the loading state until
    /// [`ModalStack::finish_top`] hands it its lines.
    pub fn open_loading(
        &mut self,
        config: &BrowserConfig,
        category: Category,
        item: &Item,
    ) -> &DetailView {
        log::info!("Showing details for {} {}", category, item.label());
        self.open(DetailView::loading(config, category, item))
    }

    /// Fill the top view with its lines and mark it ready.
    pub fn finish_top(&mut self, lines: Vec<DetailLine>) -> Option<&DetailView> {
        match self.views.last_mut() {
            Some(view) => {
                view.finish(lines);
                Some(&*view)
            }
            None => {
                log::debug!("Detail lines arrived with no detail view open");
                None
            }
        }
    }

    /// Open a loading view for `item`, resolve its references and mark it
    /// ready. Callers that render the loading state use
    /// [`ModalStack::open_loading`] and [`ModalStack::finish_top`] instead.
    pub async fn show_details(
        &mut self,
        session: &Session,
        category: Category,
        item: &Item,
    ) -> &DetailView {
        self.open_loading(session.config(), category, item);
        let lines = session.detail_lines(item).await;
        let index = self.views.len() - 1;
        self.views[index].finish(lines);
        &self.views[index]
    }
}

#[cfg(test)]
#[path = "details_tests.rs"]
mod tests;
