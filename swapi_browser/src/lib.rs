//! SWAPI Catalog Browser
//!
//! Fetches the characters, planets, vehicles and films collections of the Star
//! Wars API, keeps them in session caches, and turns them into sorted,
//! searchable card lists and detail views whose related entities are resolved
//! to names.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod details;
pub mod listing;
pub mod resolver;
pub mod session;
pub mod web;

pub use config::BrowserConfig;
pub use details::{DetailLine, DetailState, DetailView, ModalStack};
pub use listing::Card;
pub use resolver::FALLBACK_LABEL;
pub use session::Session;
pub use swapi_common::{CatalogError, Category, Item};
