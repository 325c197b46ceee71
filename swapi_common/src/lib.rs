//! Shared types for the SWAPI catalog browser.
//!
//! Holds the category tags, the normalized item record and the error type used
//! by every crate that talks to the catalog API.

pub mod category;
pub mod error;
pub mod item;

pub use category::Category;
pub use error::{CatalogError, Result};
pub use item::{id_from_url, label_of, Item, RELATED_FIELDS};
