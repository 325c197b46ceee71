//! Catalog categories and their remote endpoints

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four catalog collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Characters,
    Planets,
    Vehicles,
    Films,
}

impl Category {
    /// All categories in menu order
    pub const ALL: [Category; 4] = [
        Category::Characters,
        Category::Planets,
        Category::Vehicles,
        Category::Films,
    ];

    /// Tag used in menus, image folders and the web API
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Characters => "characters",
            Category::Planets => "planets",
            Category::Vehicles => "vehicles",
            Category::Films => "films",
        }
    }

    /// Collection path on the catalog API. Characters live under `people/`.
    pub fn endpoint_path(&self) -> &'static str {
        match self {
            Category::Characters => "people/",
            Category::Planets => "planets/",
            Category::Vehicles => "vehicles/",
            Category::Films => "films/",
        }
    }

    /// Full collection URL for the given API base
    pub fn endpoint_url(&self, api_base_url: &str) -> String {
        format!(
            "{}/{}",
            api_base_url.trim_end_matches('/'),
            self.endpoint_path()
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "characters" | "people" => Ok(Category::Characters),
            "planets" => Ok(Category::Planets),
            "vehicles" => Ok(Category::Vehicles),
            "films" => Ok(Category::Films),
            _ => Err(CatalogError::UnknownCategory(s.to_string())),
        }
    }
}
