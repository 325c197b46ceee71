//! Normalized catalog records
//!
//! The catalog API labels people, planets and vehicles with `name` and films
//! with `title`. Records are normalized once, when they are parsed, so the rest
//! of the code only ever reads [`Item::label`].

use crate::error::{CatalogError, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// Related-entity fields shown in a detail view, in display order
pub const RELATED_FIELDS: [&str; 5] = ["characters", "planets", "starships", "vehicles", "species"];

/// One record of a catalog collection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    label: String,
    url: String,
    /// Every field of the original record, in the order the API sent them
    fields: Map<String, Value>,
}

impl Item {
    /// Normalize a raw API record.
    ///
    /// Fails with [`CatalogError::MalformedItem`] when the record is not an
    /// object or lacks a usable label or self URL.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(fields) = value else {
            return Err(CatalogError::MalformedItem(
                "record is not a JSON object".to_string(),
            ));
        };

        let url = fields
            .get("url")
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| CatalogError::MalformedItem("record has no url".to_string()))?
            .to_string();

        let label = label_of(&fields)
            .ok_or_else(|| CatalogError::MalformedItem(format!("{} has no name or title", url)))?
            .to_string();

        Ok(Self { label, url, fields })
    }

    /// Display label (`name`, or `title` for films)
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Self URL of the record
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Numeric identifier taken from the self URL
    pub fn id(&self) -> Option<&str> {
        id_from_url(&self.url)
    }

    /// Raw field map
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// URLs listed under a related-entity field.
    ///
    /// Empty when the field is missing, is not a list, or lists nothing.
    pub fn related_urls(&self, field: &str) -> Vec<String> {
        match self.fields.get(field) {
            Some(Value::Array(entries)) => entries
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Scalar fields (strings, numbers, booleans) in record order, rendered
    /// for display. Related-entity fields, lists, objects and nulls are
    /// skipped.
    pub fn scalar_fields(&self) -> impl Iterator<Item = (&str, String)> + '_ {
        self.fields.iter().filter_map(|(key, value)| {
            if RELATED_FIELDS.contains(&key.as_str()) {
                return None;
            }
            let rendered = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null | Value::Array(_) | Value::Object(_) => return None,
            };
            Some((key.as_str(), rendered))
        })
    }
}

/// Label of a raw record: `name` if present and non-empty, else `title`
pub fn label_of(fields: &Map<String, Value>) -> Option<&str> {
    ["name", "title"].iter().find_map(|key| {
        fields
            .get(*key)
            .and_then(Value::as_str)
            .filter(|label| !label.is_empty())
    })
}

/// Extract the trailing numeric segment of a URL such as
/// `https://swapi.dev/api/films/2/`.
///
/// The URL must end with a slash and the segment before it must be all
/// digits; anything else yields `None`.
pub fn id_from_url(url: &str) -> Option<&str> {
    let trimmed = url.strip_suffix('/')?;
    let (_, segment) = trimmed.rsplit_once('/')?;
    if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
        Some(segment)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn luke() -> Item {
        Item::from_value(json!({
            "name": "Luke Skywalker",
            "height": "172",
            "films": ["https://swapi.dev/api/films/1/"],
            "species": [],
            "vehicles": ["https://swapi.dev/api/vehicles/14/"],
            "homeworld": "https://swapi.dev/api/planets/1/",
            "edited": null,
            "url": "https://swapi.dev/api/people/1/"
        }))
        .unwrap()
    }

    #[test]
    fn label_prefers_name() {
        assert_eq!(luke().label(), "Luke Skywalker");
    }

    #[test]
    fn label_falls_back_to_title() {
        let film = Item::from_value(json!({
            "title": "A New Hope",
            "episode_id": 4,
            "url": "https://swapi.dev/api/films/1/"
        }))
        .unwrap();
        assert_eq!(film.label(), "A New Hope");
    }

    #[test]
    fn empty_name_falls_back_to_title() {
        let item = Item::from_value(json!({
            "name": "",
            "title": "Fallback",
            "url": "https://swapi.dev/api/films/9/"
        }))
        .unwrap();
        assert_eq!(item.label(), "Fallback");
    }

    #[test]
    fn missing_label_is_malformed() {
        let err = Item::from_value(json!({ "url": "https://swapi.dev/api/films/1/" })).unwrap_err();
        assert!(matches!(err, CatalogError::MalformedItem(_)));
    }

    #[test]
    fn missing_url_is_malformed() {
        let err = Item::from_value(json!({ "name": "Yoda" })).unwrap_err();
        assert!(matches!(err, CatalogError::MalformedItem(_)));
    }

    #[test]
    fn non_object_is_malformed() {
        let err = Item::from_value(json!(["Yoda"])).unwrap_err();
        assert!(matches!(err, CatalogError::MalformedItem(_)));
    }

    #[test]
    fn id_is_trailing_numeric_segment() {
        assert_eq!(luke().id(), Some("1"));
        assert_eq!(id_from_url("https://swapi.dev/api/planets/42/"), Some("42"));
    }

    #[test]
    fn id_requires_trailing_slash_and_digits() {
        assert_eq!(id_from_url("https://swapi.dev/api/planets/42"), None);
        assert_eq!(id_from_url("https://swapi.dev/api/planets/tatooine/"), None);
        assert_eq!(id_from_url("https://swapi.dev/api/planets//"), None);
        assert_eq!(id_from_url(""), None);
    }

    #[test]
    fn related_urls_reads_string_lists() {
        let item = luke();
        assert_eq!(
            item.related_urls("vehicles"),
            vec!["https://swapi.dev/api/vehicles/14/".to_string()]
        );
        assert!(item.related_urls("species").is_empty());
        assert!(item.related_urls("starships").is_empty());
        assert!(item.related_urls("homeworld").is_empty());
    }

    #[test]
    fn scalar_fields_keep_record_order_and_skip_lists() {
        let item = luke();
        let fields: Vec<(&str, String)> = item.scalar_fields().collect();
        let keys: Vec<&str> = fields.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["name", "height", "homeworld", "url"]);
        assert_eq!(fields[1].1, "172");
    }

    #[test]
    fn scalar_fields_render_numbers_and_booleans() {
        let item = Item::from_value(json!({
            "title": "A New Hope",
            "episode_id": 4,
            "canon": true,
            "url": "https://swapi.dev/api/films/1/"
        }))
        .unwrap();
        let rendered: Vec<String> = item
            .scalar_fields()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect();
        assert_eq!(
            rendered,
            vec![
                "title: A New Hope",
                "episode_id: 4",
                "canon: true",
                "url: https://swapi.dev/api/films/1/"
            ]
        );
    }
}
