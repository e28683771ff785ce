//! Catalog data types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::store::{id_to_string, Document, StoreError};

/// Category reported for stored products that carry none
pub const DEFAULT_CATEGORY: &str = "craft";

/// A product as read back from the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub image: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// A validated product awaiting persistence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(deserialize_with = "deserialize_price")]
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Accept a JSON number or a numeric string such as `"12"`
fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Number(f64),
        Text(String),
    }

    match RawPrice::deserialize(deserializer)? {
        RawPrice::Number(price) => Ok(price),
        RawPrice::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("price is not a number: {:?}", text))),
    }
}

impl NewProduct {
    /// Check the invariants a product must hold before it reaches the store
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("title must not be empty".to_string());
        }
        if !self.price.is_finite() {
            return Err("price must be a finite number".to_string());
        }
        if self.price < 0.0 {
            return Err("price must be greater than or equal to 0".to_string());
        }
        Ok(())
    }

    /// Flatten into the plain field map the store persists
    pub fn into_document(self) -> Document {
        let mut document = Document::new();
        document.insert("title".into(), Value::String(self.title));
        document.insert(
            "description".into(),
            self.description.map_or(Value::Null, Value::String),
        );
        document.insert("price".into(), Value::from(self.price));
        document.insert("category".into(), Value::String(self.category));
        document.insert("image".into(), self.image.map_or(Value::Null, Value::String));
        document
    }
}

impl Product {
    /// Map a raw stored document onto the product shape.
    ///
    /// Only a missing or non-text `title` is an error; every other field
    /// falls back to its default.
    pub fn from_document(document: &Document) -> Result<Self, StoreError> {
        let title = match document.get("title") {
            Some(Value::String(title)) => title.clone(),
            _ => {
                return Err(StoreError::Malformed(
                    "product document has no title".to_string(),
                ))
            }
        };

        Ok(Self {
            id: document.get("_id").map(id_to_string),
            title,
            description: text_field(document, "description"),
            price: coerce_price(document.get("price")),
            category: text_field(document, "category")
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            image: text_field(document, "image"),
            created_at: document.get("created_at").and_then(parse_timestamp),
        })
    }
}

fn text_field(document: &Document, key: &str) -> Option<String> {
    match document.get(key) {
        Some(Value::String(value)) => Some(value.clone()),
        _ => None,
    }
}

/// Numbers pass through, numeric strings are parsed, anything else is 0
fn coerce_price(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
            .unwrap_or(0.0),
        _ => 0.0,
    }
}

/// RFC 3339 strings or extended-JSON `{"$date": ...}` wrappers
fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|t| t.with_timezone(&Utc)),
        Value::Object(map) => map.get("$date").and_then(parse_timestamp),
        _ => None,
    }
}
