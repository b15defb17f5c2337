use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::operations::canonical_value;

/// Free-form product attributes keyed by attribute name.
pub type Attributes = BTreeMap<String, Value>;

/// A product identified by `id` with an arbitrary set of attributes.
///
/// Serializes to a flat JSON object, so `{"id": "p1", "name": "Widget"}`
/// round-trips into a product with one attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl Product {
    /// Creates a product with no attributes.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: Attributes::new(),
        }
    }

    /// Sets an attribute, replacing any previous value.
    ///
    /// Whole-number floats are stored as integers, see `canonical_number`.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes
            .insert(name.into(), canonical_value(value.into()));
        self
    }

    /// Returns the attribute value for `name`, if present.
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }
}

/// One page of products plus the token needed to fetch the next page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRange {
    pub products: Vec<Product>,
    /// Continuation token. `None` means the listing is exhausted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

impl ProductRange {
    /// Returns true when another page can be requested.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}
