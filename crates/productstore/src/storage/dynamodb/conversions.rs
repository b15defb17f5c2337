//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! products. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use productstore_core::product::{canonical_number, validate_product, Attributes, Product};
use productstore_core::storage::StoreError;
use serde_json::{Map, Number, Value};

use super::keys::ID_KEY;

/// A DynamoDB item as returned by the SDK.
pub type Item = HashMap<String, AttributeValue>;

// ============================================================================
// Product conversions
// ============================================================================

/// Convert a Product to DynamoDB item.
///
/// Fails with `StoreError::Encode` when the product has an empty id or uses
/// the key attribute name for one of its attributes.
pub fn product_to_item(product: &Product) -> Result<Item, StoreError> {
    validate_product(product)?;

    let mut item = HashMap::with_capacity(product.attributes.len() + 1);

    // Key
    item.insert(ID_KEY.to_string(), AttributeValue::S(product.id.clone()));

    // Data
    for (name, value) in &product.attributes {
        item.insert(name.clone(), value_to_attribute(value));
    }

    Ok(item)
}

/// Convert a DynamoDB item to Product.
pub fn item_to_product(item: &Item) -> Result<Product, StoreError> {
    let id = get_string(item, ID_KEY)?;

    let mut attributes = Attributes::new();
    for (name, attribute) in item {
        if name == ID_KEY {
            continue;
        }
        let value = attribute_to_value(attribute)
            .map_err(|e| StoreError::Decode(format!("Field '{name}' of item '{id}': {e}")))?;
        attributes.insert(name.clone(), value);
    }

    Ok(Product { id, attributes })
}

// ============================================================================
// Value conversions
// ============================================================================

/// Convert a JSON value to its DynamoDB representation.
///
/// Whole-number floats are written as integers, which is how the service
/// returns them.
pub fn value_to_attribute(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(canonical_number(n).to_string()),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Array(values) => AttributeValue::L(values.iter().map(value_to_attribute).collect()),
        Value::Object(map) => AttributeValue::M(
            map.iter()
                .map(|(k, v)| (k.clone(), value_to_attribute(v)))
                .collect(),
        ),
    }
}

/// Convert a DynamoDB attribute to a JSON value.
///
/// String and number sets decode to arrays. Binary attributes have no JSON
/// counterpart and are rejected.
pub fn attribute_to_value(attribute: &AttributeValue) -> Result<Value, String> {
    match attribute {
        AttributeValue::S(s) => Ok(Value::String(s.clone())),
        AttributeValue::N(n) => parse_number(n).map(Value::Number),
        AttributeValue::Bool(b) => Ok(Value::Bool(*b)),
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::L(values) => values
            .iter()
            .map(attribute_to_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::M(map) => map
            .iter()
            .map(|(k, v)| attribute_to_value(v).map(|v| (k.clone(), v)))
            .collect::<Result<Map<_, _>, _>>()
            .map(Value::Object),
        AttributeValue::Ss(values) => Ok(Value::Array(
            values.iter().cloned().map(Value::String).collect(),
        )),
        AttributeValue::Ns(values) => values
            .iter()
            .map(|n| parse_number(n).map(Value::Number))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::B(_) | AttributeValue::Bs(_) => {
            Err("binary attributes are not supported".to_string())
        }
        _ => Err("unknown attribute type".to_string()),
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(item: &Item, key: &str) -> Result<String, StoreError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| StoreError::Decode(format!("Missing or invalid field: {key}")))
}

fn parse_number(n: &str) -> Result<Number, String> {
    n.trim()
        .parse::<Number>()
        .map(|number| canonical_number(&number))
        .map_err(|_| format!("invalid number: {n}"))
}
