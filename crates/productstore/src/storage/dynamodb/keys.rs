//! DynamoDB key helpers.
//!
//! Pure functions for building the primary key of a product item and turning
//! a scan cursor into a continuation token.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use productstore_core::product::ID_ATTRIBUTE;
use productstore_core::storage::StoreError;

/// Partition key attribute of the products table.
pub const ID_KEY: &str = ID_ATTRIBUTE;

/// Generate the primary key for a product.
///
/// Pattern: `{ "id": S(<id>) }`
pub fn product_key(id: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([(ID_KEY.to_string(), AttributeValue::S(id.to_string()))])
}

/// Extract the continuation token from a scan's `LastEvaluatedKey`.
///
/// The table is keyed by `id` alone, so the cursor the service returns is
/// exactly `{ "id": S(<last id>) }` and the token is that id.
pub fn next_token(
    last_evaluated_key: Option<&HashMap<String, AttributeValue>>,
) -> Result<Option<String>, StoreError> {
    let Some(key) = last_evaluated_key.filter(|key| !key.is_empty()) else {
        return Ok(None);
    };

    match key.get(ID_KEY) {
        Some(AttributeValue::S(id)) => Ok(Some(id.clone())),
        Some(_) => Err(StoreError::Decode(format!(
            "Continuation key field '{ID_KEY}' is not a string"
        ))),
        None => Err(StoreError::Decode(format!(
            "Continuation key is missing field '{ID_KEY}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_key() {
        let key = product_key("p1");

        assert_eq!(key.len(), 1);
        assert_eq!(key.get("id").unwrap().as_s().unwrap(), "p1");
    }

    #[test]
    fn test_next_token_absent() {
        assert_eq!(next_token(None), Ok(None));
        assert_eq!(next_token(Some(&HashMap::new())), Ok(None));
    }

    #[test]
    fn test_next_token_is_last_id() {
        let key = product_key("product-0020");
        assert_eq!(next_token(Some(&key)), Ok(Some("product-0020".to_string())));
    }

    #[test]
    fn test_next_token_rejects_unexpected_key() {
        let key = HashMap::from([("id".to_string(), AttributeValue::N("7".to_string()))]);
        assert!(matches!(next_token(Some(&key)), Err(StoreError::Decode(_))));

        let key = HashMap::from([("sku".to_string(), AttributeValue::S("x".to_string()))]);
        assert!(matches!(next_token(Some(&key)), Err(StoreError::Decode(_))));
    }
}
