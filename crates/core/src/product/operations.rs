//! Pure validation and normalization for products about to be written.

use serde_json::{Number, Value};

use super::error::ProductError;
use super::types::Product;

const I64_MIN: f64 = -9_223_372_036_854_775_808.0;
const U64_END: f64 = 18_446_744_073_709_551_616.0;

/// Name of the key attribute. It is carried by `Product::id` and may not
/// appear in the attribute map.
pub const ID_ATTRIBUTE: &str = "id";

/// Validates that a product can be stored as a single keyed item.
pub fn validate_product(product: &Product) -> Result<(), ProductError> {
    if product.id.is_empty() {
        return Err(ProductError::EmptyId);
    }

    for name in product.attributes.keys() {
        if name.is_empty() {
            return Err(ProductError::EmptyAttributeName);
        }
        if name == ID_ATTRIBUTE {
            return Err(ProductError::ReservedAttribute(name.clone()));
        }
    }

    Ok(())
}

/// Rewrites a whole-number float such as `99.0` as the integer `99`.
///
/// Stored numbers have no separate float form, so `99.0` and `99` are the
/// same stored value. Both backends keep the integer form.
pub fn canonical_number(number: &Number) -> Number {
    match number.as_f64() {
        Some(f) if number.is_f64() && f.fract() == 0.0 && (I64_MIN..U64_END).contains(&f) => {
            if f < 0.0 {
                Number::from(f as i64)
            } else {
                Number::from(f as u64)
            }
        }
        _ => number.clone(),
    }
}

/// Applies `canonical_number` to every number inside `value`.
pub fn canonical_value(value: Value) -> Value {
    match value {
        Value::Number(n) => Value::Number(canonical_number(&n)),
        Value::Array(values) => Value::Array(values.into_iter().map(canonical_value).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k, canonical_value(v)))
                .collect(),
        ),
        other => other,
    }
}

/// Returns the product with every attribute in canonical form.
pub fn canonical_product(product: &Product) -> Product {
    Product {
        id: product.id.clone(),
        attributes: product
            .attributes
            .iter()
            .map(|(name, value)| (name.clone(), canonical_value(value.clone())))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_product() {
        let product = Product::new("p1").with_attribute("name", "Widget");
        assert_eq!(validate_product(&product), Ok(()));
    }

    #[test]
    fn test_product_without_attributes_is_valid() {
        assert_eq!(validate_product(&Product::new("p1")), Ok(()));
    }

    #[test]
    fn test_empty_id_is_rejected() {
        let product = Product::new("").with_attribute("name", "Widget");
        assert_eq!(validate_product(&product), Err(ProductError::EmptyId));
    }

    #[test]
    fn test_id_attribute_is_reserved() {
        let product = Product::new("p1").with_attribute("id", "p2");
        assert_eq!(
            validate_product(&product),
            Err(ProductError::ReservedAttribute("id".to_string()))
        );
    }

    #[test]
    fn test_empty_attribute_name_is_rejected() {
        let product = Product::new("p1").with_attribute("", "value");
        assert_eq!(
            validate_product(&product),
            Err(ProductError::EmptyAttributeName)
        );
    }

    #[test]
    fn test_whole_floats_become_integers() {
        assert_eq!(canonical_value(json!(99.0)), json!(99));
        assert_eq!(canonical_value(json!(-3.0)), json!(-3));
        assert_eq!(canonical_value(json!(-0.0)), json!(0));
        assert!(canonical_value(json!(99.0)).is_u64());
    }

    #[test]
    fn test_other_numbers_are_unchanged() {
        assert_eq!(canonical_value(json!(12.5)), json!(12.5));
        assert_eq!(canonical_value(json!(u64::MAX)), json!(u64::MAX));
        assert_eq!(canonical_value(json!(i64::MIN)), json!(i64::MIN));
        assert!(canonical_value(json!(1e30)).is_f64());
    }

    #[test]
    fn test_canonical_value_recurses() {
        assert_eq!(
            canonical_value(json!({"dims": [1.0, 2.5], "name": "Widget"})),
            json!({"dims": [1, 2.5], "name": "Widget"})
        );
    }

    #[test]
    fn test_canonical_product_matches_builder() {
        let mut product = Product::new("p1");
        product.attributes.insert("price".to_string(), json!(99.0));

        assert_eq!(
            canonical_product(&product),
            Product::new("p1").with_attribute("price", 99)
        );
    }
}
