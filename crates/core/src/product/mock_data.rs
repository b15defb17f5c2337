//! Mock data generation for testing and seeding.
//!
//! Pure functions with no side effects, usable from unit tests, integration
//! tests and table seeding.

use serde_json::json;

use super::types::Product;

const NAMES: [&str; 8] = [
    "Widget", "Gadget", "Sprocket", "Gizmo", "Doohickey", "Flange", "Bracket", "Spindle",
];

const CATEGORIES: [&str; 4] = ["hardware", "tools", "spares", "accessories"];

/// Generate `count` demo products with ids `product-0001`, `product-0002`, ...
///
/// Ids are zero-padded so lexicographic order matches generation order.
///
/// # Example
///
/// ```
/// use productstore_core::product::generate_seed_products;
///
/// let products = generate_seed_products(25);
///
/// assert_eq!(products.len(), 25);
/// assert_eq!(products[0].id, "product-0001");
/// ```
pub fn generate_seed_products(count: u32) -> Vec<Product> {
    (1..=count)
        .map(|n| {
            let i = (n - 1) as usize;
            Product::new(format!("product-{n:04}"))
                .with_attribute("name", format!("{} {}", NAMES[i % NAMES.len()], n))
                .with_attribute("category", CATEGORIES[i % CATEGORIES.len()])
                .with_attribute("price", seed_price(n))
                .with_attribute("stock", json!(n % 50))
                .with_attribute("available", json!(n % 7 != 0))
        })
        .collect()
}

/// Price in the 0.00..=99.99 range derived from the product number.
fn seed_price(n: u32) -> f64 {
    ((u64::from(n) * 199) % 10_000) as f64 / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::validate_product;

    #[test]
    fn test_generates_requested_count() {
        assert_eq!(generate_seed_products(0).len(), 0);
        assert_eq!(generate_seed_products(42).len(), 42);
    }

    #[test]
    fn test_ids_are_unique_and_sorted() {
        let products = generate_seed_products(120);
        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();

        let mut sorted = ids.clone();
        sorted.sort();
        sorted.dedup();

        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_seed_price_handles_large_counts() {
        assert_eq!(seed_price(1), 1.99);
        assert_eq!(seed_price(u32::MAX), 17.05);
    }

    #[test]
    fn test_whole_prices_are_integers() {
        let products = generate_seed_products(100);
        assert_eq!(products[99].attribute("price"), Some(&json!(99)));
    }

    #[test]
    fn test_generated_products_are_valid() {
        for product in generate_seed_products(30) {
            assert!(validate_product(&product).is_ok(), "{}", product.id);
            assert!(product.attribute("name").is_some());
        }
    }
}
