//! Seed command implementation.

use super::error::Result;
use productstore::{DynamoDbProductStore, Product, ProductStore};

/// Write products one at a time through the store, returning how many were
/// written.
pub async fn seed_products(store: &DynamoDbProductStore, products: &[Product]) -> Result<usize> {
    let mut count = 0;
    for product in products {
        store.put_product(product).await?;
        count += 1;
    }
    Ok(count)
}

/// Format a one-line summary of a product for display.
pub fn format_product(product: &Product) -> String {
    match product.attribute("name").and_then(|v| v.as_str()) {
        Some(name) => format!("{} - {}", product.id, name),
        None => product.id.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_product() {
        let named = Product::new("p1").with_attribute("name", "Widget");
        assert_eq!(format_product(&named), "p1 - Widget");

        let unnamed = Product::new("p2").with_attribute("name", 42);
        assert_eq!(format_product(&unnamed), "p2");
    }
}
