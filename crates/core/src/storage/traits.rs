use async_trait::async_trait;

use crate::product::{Product, ProductRange};

use super::Result;

/// Number of products returned per page unless a backend is configured
/// otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Storage for products keyed by id.
///
/// Every method is a single request against the backend. Implementations do
/// not retry and keep no state between calls beyond their client handle.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Lists one page of products.
    ///
    /// `next` must be `None` for the first page, or a token taken from a
    /// previously returned `ProductRange::next`.
    async fn list_products(&self, next: Option<&str>) -> Result<ProductRange>;

    /// Gets a product by its id. Returns `Ok(None)` when it does not exist.
    async fn get_product(&self, id: &str) -> Result<Option<Product>>;

    /// Inserts a product, or replaces every attribute of an existing one.
    async fn put_product(&self, product: &Product) -> Result<()>;

    /// Deletes a product by its id. Deleting an unknown id succeeds.
    async fn delete_product(&self, id: &str) -> Result<()>;
}
