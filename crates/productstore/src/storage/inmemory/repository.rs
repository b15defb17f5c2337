//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use productstore_core::product::{canonical_product, validate_product, Product, ProductRange};
use productstore_core::storage::{ProductStore, Result, DEFAULT_PAGE_SIZE};

/// In-memory storage backend for testing.
///
/// Products are kept ordered by id, so listing walks them in id order and the
/// continuation token is the id of the last product on the page. Data is not
/// persisted and will be lost when the last clone is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryProductStore {
    products: Arc<RwLock<BTreeMap<String, Product>>>,
    page_size: u32,
}

impl Default for InMemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryProductStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(BTreeMap::new())),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Sets the maximum number of products returned per page (at least 1).
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Returns the number of stored products.
    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    /// Returns true if no products are stored.
    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn list_products(&self, next: Option<&str>) -> Result<ProductRange> {
        let products = self.products.read().await;

        let lower = match next {
            Some(token) => Bound::Excluded(token.to_string()),
            None => Bound::Unbounded,
        };
        let mut remaining = products
            .range::<String, _>((lower, Bound::Unbounded))
            .map(|(_, product)| product);

        let page: Vec<Product> = remaining
            .by_ref()
            .take(self.page_size as usize)
            .cloned()
            .collect();
        let next = match remaining.next() {
            Some(_) => page.last().map(|product| product.id.clone()),
            None => None,
        };

        Ok(ProductRange {
            products: page,
            next,
        })
    }

    async fn get_product(&self, id: &str) -> Result<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(id).cloned())
    }

    async fn put_product(&self, product: &Product) -> Result<()> {
        validate_product(product)?;

        let mut products = self.products.write().await;
        products.insert(product.id.clone(), canonical_product(product));
        Ok(())
    }

    async fn delete_product(&self, id: &str) -> Result<()> {
        let mut products = self.products.write().await;
        products.remove(id);
        Ok(())
    }
}
