//! DynamoDB repository implementation.
//!
//! Implements the `ProductStore` trait from `productstore_core::storage`
//! using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;

use productstore_core::product::{Product, ProductRange};
use productstore_core::storage::{ProductStore, Result, DEFAULT_PAGE_SIZE};

use super::client::create_client;
use super::conversions::{item_to_product, product_to_item};
use super::error::{map_delete_item_error, map_get_item_error, map_put_item_error, map_scan_error};
use super::keys;
use crate::config::StoreConfig;

/// DynamoDB-based product store.
///
/// Each operation is exactly one request; nothing is retried or cached here.
#[derive(Debug, Clone)]
pub struct DynamoDbProductStore {
    client: Client,
    table_name: String,
    page_size: u32,
}

impl DynamoDbProductStore {
    /// Creates a new store with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Sets the maximum number of products returned per page (at least 1).
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Validates the configuration and builds a client for it.
    pub async fn connect(config: &StoreConfig) -> Result<Self> {
        config.validate()?;
        let client = create_client(config).await?;

        tracing::info!(
            table = %config.table_name,
            target_env = %config.endpoint.target_display(),
            "Product store connected"
        );

        Ok(Self::new(client, config.table_name.clone()).with_page_size(config.page_size))
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Get the page size.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Get the underlying client.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl ProductStore for DynamoDbProductStore {
    async fn list_products(&self, next: Option<&str>) -> Result<ProductRange> {
        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .limit(i32::try_from(self.page_size).unwrap_or(i32::MAX))
            .set_exclusive_start_key(next.map(keys::product_key))
            .send()
            .await
            .map_err(map_scan_error)
            .inspect_err(|e| tracing::warn!(table = %self.table_name, error = %e, "Scan failed"))?;

        let items = result.items.unwrap_or_default();
        let products = items
            .iter()
            .map(item_to_product)
            .collect::<Result<Vec<_>>>()?;
        let next = keys::next_token(result.last_evaluated_key.as_ref())?;

        tracing::debug!(
            table = %self.table_name,
            count = products.len(),
            has_next = next.is_some(),
            "Listed products"
        );

        Ok(ProductRange { products, next })
    }

    async fn get_product(&self, id: &str) -> Result<Option<Product>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(keys::product_key(id)))
            .send()
            .await
            .map_err(map_get_item_error)
            .inspect_err(|e| {
                tracing::warn!(table = %self.table_name, %id, error = %e, "GetItem failed")
            })?;

        let product = match result.item {
            Some(item) if !item.is_empty() => Some(item_to_product(&item)?),
            _ => None,
        };

        tracing::debug!(table = %self.table_name, %id, found = product.is_some(), "Got product");

        Ok(product)
    }

    async fn put_product(&self, product: &Product) -> Result<()> {
        let item = product_to_item(product)?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(map_put_item_error)
            .inspect_err(|e| {
                tracing::warn!(table = %self.table_name, id = %product.id, error = %e, "PutItem failed")
            })?;

        tracing::debug!(table = %self.table_name, id = %product.id, "Put product");

        Ok(())
    }

    async fn delete_product(&self, id: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(keys::product_key(id)))
            .send()
            .await
            .map_err(map_delete_item_error)
            .inspect_err(|e| {
                tracing::warn!(table = %self.table_name, %id, error = %e, "DeleteItem failed")
            })?;

        tracing::debug!(table = %self.table_name, %id, "Deleted product");

        Ok(())
    }
}
