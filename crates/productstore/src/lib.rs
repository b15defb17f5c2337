//! Product store adapters.
//!
//! Implements [`ProductStore`] on top of DynamoDB (feature `dynamodb`) and an
//! in-memory map (feature `inmemory`).
//!
//! ```rust,ignore
//! use productstore::{DynamoDbProductStore, ProductStore, StoreConfig};
//!
//! let config = StoreConfig::new("products").local();
//! let store = DynamoDbProductStore::connect(&config).await?;
//! let page = store.list_products(None).await?;
//! ```

pub mod config;
pub mod storage;

pub use config::{Endpoint, StoreConfig};
pub use productstore_core::product::{Product, ProductRange};
pub use productstore_core::storage::{ProductStore, Result, StoreError};

#[cfg(feature = "dynamodb")]
pub use storage::DynamoDbProductStore;

#[cfg(feature = "inmemory")]
pub use storage::InMemoryProductStore;
