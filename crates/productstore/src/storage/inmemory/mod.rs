//! In-memory storage backend for testing.
//!
//! This module provides an in-memory implementation of the product store that
//! keeps products in a `BTreeMap` wrapped in `Arc<RwLock<_>>`. This is useful
//! for testing and development scenarios where persistence is not required.
//!
//! # Example
//!
//! ```rust,ignore
//! use productstore::storage::inmemory::InMemoryProductStore;
//!
//! let store = InMemoryProductStore::new();
//! // Use store for testing...
//! ```

mod repository;

pub use repository::InMemoryProductStore;
