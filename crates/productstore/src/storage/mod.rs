//! Storage backend implementations.
//!
//! Concrete implementations of [`productstore_core::storage::ProductStore`],
//! selected at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB backend using `aws-sdk-dynamodb`
//! - `inmemory` (default): `BTreeMap` backend for tests and local development
//!
//! Build without DynamoDB:
//! ```bash
//! cargo build -p productstore --no-default-features --features inmemory
//! ```

#[cfg(not(any(feature = "dynamodb", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable 'dynamodb' or 'inmemory' feature. \
    Example: cargo build -p productstore --features dynamodb"
);

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbProductStore;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryProductStore;
