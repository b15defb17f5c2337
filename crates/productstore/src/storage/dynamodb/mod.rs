//! DynamoDB storage backend implementation.
//!
//! Provides a DynamoDB-based implementation of the product store using
//! `aws-sdk-dynamodb`. Products live one item per id in a table whose only
//! key is the string partition key `id`.

mod client;
mod conversions;
mod error;
mod keys;
mod repository;

pub use client::create_client;
pub use conversions::{item_to_product, product_to_item};
pub use keys::ID_KEY;
pub use repository::DynamoDbProductStore;
