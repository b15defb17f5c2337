use thiserror::Error;

/// Errors that can occur when validating a product before it is stored.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProductError {
    #[error("Product id cannot be empty")]
    EmptyId,
    #[error("Attribute name is reserved: {0}")]
    ReservedAttribute(String),
    #[error("Attribute name cannot be empty")]
    EmptyAttributeName,
}
