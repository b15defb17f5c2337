use thiserror::Error;

use crate::product::ProductError;

/// Errors that can occur during product store operations.
///
/// A missing product is not an error: lookups return `Ok(None)` and deletes
/// of unknown ids succeed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Invalid configuration: {0}")]
    Configuration(String),
    #[error("{operation} failed: {message}")]
    Transport {
        operation: &'static str,
        message: String,
    },
    #[error("Failed to encode product: {0}")]
    Encode(String),
    #[error("Failed to decode item: {0}")]
    Decode(String),
}

impl StoreError {
    /// Creates a transport error for the named service operation.
    pub fn transport(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Transport {
            operation,
            message: message.into(),
        }
    }

    /// Returns true if the request never produced a usable response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

impl From<ProductError> for StoreError {
    fn from(err: ProductError) -> Self {
        Self::Encode(err.to_string())
    }
}

/// Result type for product store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_display() {
        let error = StoreError::Configuration("table name cannot be empty".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid configuration: table name cannot be empty"
        );
    }

    #[test]
    fn test_transport_display() {
        let error = StoreError::transport("Scan", "Table not found");
        assert_eq!(error.to_string(), "Scan failed: Table not found");
        assert!(error.is_transport());
    }

    #[test]
    fn test_encode_display() {
        let error = StoreError::Encode("Product id cannot be empty".to_string());
        assert_eq!(
            error.to_string(),
            "Failed to encode product: Product id cannot be empty"
        );
        assert!(!error.is_transport());
    }

    #[test]
    fn test_decode_display() {
        let error = StoreError::Decode("Missing or invalid field: id".to_string());
        assert_eq!(
            error.to_string(),
            "Failed to decode item: Missing or invalid field: id"
        );
        assert!(!error.is_transport());
    }

    #[test]
    fn test_from_product_error() {
        let error: StoreError = ProductError::EmptyId.into();
        assert_eq!(
            error,
            StoreError::Encode("Product id cannot be empty".to_string())
        );
    }
}
