use std::env;

use productstore_core::storage::{Result, StoreError, DEFAULT_PAGE_SIZE};

/// Endpoint of the local emulator used in local mode.
pub const LOCAL_ENDPOINT_URL: &str = "http://localhost:4566";

/// Region sent to the local emulator.
pub const LOCAL_REGION: &str = "us-west-2";

/// Table used when none is configured.
pub const DEFAULT_TABLE_NAME: &str = "products";

/// Where requests are sent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Endpoint {
    /// The real service, with credentials and region resolved by the SDK
    /// default provider chain.
    #[default]
    Cloud,
    /// A local emulator. Requests are signed with static dummy credentials.
    Local { url: String, region: String },
}

impl Endpoint {
    /// The local emulator at its default address.
    pub fn local() -> Self {
        Self::Local {
            url: LOCAL_ENDPOINT_URL.to_string(),
            region: LOCAL_REGION.to_string(),
        }
    }

    /// Returns true for the local emulator.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local { .. })
    }

    /// Returns a display string for the target environment.
    pub fn target_display(&self) -> String {
        match self {
            Self::Cloud => "AWS DynamoDB (default credentials)".to_string(),
            Self::Local { url, region } => format!("Local DynamoDB ({url}, region: {region})"),
        }
    }
}

/// Configuration for a product store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Name of the table holding one item per product.
    pub table_name: String,
    /// Target service endpoint.
    pub endpoint: Endpoint,
    /// Maximum number of products returned per page.
    pub page_size: u32,
}

impl StoreConfig {
    /// Creates a cloud configuration for the given table.
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            endpoint: Endpoint::Cloud,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Targets the local emulator at its default address.
    pub fn local(self) -> Self {
        self.with_endpoint(Endpoint::local())
    }

    /// Sets the target endpoint.
    pub fn with_endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Sets the page size used when listing.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Checks the configuration before any client is built.
    pub fn validate(&self) -> Result<()> {
        if self.table_name.trim().is_empty() {
            return Err(StoreError::Configuration(
                "table name cannot be empty".to_string(),
            ));
        }
        if self.page_size == 0 {
            return Err(StoreError::Configuration(
                "page size must be at least 1".to_string(),
            ));
        }
        if let Endpoint::Local { url, region } = &self.endpoint {
            if url.trim().is_empty() {
                return Err(StoreError::Configuration(
                    "local endpoint url cannot be empty".to_string(),
                ));
            }
            if region.trim().is_empty() {
                return Err(StoreError::Configuration(
                    "local region cannot be empty".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Load configuration from environment variables.
    ///
    /// Meant for binaries and test harnesses; library code should build a
    /// `StoreConfig` explicitly.
    ///
    /// Environment variables:
    /// - `ENVIRONMENT` - exactly `local` targets the local emulator
    /// - `DYNAMODB_ENDPOINT_URL` - emulator URL (default: "http://localhost:4566")
    /// - `DYNAMODB_TABLE_NAME` - table name (default: "products")
    /// - `PRODUCTS_PAGE_SIZE` - products per page (default: 20)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a configuration from a key lookup function.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let table_name =
            lookup("DYNAMODB_TABLE_NAME").unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string());

        let page_size = match lookup("PRODUCTS_PAGE_SIZE") {
            Some(value) => value.trim().parse::<u32>().map_err(|_| {
                StoreError::Configuration(format!("invalid PRODUCTS_PAGE_SIZE: {value}"))
            })?,
            None => DEFAULT_PAGE_SIZE,
        };

        let is_local = lookup("ENVIRONMENT").is_some_and(|v| v == "local");
        let endpoint = if is_local {
            Endpoint::Local {
                url: lookup("DYNAMODB_ENDPOINT_URL")
                    .unwrap_or_else(|| LOCAL_ENDPOINT_URL.to_string()),
                region: LOCAL_REGION.to_string(),
            }
        } else {
            Endpoint::Cloud
        };

        let config = Self {
            table_name,
            endpoint,
            page_size,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = StoreConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.table_name, "products");
        assert_eq!(config.endpoint, Endpoint::Cloud);
        assert_eq!(config.page_size, 20);
    }

    #[test]
    fn test_local_environment_selects_emulator() {
        let config = StoreConfig::from_lookup(lookup_from(&[("ENVIRONMENT", "local")])).unwrap();

        assert_eq!(
            config.endpoint,
            Endpoint::Local {
                url: "http://localhost:4566".to_string(),
                region: "us-west-2".to_string(),
            }
        );
    }

    #[test]
    fn test_other_environment_uses_cloud() {
        let config =
            StoreConfig::from_lookup(lookup_from(&[("ENVIRONMENT", "production")])).unwrap();

        assert_eq!(config.endpoint, Endpoint::Cloud);
    }

    #[test]
    fn test_environment_match_is_exact() {
        for value in ["LOCAL", "Local", " local"] {
            let config =
                StoreConfig::from_lookup(lookup_from(&[("ENVIRONMENT", value)])).unwrap();
            assert_eq!(config.endpoint, Endpoint::Cloud, "{value:?}");
        }
    }

    #[test]
    fn test_endpoint_override_only_applies_locally() {
        let local = StoreConfig::from_lookup(lookup_from(&[
            ("ENVIRONMENT", "local"),
            ("DYNAMODB_ENDPOINT_URL", "http://localhost:8000"),
        ]))
        .unwrap();
        let cloud = StoreConfig::from_lookup(lookup_from(&[(
            "DYNAMODB_ENDPOINT_URL",
            "http://localhost:8000",
        )]))
        .unwrap();

        assert!(matches!(
            local.endpoint,
            Endpoint::Local { ref url, .. } if url == "http://localhost:8000"
        ));
        assert_eq!(cloud.endpoint, Endpoint::Cloud);
    }

    #[test]
    fn test_table_name_and_page_size_from_env() {
        let config = StoreConfig::from_lookup(lookup_from(&[
            ("DYNAMODB_TABLE_NAME", "catalog"),
            ("PRODUCTS_PAGE_SIZE", "50"),
        ]))
        .unwrap();

        assert_eq!(config.table_name, "catalog");
        assert_eq!(config.page_size, 50);
    }

    #[test]
    fn test_invalid_page_size_is_rejected() {
        let result = StoreConfig::from_lookup(lookup_from(&[("PRODUCTS_PAGE_SIZE", "many")]));
        assert!(matches!(result, Err(StoreError::Configuration(_))));

        let result = StoreConfig::from_lookup(lookup_from(&[("PRODUCTS_PAGE_SIZE", "0")]));
        assert!(matches!(result, Err(StoreError::Configuration(_))));
    }

    #[test]
    fn test_validate_rejects_empty_table_name() {
        let result = StoreConfig::new("  ").validate();
        assert_eq!(
            result,
            Err(StoreError::Configuration(
                "table name cannot be empty".to_string()
            ))
        );
    }

    #[test]
    fn test_validate_rejects_empty_local_url() {
        let config = StoreConfig::new("products").with_endpoint(Endpoint::Local {
            url: String::new(),
            region: "us-west-2".to_string(),
        });
        assert!(matches!(
            config.validate(),
            Err(StoreError::Configuration(_))
        ));
    }

    #[test]
    fn test_builder() {
        let config = StoreConfig::new("products").local().with_page_size(5);

        assert!(config.endpoint.is_local());
        assert_eq!(config.page_size, 5);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_target_display() {
        assert_eq!(
            Endpoint::local().target_display(),
            "Local DynamoDB (http://localhost:4566, region: us-west-2)"
        );
        assert_eq!(
            Endpoint::Cloud.target_display(),
            "AWS DynamoDB (default credentials)"
        );
    }
}
