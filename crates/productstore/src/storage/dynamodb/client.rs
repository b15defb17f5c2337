//! AWS SDK client setup.

use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::config::Credentials;
use aws_sdk_dynamodb::Client;
use productstore_core::storage::{Result, StoreError};

use crate::config::{Endpoint, StoreConfig};

/// Creates a DynamoDB client for the configured endpoint.
///
/// The cloud endpoint relies on the SDK default chain for credentials and
/// region; failing to resolve a region is reported as a configuration error
/// instead of surfacing on the first request.
pub async fn create_client(config: &StoreConfig) -> Result<Client> {
    let loader = aws_config::defaults(BehaviorVersion::latest());

    let loader = match &config.endpoint {
        Endpoint::Cloud => loader,
        Endpoint::Local { url, region } => loader
            .region(Region::new(region.clone()))
            .endpoint_url(url)
            .credentials_provider(Credentials::new(
                "local",
                "local",
                None,
                None,
                "productstore-local",
            )),
    };

    let sdk_config = loader.load().await;

    if sdk_config.region().is_none() {
        return Err(StoreError::Configuration(
            "unable to resolve an AWS region; set AWS_REGION or configure a profile".to_string(),
        ));
    }

    tracing::debug!(
        target_env = %config.endpoint.target_display(),
        region = ?sdk_config.region(),
        "DynamoDB client configured"
    );

    Ok(Client::new(&sdk_config))
}
