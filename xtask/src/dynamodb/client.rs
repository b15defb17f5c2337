//! AWS SDK client setup (Imperative Shell).

use super::error::{DynamodbError, Result};
use super::planning::{TableState, TableStatus};
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::operation::describe_table::DescribeTableError;
use aws_sdk_dynamodb::types::KeyType;
use aws_sdk_dynamodb::Client;
use productstore::StoreConfig;

/// Creates a DynamoDB client for the target selected by the environment.
pub async fn create_client(config: &StoreConfig) -> Result<Client> {
    Ok(productstore::storage::dynamodb::create_client(config).await?)
}

/// Fetches current table state, returns None if table doesn't exist.
pub async fn get_table_state(client: &Client, table_name: &str) -> Result<Option<TableState>> {
    match client.describe_table().table_name(table_name).send().await {
        Ok(response) => {
            let Some(table) = response.table() else {
                return Ok(None);
            };

            let key_schema = table
                .key_schema()
                .iter()
                .map(|key| {
                    let name = key.attribute_name();
                    let attribute_type = table
                        .attribute_definitions()
                        .iter()
                        .find(|def| def.attribute_name() == name)
                        .map_or("?", |def| def.attribute_type().as_str());
                    match key.key_type() {
                        KeyType::Hash => format!("{name} ({attribute_type})"),
                        _ => format!("{name} ({attribute_type}, range)"),
                    }
                })
                .collect();

            let status = match table.table_status() {
                Some(aws_sdk_dynamodb::types::TableStatus::Active) => TableStatus::Active,
                Some(aws_sdk_dynamodb::types::TableStatus::Creating) => TableStatus::Creating,
                Some(aws_sdk_dynamodb::types::TableStatus::Updating) => TableStatus::Updating,
                Some(aws_sdk_dynamodb::types::TableStatus::Deleting) => TableStatus::Deleting,
                _ => TableStatus::Active,
            };

            Ok(Some(TableState {
                status,
                key_schema,
            }))
        }
        Err(err) => match err.into_service_error() {
            DescribeTableError::ResourceNotFoundException(_) => Ok(None),
            err => Err(DynamodbError::AwsSdk(
                DisplayErrorContext(&err).to_string(),
            )),
        },
    }
}
