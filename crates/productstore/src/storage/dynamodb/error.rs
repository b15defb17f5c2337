//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `StoreError::Transport` from
//! `productstore_core::storage`, keeping the operation name and a readable
//! message for the common service failures.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use productstore_core::storage::StoreError;

const TABLE_NOT_FOUND: &str = "Table not found";
const THROUGHPUT_EXCEEDED: &str = "Throughput exceeded, please retry";
const REQUEST_LIMIT_EXCEEDED: &str = "Request limit exceeded, please retry";
const INTERNAL_SERVER_ERROR: &str = "DynamoDB internal server error";

/// Map a Scan SDK error to StoreError.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(err: SdkError<ScanError, R>) -> StoreError {
    let message = match err.into_service_error() {
        ScanError::ResourceNotFoundException(_) => TABLE_NOT_FOUND.to_string(),
        ScanError::ProvisionedThroughputExceededException(_) => THROUGHPUT_EXCEEDED.to_string(),
        ScanError::RequestLimitExceeded(_) => REQUEST_LIMIT_EXCEEDED.to_string(),
        ScanError::InternalServerError(_) => INTERNAL_SERVER_ERROR.to_string(),
        err => DisplayErrorContext(&err).to_string(),
    };
    StoreError::transport("Scan", message)
}

/// Map a GetItem SDK error to StoreError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
) -> StoreError {
    let message = match err.into_service_error() {
        GetItemError::ResourceNotFoundException(_) => TABLE_NOT_FOUND.to_string(),
        GetItemError::ProvisionedThroughputExceededException(_) => THROUGHPUT_EXCEEDED.to_string(),
        GetItemError::RequestLimitExceeded(_) => REQUEST_LIMIT_EXCEEDED.to_string(),
        GetItemError::InternalServerError(_) => INTERNAL_SERVER_ERROR.to_string(),
        err => DisplayErrorContext(&err).to_string(),
    };
    StoreError::transport("GetItem", message)
}

/// Map a PutItem SDK error to StoreError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> StoreError {
    let message = match err.into_service_error() {
        PutItemError::ResourceNotFoundException(_) => TABLE_NOT_FOUND.to_string(),
        PutItemError::ProvisionedThroughputExceededException(_) => THROUGHPUT_EXCEEDED.to_string(),
        PutItemError::RequestLimitExceeded(_) => REQUEST_LIMIT_EXCEEDED.to_string(),
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            "Item collection size limit exceeded".to_string()
        }
        PutItemError::TransactionConflictException(_) => {
            "Transaction conflict, please retry".to_string()
        }
        PutItemError::InternalServerError(_) => INTERNAL_SERVER_ERROR.to_string(),
        err => DisplayErrorContext(&err).to_string(),
    };
    StoreError::transport("PutItem", message)
}

/// Map a DeleteItem SDK error to StoreError.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
) -> StoreError {
    let message = match err.into_service_error() {
        DeleteItemError::ResourceNotFoundException(_) => TABLE_NOT_FOUND.to_string(),
        DeleteItemError::ProvisionedThroughputExceededException(_) => {
            THROUGHPUT_EXCEEDED.to_string()
        }
        DeleteItemError::RequestLimitExceeded(_) => REQUEST_LIMIT_EXCEEDED.to_string(),
        DeleteItemError::TransactionConflictException(_) => {
            "Transaction conflict, please retry".to_string()
        }
        DeleteItemError::InternalServerError(_) => INTERNAL_SERVER_ERROR.to_string(),
        err => DisplayErrorContext(&err).to_string(),
    };
    StoreError::transport("DeleteItem", message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::types::error::{
        InternalServerError, ProvisionedThroughputExceededException, RequestLimitExceeded,
        ResourceNotFoundException,
    };

    fn service_error<E>(err: E) -> SdkError<E, ()> {
        SdkError::service_error(err, ())
    }

    #[test]
    fn test_scan_table_not_found() {
        let err = service_error(ScanError::ResourceNotFoundException(
            ResourceNotFoundException::builder().build(),
        ));

        assert_eq!(
            map_scan_error(err),
            StoreError::transport("Scan", "Table not found")
        );
    }

    #[test]
    fn test_get_item_throughput_exceeded() {
        let err = service_error(GetItemError::ProvisionedThroughputExceededException(
            ProvisionedThroughputExceededException::builder().build(),
        ));

        assert_eq!(
            map_get_item_error(err).to_string(),
            "GetItem failed: Throughput exceeded, please retry"
        );
    }

    #[test]
    fn test_put_item_request_limit() {
        let err = service_error(PutItemError::RequestLimitExceeded(
            RequestLimitExceeded::builder().build(),
        ));

        assert_eq!(
            map_put_item_error(err),
            StoreError::transport("PutItem", "Request limit exceeded, please retry")
        );
    }

    #[test]
    fn test_delete_item_internal_error() {
        let err = service_error(DeleteItemError::InternalServerError(
            InternalServerError::builder().build(),
        ));

        let mapped = map_delete_item_error(err);
        assert!(mapped.is_transport());
        assert_eq!(
            mapped.to_string(),
            "DeleteItem failed: DynamoDB internal server error"
        );
    }

    #[test]
    fn test_timeout_is_transport_error() {
        let err: SdkError<ScanError, ()> = SdkError::timeout_error("deadline elapsed");

        assert!(matches!(
            map_scan_error(err),
            StoreError::Transport {
                operation: "Scan",
                ..
            }
        ));
    }
}
