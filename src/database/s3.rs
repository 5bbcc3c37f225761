//! S3 storage backend.
//!
//! Every key maps to one JSON object in the configured bucket.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::Client as S3Client;
use aws_sdk_s3::error::ProvideErrorMetadata;
use aws_sdk_s3::primitives::ByteStream;
use serde_json::Value;

use super::store::{StorageBackend, StoreError};

const JSON_CONTENT_TYPE: &str = "application/json";

pub struct S3Backend {
    client: S3Client,
    bucket: String,
}

impl S3Backend {
    pub fn new(client: S3Client, bucket: String) -> Self {
        Self { client, bucket }
    }

    /// Build a client from the default AWS credential chain for `region`.
    pub async fn connect(bucket: &str, region: &str) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;

        Self::new(S3Client::new(&sdk_config), bucket.to_string())
    }

    fn location(&self, key: &str) -> String {
        format!("s3://{}/{}", self.bucket, key)
    }
}

#[async_trait]
impl StorageBackend for S3Backend {
    fn name(&self) -> &'static str {
        "s3"
    }

    async fn read(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let response = match self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                if err
                    .as_service_error()
                    .is_some_and(|service_err| service_err.is_no_such_key())
                {
                    return Ok(None);
                }
                log::error!("Failed to read {}: {}", self.location(key), err);
                return Err(StoreError::backend(key, err));
            }
        };

        let bytes = response
            .body
            .collect()
            .await
            .map_err(|e| StoreError::backend(key, e))?
            .into_bytes();

        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    async fn write(&self, key: &str, value: &Value) -> Result<(), StoreError> {
        let body = serde_json::to_vec(value)?;

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(JSON_CONTENT_TYPE)
            .send()
            .await
            .map_err(|e| {
                log::error!("Failed to write {}: {}", self.location(key), e);
                StoreError::backend(key, e)
            })?;

        Ok(())
    }

    async fn write_if_absent(&self, key: &str, value: &Value) -> Result<bool, StoreError> {
        let body = serde_json::to_vec(value)?;

        match self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(JSON_CONTENT_TYPE)
            .if_none_match("*")
            .send()
            .await
        {
            Ok(_) => Ok(true),
            Err(err) => {
                if is_precondition_failed(err.as_service_error().and_then(|e| e.code())) {
                    return Ok(false);
                }
                log::error!("Conditional write to {} failed: {}", self.location(key), err);
                Err(StoreError::backend(key, err))
            }
        }
    }
}

/// S3 reports a lost `If-None-Match` race as `PreconditionFailed`, and as
/// `ConditionalRequestConflict` when a concurrent upload of the same key is
/// still in flight.
fn is_precondition_failed(code: Option<&str>) -> bool {
    matches!(
        code,
        Some("PreconditionFailed") | Some("ConditionalRequestConflict")
    )
}
