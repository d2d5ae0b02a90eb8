//! AWS S3 implementation of [`ObjectStorage`].

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

use crate::config::S3Config;
use crate::error::StorageError;
use crate::ObjectStorage;

/// An S3 bucket plus the public URL prefix its objects are served from.
pub struct S3ObjectStore {
    client: Client,
    bucket: String,
    base_url: String,
}

impl S3ObjectStore {
    /// Build an S3 client from explicit credentials in `config`.
    pub async fn connect(config: S3Config) -> Self {
        let credentials =
            Credentials::from_keys(&config.access_key, &config.secret_key, None);
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .load()
            .await;
        Self {
            client: Client::new(&sdk_config),
            bucket: config.bucket,
            base_url: config.base_url,
        }
    }
}

#[async_trait]
impl ObjectStorage for S3ObjectStore {
    async fn put_object(&self, key: &str, bytes: Vec<u8>) -> Result<(), StorageError> {
        let result = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(bytes))
            .send()
            .await;

        match result {
            Ok(_) => {
                tracing::debug!(key, bucket = %self.bucket, "Object uploaded");
                Ok(())
            }
            Err(SdkError::ServiceError(ctx)) => Err(StorageError::Rejected(ctx.err().to_string())),
            Err(other) => Err(StorageError::Upload(other.to_string())),
        }
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}{}/{}", self.base_url, self.bucket, key)
    }
}
