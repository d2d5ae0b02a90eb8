//! Object storage for uploaded photos.
//!
//! Handlers talk to a [`ObjectStorage`] trait object so tests can swap in
//! a mock; production wires in [`S3ObjectStore`] built from [`S3Config`].

pub mod config;
pub mod error;
pub mod s3;

pub use config::S3Config;
pub use error::StorageError;
pub use s3::S3ObjectStore;

use async_trait::async_trait;

/// A remote store for opaque binary objects.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Upload `bytes` under `key` in the configured bucket.
    async fn put_object(&self, key: &str, bytes: Vec<u8>) -> Result<(), StorageError>;

    /// The public URL an object uploaded under `key` is served from.
    fn public_url(&self, key: &str) -> String;
}
