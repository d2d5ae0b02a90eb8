use crate::error::StorageError;

/// S3 configuration loaded from environment variables.
///
/// Credentials, bucket, and base URL have no defaults; a missing value is
/// an explicit [`StorageError::MissingEnv`] so startup can fail fast
/// instead of crashing mid-request.
#[derive(Debug, Clone)]
pub struct S3Config {
    /// Access key ID (`AWS_ACCESS_KEY`).
    pub access_key: String,
    /// Secret access key (`AWS_SECRET_ACCESS_KEY`).
    pub secret_key: String,
    /// Target bucket (`S3_BUCKET`).
    pub bucket: String,
    /// Public URL prefix objects are served from (`S3_BASE_URL`),
    /// e.g. `https://s3.us-east-1.amazonaws.com/`.
    pub base_url: String,
    /// AWS region (`AWS_REGION`, default `us-east-1`).
    pub region: String,
}

impl S3Config {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                 | Default     |
    /// |-------------------------|-------------|
    /// | `AWS_ACCESS_KEY`        | *required*  |
    /// | `AWS_SECRET_ACCESS_KEY` | *required*  |
    /// | `S3_BUCKET`             | *required*  |
    /// | `S3_BASE_URL`           | *required*  |
    /// | `AWS_REGION`            | `us-east-1` |
    pub fn from_env() -> Result<Self, StorageError> {
        Ok(Self {
            access_key: require("AWS_ACCESS_KEY")?,
            secret_key: require("AWS_SECRET_ACCESS_KEY")?,
            bucket: require("S3_BUCKET")?,
            base_url: require("S3_BASE_URL")?,
            region: std::env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".into()),
        })
    }
}

fn require(var: &'static str) -> Result<String, StorageError> {
    std::env::var(var).map_err(|_| StorageError::MissingEnv(var))
}
