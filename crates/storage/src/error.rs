/// Failures the storage layer can report.
///
/// The variants are deliberately distinct so callers and tests can tell a
/// configuration problem from a transport failure from a rejection by the
/// service itself.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A required environment variable is unset.
    #[error("Missing required environment variable: {0}")]
    MissingEnv(&'static str),

    /// The upload never completed (connection, DNS, timeout).
    #[error("Upload failed: {0}")]
    Upload(String),

    /// The storage service received the request and refused it
    /// (missing bucket, access denied).
    #[error("Storage service rejected the request: {0}")]
    Rejected(String),
}
