//! Object-storage signing port.

use async_trait::async_trait;

use crate::domain::PresignRequest;

/// Issues time-limited URLs granting one operation on one stored object.
///
/// Implementations never transfer object bytes.
#[async_trait]
pub trait UrlSigner: Send + Sync {
    /// Produce a pre-signed URL for the request.
    async fn presign(&self, request: &PresignRequest) -> Result<String, StorageError>;
}

/// Storage signing errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage not configured: {0}")]
    NotConfigured(String),

    #[error("Invalid object key: {0}")]
    InvalidKey(String),

    #[error("Signing failed: {0}")]
    Signing(String),
}
