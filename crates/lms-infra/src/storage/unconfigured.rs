use async_trait::async_trait;

use lms_core::domain::PresignRequest;
use lms_core::ports::{StorageError, UrlSigner};

/// Signer used when storage credentials are absent. Every request fails.
#[derive(Debug, Clone)]
pub struct UnconfiguredSigner {
    reason: String,
}

impl UnconfiguredSigner {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl UrlSigner for UnconfiguredSigner {
    async fn presign(&self, _request: &PresignRequest) -> Result<String, StorageError> {
        Err(StorageError::NotConfigured(self.reason.clone()))
    }
}
