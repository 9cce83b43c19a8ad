use std::fmt;
use std::time::Duration;

/// Lifetime of every pre-signed URL.
pub const PRESIGNED_URL_TTL: Duration = Duration::from_secs(120);

/// The single object operation a pre-signed URL grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectOperation {
    Get,
    Put,
    Delete,
}

impl ObjectOperation {
    /// HTTP method the URL must be used with.
    pub fn http_method(self) -> &'static str {
        match self {
            ObjectOperation::Get => "GET",
            ObjectOperation::Put => "PUT",
            ObjectOperation::Delete => "DELETE",
        }
    }
}

impl fmt::Display for ObjectOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.http_method())
    }
}

/// Parameters for one pre-signed URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresignRequest {
    pub operation: ObjectOperation,
    pub key: String,
    pub content_type: Option<String>,
    pub expires_in: Duration,
}

impl PresignRequest {
    pub fn get(key: impl Into<String>) -> Self {
        Self::new(ObjectOperation::Get, key.into(), None)
    }

    pub fn put(key: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self::new(ObjectOperation::Put, key.into(), Some(content_type.into()))
    }

    pub fn delete(key: impl Into<String>) -> Self {
        Self::new(ObjectOperation::Delete, key.into(), None)
    }

    fn new(operation: ObjectOperation, key: String, content_type: Option<String>) -> Self {
        Self {
            operation,
            key,
            content_type,
            expires_in: PRESIGNED_URL_TTL,
        }
    }
}
