//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Body of `PUT /api/media`: the object key and its content type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadUrlRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub content_type: String,
}

/// Successful media response carrying a pre-signed URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignedUrlResponse {
    pub message: String,
    pub url: String,
}

/// Failed media response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
