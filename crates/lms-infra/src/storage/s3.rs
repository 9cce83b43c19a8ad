//! S3 pre-signed URLs through the AWS SDK.
//!
//! Presigning is a local computation; nothing is sent to S3 until the client
//! uses the URL.

use std::fmt;
use std::time::SystemTime;

use async_trait::async_trait;
use aws_credential_types::Credentials;
use aws_sdk_s3::config::BehaviorVersion;
use aws_sdk_s3::{Client, Config};
use aws_sdk_s3::presigning::PresigningConfig;
use aws_types::region::Region;

use lms_core::domain::{ObjectOperation, PresignRequest};
use lms_core::ports::{StorageError, UrlSigner};

/// Region the media bucket lives in.
pub const DEFAULT_REGION: &str = "ap-southeast-1";

/// Bucket location and credentials.
#[derive(Clone)]
pub struct S3Config {
    pub region: String,
    pub bucket: String,
    pub access_key: String,
    pub secret_key: String,
    /// Origin of an S3-compatible server, e.g. `http://localhost:9000`.
    /// When set, the bucket is addressed in the path. Defaults to the
    /// virtual-hosted AWS endpoint.
    pub endpoint: Option<String>,
}

impl S3Config {
    pub fn new(
        bucket: impl Into<String>,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            bucket: bucket.into(),
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            endpoint: None,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    fn client(&self) -> Client {
        let credentials = Credentials::new(
            self.access_key.clone(),
            self.secret_key.clone(),
            None,
            None,
            "lms-static",
        );

        let mut builder = Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(self.region.clone()))
            .credentials_provider(credentials);
        if let Some(endpoint) = &self.endpoint {
            builder = builder
                .endpoint_url(endpoint.trim_end_matches('/'))
                .force_path_style(true);
        }

        Client::from_conf(builder.build())
    }
}

impl fmt::Debug for S3Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("S3Config")
            .field("region", &self.region)
            .field("bucket", &self.bucket)
            .field("access_key", &self.access_key)
            .field("secret_key", &"***")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

/// Issues SigV4 pre-signed URLs for one bucket.
#[derive(Clone)]
pub struct S3Presigner {
    config: S3Config,
    client: Client,
}

impl S3Presigner {
    pub fn new(config: S3Config) -> Self {
        let client = config.client();
        Self { config, client }
    }

    /// Sign `request` with its validity window starting at `start`.
    pub async fn presign_at(
        &self,
        request: &PresignRequest,
        start: SystemTime,
    ) -> Result<String, StorageError> {
        let key = request.key.trim_start_matches('/');
        if key.is_empty() {
            return Err(StorageError::InvalidKey("object key is empty".to_string()));
        }

        let presigning = PresigningConfig::builder()
            .start_time(start)
            .expires_in(request.expires_in)
            .build()
            .map_err(|e| StorageError::Signing(e.to_string()))?;
        let bucket = self.config.bucket.as_str();

        let presigned = match request.operation {
            ObjectOperation::Get => {
                self.client
                    .get_object()
                    .bucket(bucket)
                    .key(key)
                    .presigned(presigning)
                    .await
                    .map_err(|e| StorageError::Signing(e.to_string()))
            }
            ObjectOperation::Put => {
                self.client
                    .put_object()
                    .bucket(bucket)
                    .key(key)
                    .set_content_type(request.content_type.clone())
                    .presigned(presigning)
                    .await
                    .map_err(|e| StorageError::Signing(e.to_string()))
            }
            ObjectOperation::Delete => {
                self.client
                    .delete_object()
                    .bucket(bucket)
                    .key(key)
                    .presigned(presigning)
                    .await
                    .map_err(|e| StorageError::Signing(e.to_string()))
            }
        }?;

        Ok(presigned.uri().to_string())
    }
}

impl fmt::Debug for S3Presigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("S3Presigner")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl UrlSigner for S3Presigner {
    async fn presign(&self, request: &PresignRequest) -> Result<String, StorageError> {
        let url = self.presign_at(request, SystemTime::now()).await?;
        tracing::debug!(
            operation = %request.operation,
            key = %request.key,
            expires_in = request.expires_in.as_secs(),
            "Issued pre-signed URL"
        );
        Ok(url)
    }
}
