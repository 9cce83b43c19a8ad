//! Application state - shared across all handlers.

use std::sync::Arc;

use lms_core::ports::{CourseRepository, UrlSigner};
use lms_infra::{InMemoryCourseRepository, S3Presigner, UnconfiguredSigner};
use lms_shared::EntityMessages;

#[cfg(feature = "postgres")]
use lms_infra::SeaOrmCourseRepository;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub courses: Arc<dyn CourseRepository>,
    pub signer: Arc<dyn UrlSigner>,
    pub file_messages: Arc<EntityMessages>,
    pub course_messages: Arc<EntityMessages>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let courses = Self::course_repository(config).await;

        let signer: Arc<dyn UrlSigner> = match &config.storage {
            Some(storage) => {
                tracing::info!(bucket = %storage.bucket, region = %storage.region, "Media signing enabled");
                Arc::new(S3Presigner::new(storage.clone()))
            }
            None => {
                tracing::warn!(
                    "BUCKET_NAME, ACCESS_KEY or SECRET_KEY not set. Media requests will fail."
                );
                Arc::new(UnconfiguredSigner::new(
                    "storage credentials are not configured",
                ))
            }
        };

        tracing::info!("Application state initialized");

        Self::from_parts(courses, signer)
    }

    pub fn from_parts(courses: Arc<dyn CourseRepository>, signer: Arc<dyn UrlSigner>) -> Self {
        Self {
            courses,
            signer,
            file_messages: Arc::new(EntityMessages::new("file")),
            course_messages: Arc::new(EntityMessages::new("course")),
        }
    }

    #[cfg(feature = "postgres")]
    async fn course_repository(config: &AppConfig) -> Arc<dyn CourseRepository> {
        let Some(db_config) = &config.database else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Arc::new(InMemoryCourseRepository::new());
        };

        match db_config.connect().await {
            Ok(db) => Arc::new(SeaOrmCourseRepository::new(db)),
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                Arc::new(InMemoryCourseRepository::new())
            }
        }
    }

    #[cfg(not(feature = "postgres"))]
    async fn course_repository(_config: &AppConfig) -> Arc<dyn CourseRepository> {
        tracing::info!("Running without postgres feature - using in-memory repository");
        Arc::new(InMemoryCourseRepository::new())
    }
}
