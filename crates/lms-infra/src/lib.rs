//! # LMS Infrastructure
//!
//! Concrete implementations of the ports defined in `lms-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL course repository via SeaORM
//! - without `postgres` - in-memory course store only

pub mod memory;
pub mod storage;

#[cfg(feature = "postgres")]
pub mod database;

// Re-exports - always available
pub use memory::InMemoryCourseRepository;
pub use storage::{S3Config, S3Presigner, UnconfiguredSigner};

#[cfg(feature = "postgres")]
pub use database::{DatabaseConfig, SeaOrmCourseRepository};
