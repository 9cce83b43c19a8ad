//! Object-storage URL signers.

mod s3;
mod unconfigured;

pub use s3::{DEFAULT_REGION, S3Config, S3Presigner};
pub use unconfigured::UnconfiguredSigner;
