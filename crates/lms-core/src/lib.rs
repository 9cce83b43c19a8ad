//! # LMS Core
//!
//! The domain layer of the learning-management backend.
//! Course records, their transport serialization, outline ordering and the
//! ports that infrastructure implements. No infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
