//! In-memory implementations.

mod course_repo;

pub use course_repo::InMemoryCourseRepository;
