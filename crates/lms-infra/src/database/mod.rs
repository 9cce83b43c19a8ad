//! Course persistence through SeaORM.

mod connections;
mod course_repo;

pub mod entity;

pub use connections::DatabaseConfig;
pub use course_repo::SeaOrmCourseRepository;

#[cfg(test)]
mod tests;
