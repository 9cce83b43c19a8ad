//! SeaORM entities for the course schema.

pub mod category;
pub mod chapter;
pub mod course;
pub mod image;
pub mod instructor;
pub mod page;
pub mod user;
